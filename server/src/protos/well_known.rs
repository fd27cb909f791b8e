use crate::protobuf::from::{FromProto, ProtoFrom};
use charity_status::{internal, invalid_argument};
use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use tonic::Status;
use uuid::Uuid;

impl FromProto<String> for Uuid {
    fn from_proto(proto: String) -> Result<Self, Status> {
        Uuid::parse_str(&proto).map_err(|e| invalid_argument!("could not parse uuid: {:?}", e))
    }
}

impl ProtoFrom<Uuid> for String {
    fn proto_from(value: Uuid) -> Result<Self, Status> {
        Ok(value.to_string())
    }
}

/// DateTime<Utc> -> google.protobuf.Timestamp
impl ProtoFrom<DateTime<Utc>> for Timestamp {
    fn proto_from(value: DateTime<Utc>) -> Result<Self, Status> {
        Ok(Timestamp {
            seconds: value.timestamp(),
            nanos: value
                .timestamp_subsec_nanos()
                .try_into()
                .map_err(|e| internal!("invalid nanos: {:?}", e))?,
        })
    }
}
