use crate::protobuf::from::{FromProto, ProtoFrom};
use tonic::Status;

/// Converts a domain value into its protobuf message, `value.into_proto()`.
pub trait IntoProto<P> {
    fn into_proto(self) -> Result<P, Status>;
}

impl<P, T> IntoProto<P> for T
where
    P: ProtoFrom<T>,
{
    fn into_proto(self) -> Result<P, Status> {
        P::proto_from(self)
    }
}

/// Converts a protobuf message into a domain value, `message.proto_into()`.
pub trait ProtoInto<T> {
    fn proto_into(self) -> Result<T, Status>;
}

impl<P, T> ProtoInto<T> for P
where
    T: FromProto<P>,
{
    fn proto_into(self) -> Result<T, Status> {
        T::from_proto(self)
    }
}
