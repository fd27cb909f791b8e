use crate::{
    donation::{
        orchestrator::{SaveOutcome, Submission},
        request::DonationRequest,
    },
    protobuf::from::{FromProto, ProtoFrom},
};
use charity_api::charity::{
    CreateDonationRequest, CreateDonationResponse, Donation, DonationKind as ProtoDonationKind,
    DonationStatus as ProtoDonationStatus, QrCode, SaveState,
};
use charity_status::well_known::{invalid_field, missing_required_field};
use charity_storage::models::donation::{DonationKind, DonationRow, DonationStatus};
use prost_types::Timestamp;
use tonic::Status;

pub const PNG_MIME_TYPE: &str = "image/png";

impl FromProto<i32> for DonationKind {
    fn from_proto(proto: i32) -> Result<Self, Status> {
        match ProtoDonationKind::try_from(proto) {
            Ok(ProtoDonationKind::Monetary) => Ok(DonationKind::Monetary),
            Ok(ProtoDonationKind::Items) => Ok(DonationKind::Items),
            Ok(ProtoDonationKind::Unspecified) => Err(missing_required_field("kind")),
            Err(e) => Err(invalid_field("kind", e)),
        }
    }
}

impl FromProto<CreateDonationRequest> for DonationRequest {
    fn from_proto(proto: CreateDonationRequest) -> Result<Self, Status> {
        Ok(DonationRequest {
            kind: DonationKind::from_proto(proto.kind)?,
            category: proto.category,
            amount_text: proto.amount,
            recipient: proto.recipient,
            beneficiary_count: Some(proto.beneficiary_count).filter(|count| !count.is_empty()),
        })
    }
}

fn kind_to_proto(kind: DonationKind) -> ProtoDonationKind {
    match kind {
        DonationKind::Monetary => ProtoDonationKind::Monetary,
        DonationKind::Items => ProtoDonationKind::Items,
    }
}

fn status_to_proto(status: DonationStatus) -> ProtoDonationStatus {
    match status {
        DonationStatus::Pending => ProtoDonationStatus::Pending,
        DonationStatus::Completed => ProtoDonationStatus::Completed,
        DonationStatus::Cancelled => ProtoDonationStatus::Cancelled,
    }
}

fn save_state_to_proto(save: SaveOutcome) -> SaveState {
    match save {
        SaveOutcome::Saved => SaveState::Saved,
        SaveOutcome::NotSaved => SaveState::NotSaved,
        SaveOutcome::SaveFailed => SaveState::SaveFailed,
    }
}

impl ProtoFrom<Submission> for CreateDonationResponse {
    fn proto_from(value: Submission) -> Result<Self, Status> {
        Ok(CreateDonationResponse {
            donation_id: value.donation_id.to_string(),
            payload: value.payload,
            qr_code: Some(QrCode {
                png: value.qr.image.png,
                file_name: value.qr.file_name,
                mime_type: PNG_MIME_TYPE.to_string(),
            }),
            save_state: save_state_to_proto(value.save) as i32,
            payload_stored: value.payload_stored,
            notice: value.save.notice().to_string(),
        })
    }
}

impl ProtoFrom<DonationRow> for Donation {
    fn proto_from(row: DonationRow) -> Result<Self, Status> {
        Ok(Donation {
            donation_id: row.donation_id.to_string(),
            create_time: Some(Timestamp::proto_from(row.create_time)?),
            update_time: Some(Timestamp::proto_from(row.update_time)?),
            owner_id: row.owner_id,
            category: row.category,
            amount: row.amount,
            kind: kind_to_proto(row.donation_kind) as i32,
            description: row.description,
            qr_payload: row.qr_payload,
            status: status_to_proto(row.status) as i32,
        })
    }
}
