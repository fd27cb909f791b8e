use crate::page_token::PageTokenable;
use chrono::{serde::ts_nanoseconds, DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "donation_kind", rename_all = "lowercase")]
pub enum DonationKind {
    Monetary,
    Items,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, FromRow, PartialEq)]
pub struct DonationRow {
    pub donation_id: Uuid,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub owner_id: String,
    pub category: String,
    /// Absent for item donations.
    pub amount: Option<f64>,
    pub donation_kind: DonationKind,
    pub description: String,
    /// Empty until the QR payload has been computed.
    pub qr_payload: String,
    pub status: DonationStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDonationRow {
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub owner_id: String,
    pub category: String,
    pub amount: Option<f64>,
    pub donation_kind: DonationKind,
    pub description: String,
    pub qr_payload: String,
    pub status: DonationStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationPageToken {
    #[serde(with = "ts_nanoseconds")]
    pub create_time: DateTime<Utc>,

    pub donation_id: Uuid,
}

impl PageTokenable<DonationPageToken> for DonationRow {
    fn page_token(&self) -> DonationPageToken {
        DonationPageToken {
            create_time: self.create_time,
            donation_id: self.donation_id,
        }
    }
}
