use crate::donation::money;
use charity_status::{
    well_known::{invalid_field, missing_required_field},
    Status,
};
pub use charity_storage::models::donation::DonationKind;

/// A donation as submitted through the donation form.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationRequest {
    pub category: String,

    /// Currency-tagged amount for monetary donations, a quantity description
    /// for item donations.
    pub amount_text: String,

    pub kind: DonationKind,

    /// Phone number or payment handle.
    pub recipient: String,

    /// How many people an item donation feeds.
    pub beneficiary_count: Option<String>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl DonationRequest {
    /// Checks required fields. Must pass before a submission is started.
    pub fn validate(&self) -> Result<(), Status> {
        if is_blank(&self.category) {
            return Err(missing_required_field("category"));
        }
        if is_blank(&self.recipient) {
            return Err(missing_required_field("recipient"));
        }
        if is_blank(&self.amount_text) {
            return Err(missing_required_field("amount"));
        }
        if self.kind == DonationKind::Items
            && self.beneficiary_count.as_deref().map_or(true, is_blank)
        {
            return Err(missing_required_field("beneficiary_count"));
        }
        // Payload fields are line-delimited in the item contact card.
        let fields = [
            ("category", Some(self.category.as_str())),
            ("amount", Some(self.amount_text.as_str())),
            ("recipient", Some(self.recipient.as_str())),
            ("beneficiary_count", self.beneficiary_count.as_deref()),
        ];
        for (name, value) in fields {
            if value.map_or(false, |value| value.chars().any(char::is_control)) {
                return Err(invalid_field(name, "contains control characters"));
            }
        }
        Ok(())
    }

    pub fn numeric_amount(&self) -> Option<f64> {
        match self.kind {
            DonationKind::Monetary => money::parse_amount(&self.amount_text),
            DonationKind::Items => None,
        }
    }

    pub fn description(&self) -> String {
        match self.kind {
            DonationKind::Monetary => format!(
                "Monetary donation: {} - Contact: {}",
                self.amount_text, self.recipient
            ),
            DonationKind::Items => {
                let feeds = self
                    .beneficiary_count
                    .as_ref()
                    .map(|count| format!(" (feeds {} people)", count))
                    .unwrap_or_default();
                format!(
                    "Item donation: {} - {}{} - Contact: {}",
                    self.category, self.amount_text, feeds, self.recipient
                )
            }
        }
    }
}
