use crate::{
    config::PaymentConfig,
    donation::{
        id::DonationId,
        money::TaggedAmount,
        request::{DonationKind, DonationRequest},
    },
};
use iso_currency::Currency;

const ITEM_DONATION_NOTE: &str = "Please contact for item donation pickup/delivery";

/// Builds the string a donation QR code carries: a UPI deep link for rupee
/// amounts, a payment link for other amounts, and contact details for item
/// donations.
#[derive(Clone, Debug)]
pub struct PayloadEncoder {
    upi_handle: String,
    payee_name: String,
    payment_link_base: String,
}

impl Default for PayloadEncoder {
    fn default() -> Self {
        Self::new(&PaymentConfig::default())
    }
}

impl PayloadEncoder {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            upi_handle: config.upi_handle.clone(),
            payee_name: config.payee_name.clone(),
            payment_link_base: config.payment_link_base.clone(),
        }
    }

    pub fn encode(&self, id: &DonationId, request: &DonationRequest) -> String {
        match request.kind {
            DonationKind::Monetary => self.encode_monetary(id, request),
            DonationKind::Items => encode_items(id, request),
        }
    }

    fn encode_monetary(&self, id: &DonationId, request: &DonationRequest) -> String {
        let amount = TaggedAmount::parse(&request.amount_text);
        let note = format!("Donation for {} - {}", request.category, id);
        match amount.currency {
            Currency::INR => format!(
                "upi://pay?pa={}@{}&pn={}&am={}&cu=INR&tn={}",
                request.recipient, self.upi_handle, self.payee_name, amount.digits, note
            ),
            currency => format!(
                "{}?to={}&amount={}&currency={}&note={}",
                self.payment_link_base,
                request.recipient,
                amount.digits,
                currency.code(),
                note
            ),
        }
    }
}

fn encode_items(id: &DonationId, request: &DonationRequest) -> String {
    let mut lines = vec![
        format!("CONTACT:{}", request.recipient),
        format!("DONATION:{}", id),
        format!("CATEGORY:{}", request.category),
        format!("ITEMS:{}", request.amount_text),
    ];
    if let Some(count) = &request.beneficiary_count {
        lines.push(format!("FEEDS:{} people", count));
    }
    lines.push(format!("NOTE:{}", ITEM_DONATION_NOTE));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::donation::request::testing::*;
    use uuid::Uuid;

    fn provisional() -> DonationId {
        DonationId::Provisional("DONATION-ABC123XYZ".to_string())
    }

    #[test]
    fn rupee_amount_is_upi_link() {
        let payload =
            PayloadEncoder::default().encode(&provisional(), &monetary("clothes", "₹500", "9876543210"));
        assert_eq!(
            payload,
            "upi://pay?pa=9876543210@paytm&pn=Charity Donation&am=500&cu=INR\
             &tn=Donation for clothes - DONATION-ABC123XYZ"
        );
    }

    #[test]
    fn dollar_amount_is_payment_link() {
        let payload =
            PayloadEncoder::default().encode(&provisional(), &monetary("food", "$100", "555-1234"));
        assert_eq!(
            payload,
            "https://pay.example.com/send?to=555-1234&amount=100&currency=USD\
             &note=Donation for food - DONATION-ABC123XYZ"
        );
    }

    #[test]
    fn unmarked_amount_is_usd() {
        let payload =
            PayloadEncoder::default().encode(&provisional(), &monetary("food", "1,250.75", "555"));
        assert!(payload.contains("amount=1250.75&currency=USD"));
    }

    #[test]
    fn empty_digits_encode_empty_amount() {
        let payload =
            PayloadEncoder::default().encode(&provisional(), &monetary("food", "$", "555"));
        assert!(payload.contains("amount=&currency=USD"));
    }

    #[test]
    fn item_donation_is_contact_card() {
        let payload = PayloadEncoder::default()
            .encode(&provisional(), &items("food", "20 meals", "555-1234", "20"));
        assert_eq!(
            payload,
            "CONTACT:555-1234\n\
             DONATION:DONATION-ABC123XYZ\n\
             CATEGORY:food\n\
             ITEMS:20 meals\n\
             FEEDS:20 people\n\
             NOTE:Please contact for item donation pickup/delivery"
        );
    }

    #[test]
    fn item_card_omits_missing_beneficiaries() {
        let mut request = items("food", "₹20 of rice", "555-1234", "20");
        request.beneficiary_count = None;
        let payload = PayloadEncoder::default().encode(&provisional(), &request);
        assert!(!payload.contains("FEEDS:"));
        // Items never go through amount parsing.
        assert!(payload.contains("ITEMS:₹20 of rice"));
        assert!(!payload.starts_with("upi://"));
    }

    #[test]
    fn encoding_is_idempotent() {
        let encoder = PayloadEncoder::default();
        let id = DonationId::Persisted(Uuid::new_v4());
        for request in [
            monetary("clothes", "₹500", "9876543210"),
            monetary("food", "$100", "555-1234"),
            items("food", "20 meals", "555-1234", "20"),
        ] {
            assert_eq!(encoder.encode(&id, &request), encoder.encode(&id, &request));
        }
    }

    #[test]
    fn configured_payment_details_are_used() {
        let encoder = PayloadEncoder::new(&PaymentConfig {
            upi_handle: "okaxis".to_string(),
            payee_name: "Food Bank".to_string(),
            payment_link_base: "https://donate.example.org/pay".to_string(),
        });
        let upi = encoder.encode(&provisional(), &monetary("food", "₹10", "99"));
        assert!(upi.starts_with("upi://pay?pa=99@okaxis&pn=Food Bank&am=10"));
        let link = encoder.encode(&provisional(), &monetary("food", "$10", "99"));
        assert!(link.starts_with("https://donate.example.org/pay?to=99&amount=10"));
    }
}
