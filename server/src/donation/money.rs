use iso_currency::Currency;

/// Marker that switches an amount to Indian rupees.
pub const RUPEE_SIGN: char = '₹';

/// Detects the currency of a free-form amount by sniffing for the rupee sign.
/// Anything else is treated as US dollars.
pub fn detect_currency(amount_text: &str) -> Currency {
    if amount_text.contains(RUPEE_SIGN) {
        Currency::INR
    } else {
        Currency::USD
    }
}

/// Drops every character that is not an ascii digit or a `.`.
pub fn strip_amount(amount_text: &str) -> String {
    amount_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parses the leading decimal number of the stripped amount, e.g. `"$1,234.5"`
/// is `1234.5` and `"1.2.3"` is `1.2`. Returns `None` when no digits remain.
pub fn parse_amount(amount_text: &str) -> Option<f64> {
    let stripped = strip_amount(amount_text);
    let mut seen_dot = false;
    let end = stripped
        .char_indices()
        .find(|&(_, c)| {
            if c != '.' {
                return false;
            }
            let second_dot = seen_dot;
            seen_dot = true;
            second_dot
        })
        .map(|(i, _)| i)
        .unwrap_or(stripped.len());
    let number = &stripped[..end];
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    number.parse::<f64>().ok()
}

/// An amount as typed by the donor, split into its currency and digits.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedAmount {
    pub currency: Currency,

    /// The digits and dots of the amount, possibly empty.
    pub digits: String,
}

impl TaggedAmount {
    pub fn parse(amount_text: &str) -> Self {
        Self {
            currency: detect_currency(amount_text),
            digits: strip_amount(amount_text),
        }
    }
}
