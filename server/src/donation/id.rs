use rand::Rng;
use std::fmt;
use uuid::Uuid;

pub const PROVISIONAL_ID_PREFIX: &str = "DONATION-";

const PROVISIONAL_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PROVISIONAL_ID_SUFFIX_LEN: usize = 9;

/// Generates a provisional donation id such as `DONATION-4F7K2Q9ZB`.
pub fn provisional_donation_id() -> String {
    provisional_donation_id_with(&mut rand::thread_rng())
}

pub fn provisional_donation_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..PROVISIONAL_ID_SUFFIX_LEN)
        .map(|_| PROVISIONAL_ID_ALPHABET[rng.gen_range(0..PROVISIONAL_ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", PROVISIONAL_ID_PREFIX, suffix)
}

/// The id a donation is currently known by. Starts provisional and is
/// replaced once the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DonationId {
    Provisional(String),
    Persisted(Uuid),
}

impl DonationId {
    pub fn provisional() -> Self {
        DonationId::Provisional(provisional_donation_id())
    }

    pub fn persisted_id(&self) -> Option<Uuid> {
        match self {
            DonationId::Persisted(id) => Some(*id),
            DonationId::Provisional(_) => None,
        }
    }

    /// Name of the downloadable QR image for this donation.
    pub fn download_file_name(&self) -> String {
        format!("donation-qr-{}.png", self)
    }
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonationId::Provisional(id) => f.write_str(id),
            DonationId::Persisted(id) => write!(f, "{}", id),
        }
    }
}
