use crate::Error;
use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};

pub trait PageTokenable<P>
where
    P: PageToken<P>,
{
    fn page_token(&self) -> P;
}

pub trait PageToken<T> {
    // Serializes self into a string.
    fn serialize_page_token(&self) -> Result<String, Error>;

    // Deserializes string into some type T. Empty input means the first page.
    fn deserialize_page_token(input: &str) -> Result<Option<T>, Error>;
}

// Implement page token for all serializable/deserializable types.
impl<T> PageToken<T> for T
where
    T: Serialize + DeserializeOwned,
{
    fn serialize_page_token(&self) -> Result<String, Error> {
        let json = serde_json::to_string(self)
            .context("serialization page token to json failed")
            .map_err(Error::PageToken)?;
        Ok(STANDARD.encode(json))
    }

    fn deserialize_page_token(input: &str) -> Result<Option<T>, Error> {
        if input.is_empty() {
            return Ok(None);
        }
        let octets = STANDARD
            .decode(input)
            .context("decoding input as base64 failed")
            .map_err(Error::PageToken)?;
        let utf8 = std::str::from_utf8(&octets)
            .context("converting bytes into utf8 string failed")
            .map_err(Error::PageToken)?;
        let deserialized = serde_json::from_str(utf8)
            .context("deserializing json string to page token struct failed")
            .map_err(Error::PageToken)?;
        Ok(Some(deserialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::donation::DonationPageToken;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn empty_token_is_first_page() -> Result<(), Error> {
        assert_eq!(DonationPageToken::deserialize_page_token("")?, None);
        Ok(())
    }

    #[test]
    fn serialized_token_is_read_back() -> Result<(), Error> {
        let token = DonationPageToken {
            create_time: Utc.timestamp_opt(1_700_000_000, 123_000_000).unwrap(),
            donation_id: Uuid::new_v4(),
        };
        let serialized = token.serialize_page_token()?;
        assert_eq!(
            DonationPageToken::deserialize_page_token(&serialized)?,
            Some(token)
        );
        Ok(())
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = DonationPageToken::deserialize_page_token("not base64!");
        assert!(matches!(result, Err(Error::PageToken(_))));
    }
}
