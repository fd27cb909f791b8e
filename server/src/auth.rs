use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Verifies access tokens issued by the hosted auth provider.
pub struct JwtAuth {
    decoding_key: DecodingKey,
    validation: Validation,
}

pub struct DecodedAccessToken {
    pub uid: String,
    pub email: Option<String>,
    pub expire_time: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not decode: {0}")]
    Decode(#[from] jsonwebtoken::errors::Error),

    #[error("invalid expiry: {0}")]
    InvalidExpiry(i64),
}

impl JwtAuth {
    pub fn new(jwt_secret: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn verify_access_token(&self, access_token: &str) -> Result<DecodedAccessToken, Error> {
        let claims = decode::<Claims>(access_token, &self.decoding_key, &self.validation)?.claims;
        let expire_time =
            DateTime::from_timestamp(claims.exp, 0).ok_or(Error::InvalidExpiry(claims.exp))?;

        Ok(DecodedAccessToken {
            uid: claims.sub,
            email: claims.email,
            expire_time,
        })
    }
}

#[derive(Deserialize, Debug)]
struct Claims {
    // User id
    pub sub: String,
    // User email, absent for phone sign-ins
    pub email: Option<String>,
    // The expiry date -- as epoch seconds
    pub exp: i64,
}
