use serde::Deserialize;
use std::env;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("only one of CONFIG and CONFIG_PATH environment variables should be specified")]
    Ambiguous,

    #[error("either CONFIG or CONFIG_PATH environment variables should be specified")]
    Missing,

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub postgres: PostgresConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PostgresConfig {
    pub uri: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthConfig {
    /// HS256 secret the access tokens are signed with.
    pub jwt_secret: String,
    #[serde(default = "default_audience")]
    pub audience: String,
}

/// Fixed parameters of rendered QR images.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct QrConfig {
    /// Minimum width and height in pixels.
    pub size: u32,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    pub dark: String,
    pub light: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: 256,
            margin: 2,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaymentConfig {
    /// Appended to the recipient to build the UPI payee address.
    pub upi_handle: String,
    pub payee_name: String,
    pub payment_link_base: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            upi_handle: "paytm".to_string(),
            payee_name: "Charity Donation".to_string(),
            payment_link_base: "https://pay.example.com/send".to_string(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_audience() -> String {
    "authenticated".to_string()
}

impl ServerConfig {
    pub fn from_toml(config: &str) -> Result<Self, Error> {
        Ok(toml::from_str::<ServerConfig>(config)?)
    }

    /// Loads config from either inline toml or a path to a toml file.
    pub fn load(config: Option<String>, config_path: Option<String>) -> Result<Self, Error> {
        let config_str = match (config_path, config) {
            (None, Some(config)) => config,
            (Some(config_path), None) => std::fs::read_to_string(config_path)?,
            (Some(_), Some(_)) => return Err(Error::Ambiguous),
            (None, None) => return Err(Error::Missing),
        };
        Self::from_toml(&config_str)
    }

    /// Loads config from the CONFIG or CONFIG_PATH environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::load(env::var("CONFIG").ok(), env::var("CONFIG_PATH").ok())
    }
}
