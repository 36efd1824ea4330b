//! Provider credentials supplied by the caller.

use secrecy::{ExposeSecret, SecretString};

/// API key pair forwarded verbatim to the provider.
///
/// Both halves are held as [`SecretString`], so `Debug` output and tracing
/// fields never contain the raw values. They live only for one request.
#[derive(Debug)]
pub struct Credentials {
    api_key: SecretString,
    secret_key: SecretString,
}

impl Credentials {
    /// Creates a new Credentials instance.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// The provider API key (`apikey` in request bodies).
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// The provider secret key (`secretapikey` in request bodies).
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}
