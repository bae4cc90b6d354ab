/*
[INPUT]:  Access key and secret key supplied by the embedding caller
[OUTPUT]: Credential pair held for the lifetime of a client
[POS]:    Auth layer - API key storage
[UPDATE]: When credential sourcing or exposure rules change
*/

use std::fmt;

/// API credential pair.
///
/// The access key travels in every signed envelope; the secret key never
/// leaves the process and is only used as the HMAC key.
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
