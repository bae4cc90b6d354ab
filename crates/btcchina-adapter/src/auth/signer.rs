/*
[INPUT]:  Canonical signing string and credential pair
[OUTPUT]: "Basic ..." Authorization header value
[POS]:    Auth layer - HMAC-SHA1 request signing
[UPDATE]: When the exchange changes its signature scheme
*/

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::Credentials;

type HmacSha1 = Hmac<Sha1>;

/// Hex-encoded HMAC-SHA1 digest of `message` keyed by `secret_key`.
///
/// An empty secret still produces a digest; the exchange answers such a
/// request with an auth error, which is the intended failure path.
pub fn hmac_sha1_hex(secret_key: &str, message: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Authorization header value for one signed request.
///
/// Format: `Basic base64(accesskey:hexdigest)` where `hexdigest` is the
/// HMAC-SHA1 of the canonical signing string. Pure function of the
/// credential pair and the canonical string.
pub fn authorization(credentials: &Credentials, canonical: &str) -> String {
    let digest = hmac_sha1_hex(credentials.secret_key(), canonical);
    let token = format!("{}:{}", credentials.access_key(), digest);
    format!("Basic {}", BASE64.encode(token))
}
