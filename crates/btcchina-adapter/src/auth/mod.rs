/*
[INPUT]:  Credential storage and signing primitives
[OUTPUT]: Authorization header values for signed trade requests
[POS]:    Auth layer - request authentication
[UPDATE]: When the signing scheme or credential handling changes
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{authorization, hmac_sha1_hex};
