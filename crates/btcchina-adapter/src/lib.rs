/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BTCChina adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::Credentials;

// Re-export commonly used types from http
pub use http::{
    cut_off,
    BtcChinaClient,
    BtcChinaError,
    ClientConfig,
    Envelope,
    ParamValue,
    Result,
};

// Re-export all types
pub use types::*;
