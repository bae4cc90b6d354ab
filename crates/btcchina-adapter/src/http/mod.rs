/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod envelope;
pub mod error;
pub mod precision;
pub mod public;
pub mod trade;

pub use client::{BtcChinaClient, ClientConfig};
pub use envelope::{tonce, Envelope, ParamValue};
pub use error::{BtcChinaError, Result};
pub use precision::cut_off;
