/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Signed trade RPC dispatch and response classification
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{authorization, Credentials};
use crate::http::envelope::{Envelope, ParamValue};
use crate::http::{BtcChinaError, Result};

/// Base URLs for the BTCChina API
const TRADE_BASE_URL: &str = "https://api.btcchina.com";
const DATA_BASE_URL: &str = "https://data.btcchina.com";

const TRADE_ENDPOINT: &str = "/api_trade_v1.php";
pub(crate) const TICKER_ENDPOINT: &str = "/data/ticker";

const USER_AGENT: &str = "btcchina-adapter/0.1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Main HTTP client for the BTCChina trade API.
///
/// Holds the credential pair for its lifetime. Every operation returns its
/// own `Result`; the client carries no per-call state, so one instance can
/// be shared across tasks.
#[derive(Debug)]
pub struct BtcChinaClient {
    http_client: Client,
    trade_base_url: Url,
    data_base_url: Url,
    credentials: Credentials,
}

impl BtcChinaClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(credentials, config, TRADE_BASE_URL, DATA_BASE_URL)
    }

    /// Create a client pointed at explicit hosts (test seam)
    pub fn with_config_and_base_urls(
        credentials: Credentials,
        config: ClientConfig,
        trade_base_url: &str,
        data_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            trade_base_url: Url::parse(trade_base_url)?,
            data_base_url: Url::parse(data_base_url)?,
            credentials,
        })
    }

    /// Get the credential pair
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Dispatch one signed RPC invocation and return the `result` payload.
    ///
    /// One request per call, no retries, no pooling beyond reqwest's own
    /// connection handling; a failed call reports only through the returned
    /// `Result` and the caller decides whether to retry.
    pub(crate) async fn call(&self, method: &str, params: Vec<ParamValue>) -> Result<Value> {
        let envelope = Envelope::new(method, params);
        self.dispatch(&envelope).await
    }

    /// `call` with the payload decoded into a typed result.
    pub(crate) async fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<ParamValue>,
    ) -> Result<T> {
        let payload = self.call(method, params).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// POST a pre-built envelope to the trade endpoint.
    ///
    /// The Authorization header is computed from the same envelope that is
    /// serialized into the body, keeping the signed bytes and the sent
    /// bytes in lockstep.
    pub(crate) async fn dispatch(&self, envelope: &Envelope) -> Result<Value> {
        let canonical = envelope.signing_string(self.credentials.access_key());
        let authorization = authorization(&self.credentials, &canonical);
        let url = self.trade_base_url.join(TRADE_ENDPOINT)?;

        debug!(
            method = envelope.method(),
            tonce = envelope.tonce(),
            "dispatching trade RPC"
        );

        let response = self
            .http_client
            .post(url)
            .header("Accept-Encoding", "identity")
            .header("Json-Rpc-Tonce", envelope.tonce())
            .header("Authorization", authorization)
            .json(&envelope.body(self.credentials.access_key()))
            .send()
            .await?;

        classify(response).await
    }

    /// GET an unauthenticated endpoint on the market-data host.
    pub(crate) async fn get_public(&self, endpoint: &str) -> Result<Value> {
        let url = self.data_base_url.join(endpoint)?;
        let response = self.http_client.get(url).send().await?;
        classify(response).await
    }
}

/// Single-shot classification of one HTTP exchange.
///
/// 200 + `result` or `ticker` is a success; 200 + `error` is an
/// exchange-reported error; any other status is a transport error. A 200
/// body with none of those keys is reported as malformed instead of being
/// folded into the transport branch.
async fn classify(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if status != StatusCode::OK {
        let message = status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string();
        warn!(status = status.as_u16(), %message, "endpoint returned non-200");
        if status == StatusCode::UNAUTHORIZED {
            warn!("check your accesskey/privatekey");
        }
        return Err(BtcChinaError::Transport {
            status: status.as_u16(),
            message,
        });
    }

    let text = response.text().await?;
    let body: Value = serde_json::from_str(&text)
        .map_err(|err| BtcChinaError::MalformedResponse(format!("unparseable 200 body: {err}")))?;

    if let Some(result) = body.get("result") {
        return Ok(result.clone());
    }
    if let Some(ticker) = body.get("ticker") {
        return Ok(ticker.clone());
    }
    if let Some(error) = body.get("error") {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        warn!(code, %message, "exchange reported an error");
        return Err(BtcChinaError::Exchange { code, message });
    }

    Err(BtcChinaError::MalformedResponse(text))
}
