/*
[INPUT]:  RPC method name and positional parameters
[OUTPUT]: JSON request body and the canonical string that gets signed
[POS]:    HTTP layer - request envelope and canonicalization
[UPDATE]: When the exchange changes its envelope or canonical form
*/

use chrono::Utc;
use serde::Serialize;

/// `requestmethod` is constant on this API version.
pub const REQUEST_METHOD: &str = "post";

/// Positional RPC argument. The trade API takes `params` as a JSON array
/// whose element types vary per method.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Numeric param with integral values collapsed to integers, so a
    /// truncated `2.0` travels as `2` in both the body and the signature.
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            ParamValue::Int(value as i64)
        } else {
            ParamValue::Float(value)
        }
    }

    /// Canonical rendering used inside the signing string.
    ///
    /// Booleans become `"1"` / `""` (empty, not `"0"`), quote characters are
    /// stripped from strings, and nested lists flatten into the same comma
    /// join as their parent. This mirrors the server's own canonicalization
    /// and must not be "cleaned up" without verifying against it.
    fn push_canonical(&self, out: &mut String) {
        match self {
            ParamValue::Int(value) => out.push_str(&value.to_string()),
            ParamValue::Float(value) => out.push_str(&value.to_string()),
            ParamValue::Str(value) => out.push_str(&value.replace('\'', "")),
            ParamValue::Bool(true) => out.push('1'),
            ParamValue::Bool(false) => {}
            ParamValue::List(items) => push_joined(items, out),
        }
    }
}

fn push_joined(items: &[ParamValue], out: &mut String) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        item.push_canonical(out);
    }
}

impl Serialize for ParamValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Int(value) => serializer.serialize_i64(*value),
            ParamValue::Float(value) => serializer.serialize_f64(*value),
            ParamValue::Str(value) => serializer.serialize_str(value),
            ParamValue::Bool(value) => serializer.serialize_bool(*value),
            ParamValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Microsecond wall-clock nonce. Strictly increasing in practice, which is
/// all the exchange's replay check requires.
pub fn tonce() -> String {
    Utc::now().timestamp_micros().to_string()
}

/// One trade-API invocation before signing.
///
/// `id` defaults to the tonce when unset. The remaining envelope fields
/// (`accesskey`, `requestmethod`) are supplied at serialization time.
#[derive(Debug, Clone)]
pub struct Envelope {
    tonce: String,
    id: Option<String>,
    method: String,
    params: Vec<ParamValue>,
}

impl Envelope {
    /// Envelope with a fresh wall-clock tonce.
    pub fn new(method: impl Into<String>, params: Vec<ParamValue>) -> Self {
        Self::with_tonce(tonce(), method, params)
    }

    /// Envelope with a caller-supplied tonce.
    pub fn with_tonce(
        tonce: impl Into<String>,
        method: impl Into<String>,
        params: Vec<ParamValue>,
    ) -> Self {
        Self {
            tonce: tonce.into(),
            id: None,
            method: method.into(),
            params,
        }
    }

    /// Override the request id. Without this the id mirrors the tonce.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tonce(&self) -> &str {
        &self.tonce
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.tonce)
    }

    /// Wire form of the envelope, with `params` as a native JSON array.
    ///
    /// Serde emits struct fields in declaration order, which pins the body
    /// to the `tonce, accesskey, requestmethod, id, method, params` order
    /// the server's canonicalizer expects. Input construction order never
    /// affects the output.
    pub fn body<'a>(&'a self, access_key: &'a str) -> WireEnvelope<'a> {
        WireEnvelope {
            tonce: &self.tonce,
            accesskey: access_key,
            requestmethod: REQUEST_METHOD,
            id: self.id(),
            method: &self.method,
            params: &self.params,
        }
    }

    /// Canonical signing string: the six envelope fields as `key=value`
    /// pairs joined by `&`, with `params` comma-flattened.
    ///
    /// This must stay byte-identical to what the server derives from the
    /// JSON body; any divergence invalidates the signature.
    pub fn signing_string(&self, access_key: &str) -> String {
        let mut params = String::new();
        push_joined(&self.params, &mut params);
        format!(
            "tonce={}&accesskey={}&requestmethod={}&id={}&method={}&params={}",
            self.tonce,
            access_key,
            REQUEST_METHOD,
            self.id(),
            self.method,
            params
        )
    }
}

/// Serialized envelope. Field order is part of the signed contract.
#[derive(Debug, Serialize)]
pub struct WireEnvelope<'a> {
    tonce: &'a str,
    accesskey: &'a str,
    requestmethod: &'a str,
    id: &'a str,
    method: &'a str,
    params: &'a [ParamValue],
}
