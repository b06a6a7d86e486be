//! Response decoding.

use crate::types::AnyJson;

/// Decoded body of an API response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body decoded as structured JSON.
    Structured(AnyJson),
    /// The body kept verbatim when structured decoding does not apply.
    Raw(String),
}

/// Outcome of one API call.
///
/// A non-200 status is data, not a failure: callers branch on `status` and
/// `error` themselves. Only the transport signals a hard failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub payload: Payload,
    pub status: u16,
    /// Server-side message, present only for non-200 responses whose
    /// payload exposes one.
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Decode a raw transport response.
///
/// Bodies are decoded with JSON semantics regardless of the configured
/// request format; see DESIGN.md for the XML-response compatibility note.
pub fn parse(body: &[u8], status: u16) -> ApiResponse {
    let payload = match serde_json::from_slice::<AnyJson>(body) {
        Ok(value) => Payload::Structured(value),
        Err(_) => Payload::Raw(String::from_utf8_lossy(body).into_owned()),
    };

    let error = match (&payload, status) {
        (Payload::Structured(AnyJson::Object(object)), code) if code != 200 => object
            .get("message")
            .and_then(AnyJson::as_str)
            .map(str::to_owned),
        _ => None,
    };

    ApiResponse {
        payload,
        status,
        error,
    }
}
