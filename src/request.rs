//! Authenticated request assembly.

use url::Url;

use crate::catalog::Operation;
use crate::clock::Clock;
use crate::config::Config;
use crate::errors::Result;
use crate::signing;
use crate::types::HttpMethod;
use crate::wire;

/// Fixed client identification sent with every request.
pub const USER_AGENT: &str = concat!("merchant-kit/", env!("CARGO_PKG_VERSION"));

/// A fully authenticated request, ready for the transport collaborator.
/// Never mutated after signing.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: HttpMethod,
    /// Absolute URL: configured host + signed path.
    pub url: Url,
    /// The URI covered by the signature, query string included.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Turn a resolved operation into a signed request.
///
/// Encodes the body in the configured wire format, reads the clock once,
/// signs (method, body, timestamp, path) and assembles the header set. The
/// clock read is the only side effect.
pub fn build(operation: &Operation, config: &Config, clock: &impl Clock) -> Result<Request> {
    let body = match &operation.body {
        Some(fields) => Some(wire::encode_fields(fields, config.format)?),
        None => None,
    };

    let timestamp = clock.now().to_rfc2822();
    let signature = signing::sign(
        operation.method,
        body.as_deref(),
        &timestamp,
        &operation.path,
        &config.secret_key,
    );

    // The host is concatenated with the path rather than URL-joined so a
    // base URL mounted under a prefix keeps that prefix.
    let url = Url::parse(&format!(
        "{}{}",
        config.host.as_str().trim_end_matches('/'),
        operation.path
    ))?;

    let mime = config.format.mime();
    let mut headers = vec![("Accept".to_owned(), mime.to_owned())];
    if operation.method.has_body() {
        headers.push(("Content-Type".to_owned(), mime.to_owned()));
    }
    headers.push((config.headers.date.clone(), timestamp));
    headers.push((
        config.headers.auth.clone(),
        format!("{}:{signature}", config.access_id),
    ));
    headers.push(("User-Agent".to_owned(), USER_AGENT.to_owned()));

    Ok(Request {
        method: operation.method,
        url,
        path: operation.path.clone(),
        headers,
        body,
    })
}
