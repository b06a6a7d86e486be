use bon::Builder;
use url::Url;

use crate::types::{PaginationStyle, WireFormat};

/// Names of the headers carrying the timestamp and the signature.
///
/// Deployments of the API have shipped under different header prefixes;
/// everything else about the authentication scheme is identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProfile {
    pub date: String,
    pub auth: String,
}

impl Default for HeaderProfile {
    fn default() -> Self {
        HeaderProfile {
            date: "X-Custom-Date".to_owned(),
            auth: "X-Custom-Authentication".to_owned(),
        }
    }
}

/// Client configuration. Immutable after construction and shared read-only
/// by every call.
#[derive(Builder, Debug, Clone)]
pub struct Config {
    /// Base URL of the merchant API host.
    pub host: Url,
    /// Access identifier presented in the authentication header.
    #[builder(into)]
    pub access_id: String,
    /// Shared secret the signature engine signs with.
    #[builder(into)]
    pub secret_key: String,
    /// Wire format for request bodies and the `Accept` header.
    #[builder(default)]
    pub format: WireFormat,
    /// Pagination scheme the order listing renders.
    #[builder(default)]
    pub pagination: PaginationStyle,
    /// Timestamp/signature header names.
    #[builder(default)]
    pub headers: HeaderProfile,
}
