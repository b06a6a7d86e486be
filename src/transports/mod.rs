//! Bundled transport implementations.

#[cfg(feature = "transport-reqwest")]
mod http;

#[cfg(feature = "transport-reqwest")]
pub use http::HttpTransport;
