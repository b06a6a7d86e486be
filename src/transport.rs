//! Transport collaborator interface.

use crate::request::Request;

/// Raw result of one HTTP exchange: status code and body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes a prepared request against the network.
///
/// The kit treats this as an opaque collaborator: retries, timeouts and
/// redirects are the implementation's business. An `Err` here means no
/// response could be obtained at all; HTTP error statuses come back as a
/// normal [`RawResponse`].
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn perform(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>>;
}
