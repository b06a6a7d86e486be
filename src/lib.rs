pub mod catalog;
pub mod client;
pub mod clock;
pub mod config;
pub mod errors;
pub mod request;
pub mod response;
pub mod signing;
pub mod transport;
pub mod types;
pub mod wire;

#[cfg(feature = "transport-reqwest")]
pub mod transports;

pub use catalog::OrderListQuery;
pub use client::Client;
pub use config::Config;
pub use errors::{Error, Result};
pub use response::{ApiResponse, Payload};
pub use types::{OrderStatus, WireFormat};
