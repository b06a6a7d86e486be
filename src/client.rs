//! The orchestrating client: one call per logical operation.

use chrono::{DateTime, Utc};

use crate::catalog::{self, Operation, OrderListQuery};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::request;
use crate::response::{self, ApiResponse};
use crate::transport::Transport;
use crate::types::{Bundle, OfferUpdate, OrderStatus, Package};

#[cfg(feature = "transport-reqwest")]
use crate::transports::HttpTransport;

/// Merchant API client.
///
/// Holds the immutable configuration, a transport collaborator and a time
/// source. Every call flows catalog → request builder → transport →
/// response parser; no state is shared between calls, so a single client
/// can be used concurrently.
#[derive(Debug, Clone)]
pub struct Client<T, C = SystemClock> {
    config: Config,
    transport: T,
    clock: C,
}

impl<T: Transport> Client<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Client {
            config,
            transport,
            clock: SystemClock,
        }
    }
}

#[cfg(feature = "transport-reqwest")]
impl Client<HttpTransport> {
    /// Client over the bundled reqwest transport.
    pub fn from_config(config: Config) -> Self {
        Client::new(config, HttpTransport::new())
    }
}

impl<T: Transport, C: Clock> Client<T, C> {
    /// Swap the time source; used to pin timestamps in tests.
    pub fn with_clock(config: Config, transport: T, clock: C) -> Self {
        Client {
            config,
            transport,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn dispatch(&self, operation: Operation) -> Result<ApiResponse> {
        let request = request::build(&operation, &self.config, &self.clock)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("{} {} ({})", request.method, request.path, operation.name);

        let raw = self
            .transport
            .perform(&request)
            .await
            .map_err(|err| Error::Transport(Box::new(err)))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("{} returned HTTP {}", operation.name, raw.status);

        Ok(response::parse(&raw.body, raw.status))
    }

    /// Fetch one order.
    pub async fn get_order(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::get_order(order_id)?).await
    }

    /// List orders with paging and optional status/date filters.
    pub async fn list_orders(&self, query: &OrderListQuery) -> Result<ApiResponse> {
        self.dispatch(catalog::list_orders(query, self.config.pagination)?)
            .await
    }

    /// Possible status transitions for an order, with their reasons.
    pub async fn order_transitions(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::order_transitions(order_id)?).await
    }

    /// Request a status transition.
    pub async fn set_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        reason_id: i64,
        comment: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(catalog::set_order_status(order_id, status, reason_id, comment)?)
            .await
    }

    /// Status change history of an order.
    pub async fn order_status_history(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::order_status_history(order_id)?).await
    }

    pub async fn order_comments(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::order_comments(order_id)?).await
    }

    pub async fn add_order_comment(&self, order_id: i64, text: &str) -> Result<ApiResponse> {
        self.dispatch(catalog::add_order_comment(order_id, text)?)
            .await
    }

    /// Shipment packages registered for an order.
    pub async fn order_packages(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::order_packages(order_id)?).await
    }

    /// Register shipment packages for an order.
    pub async fn register_packages(
        &self,
        order_id: i64,
        packages: &[Package],
    ) -> Result<ApiResponse> {
        self.dispatch(catalog::register_packages(order_id, packages)?)
            .await
    }

    /// Set the order-level delivery state; `time` defaults to now.
    pub async fn set_delivery_status(
        &self,
        order_id: i64,
        state: &str,
        time: Option<DateTime<Utc>>,
    ) -> Result<ApiResponse> {
        let time = time.unwrap_or_else(|| self.clock.now());
        self.dispatch(catalog::set_delivery_status(order_id, state, time)?)
            .await
    }

    /// Set the delivery state of one package; `time` defaults to now.
    pub async fn set_package_state(
        &self,
        order_id: i64,
        package_id: &str,
        state: &str,
        time: Option<DateTime<Utc>>,
    ) -> Result<ApiResponse> {
        let time = time.unwrap_or_else(|| self.clock.now());
        self.dispatch(catalog::set_package_state(order_id, package_id, state, time)?)
            .await
    }

    /// Appeal subjects applicable to an order.
    pub async fn order_appeal_subjects(&self, order_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::order_appeal_subjects(order_id)?)
            .await
    }

    pub async fn create_appeal(
        &self,
        order_id: i64,
        subject_id: i64,
        text: &str,
    ) -> Result<ApiResponse> {
        self.dispatch(catalog::create_appeal(order_id, subject_id, text)?)
            .await
    }

    /// Bulk-update offer rows.
    pub async fn update_offers(&self, offers: &[OfferUpdate]) -> Result<ApiResponse> {
        self.dispatch(catalog::update_offers(offers)?).await
    }

    pub async fn create_bundle(&self, bundle_id: i64, bundle: &Bundle) -> Result<ApiResponse> {
        self.dispatch(catalog::create_bundle(bundle_id, bundle)?)
            .await
    }

    pub async fn update_bundle(&self, bundle_id: i64, bundle: &Bundle) -> Result<ApiResponse> {
        self.dispatch(catalog::update_bundle(bundle_id, bundle)?)
            .await
    }

    pub async fn delete_bundle(&self, bundle_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::delete_bundle(bundle_id)?).await
    }

    pub async fn order_status_directory(&self) -> Result<ApiResponse> {
        self.dispatch(catalog::order_status_directory()).await
    }

    pub async fn seller_delivery_variants(&self, seller_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::seller_delivery_variants(seller_id)?)
            .await
    }

    pub async fn delivery_location(&self, delivery_id: i64) -> Result<ApiResponse> {
        self.dispatch(catalog::delivery_location(delivery_id)?).await
    }

    pub async fn delivery_status_directory(&self) -> Result<ApiResponse> {
        self.dispatch(catalog::delivery_status_directory()).await
    }

    pub async fn payment_type_directory(&self) -> Result<ApiResponse> {
        self.dispatch(catalog::payment_type_directory()).await
    }

    pub async fn appeal_subject_directory(&self) -> Result<ApiResponse> {
        self.dispatch(catalog::appeal_subject_directory()).await
    }

    pub async fn appeal_status_directory(&self) -> Result<ApiResponse> {
        self.dispatch(catalog::appeal_status_directory()).await
    }
}
