//! End-to-end flows over an in-memory transport: catalog resolution,
//! request signing, dispatch and response decoding.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use merchant_kit::catalog::OrderListQuery;
use merchant_kit::clock::Clock;
use merchant_kit::config::Config;
use merchant_kit::request::Request;
use merchant_kit::response::Payload;
use merchant_kit::transport::{RawResponse, Transport};
use merchant_kit::types::{OrderStatus, PaginationStyle, WireFormat};
use merchant_kit::{Client, Error};
use url::Url;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug)]
struct NoRoute;

impl std::fmt::Display for NoRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no route to host")
    }
}

impl std::error::Error for NoRoute {}

/// Records every request and replays a canned response, or fails like a
/// dead network when given none.
struct MockTransport {
    response: Option<RawResponse>,
    seen: Mutex<Vec<Request>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        MockTransport {
            response: Some(RawResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        MockTransport {
            response: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for &MockTransport {
    type Error = NoRoute;

    async fn perform(&self, request: &Request) -> Result<RawResponse, NoRoute> {
        self.seen.lock().unwrap().push(request.clone());
        self.response.clone().ok_or(NoRoute)
    }
}

fn config() -> Config {
    Config::builder()
        .host(Url::parse("http://merchant-api.lan").unwrap())
        .access_id("13473618150931")
        .secret_key("Mh5EDL9TPnm3A1JAIoHM0w")
        .build()
}

fn client(transport: &MockTransport) -> Client<&MockTransport, FixedClock> {
    Client::with_clock(
        config(),
        transport,
        FixedClock(Utc.with_ymd_and_hms(2014, 7, 15, 12, 0, 0).unwrap()),
    )
}

#[tokio::test]
async fn set_order_status_builds_signed_put() {
    let transport = MockTransport::replying(200, r#"{"success":true}"#);
    let response = client(&transport)
        .set_order_status(660506, OrderStatus::Rejected, 1, "no stock")
        .await
        .unwrap();
    assert!(response.is_success());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/api/1.0/orders/660506/status");
    assert_eq!(
        request.url.as_str(),
        "http://merchant-api.lan/api/1.0/orders/660506/status"
    );
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"status":"rejected","reasonId":1,"comment":"no stock"}"#.as_slice())
    );
    assert_eq!(
        request.header("X-Custom-Date"),
        Some("Tue, 15 Jul 2014 12:00:00 +0000")
    );
    assert_eq!(
        request.header("X-Custom-Authentication"),
        Some("13473618150931:346f2b43d3678e1ecc995f0fe294b6f64138b151")
    );
}

#[tokio::test]
async fn list_orders_builds_filtered_get() {
    let transport = MockTransport::replying(200, r#"{"orders":[]}"#);
    let query = OrderListQuery::builder()
        .page_size(20)
        .page(1)
        .status(OrderStatus::Opened)
        .build();
    client(&transport).list_orders(&query).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/api/1.0/orders?pageSize=20&page=1&status=opened");
    assert!(requests[0].body.is_none());
    assert_eq!(
        requests[0].header("X-Custom-Authentication"),
        Some("13473618150931:58eafd12b62c22f317da8319d76412c79e8c282b")
    );
}

#[tokio::test]
async fn offset_pagination_flag_changes_the_query() {
    let transport = MockTransport::replying(200, "{}");
    let mut config = config();
    config.pagination = PaginationStyle::Offset;
    let client = Client::with_clock(
        config,
        &transport,
        FixedClock(Utc.with_ymd_and_hms(2014, 7, 15, 12, 0, 0).unwrap()),
    );

    let query = OrderListQuery::builder().page_size(20).page(2).build();
    client.list_orders(&query).await.unwrap();
    assert_eq!(
        transport.requests()[0].path,
        "/api/1.0/orders?pageSize=20&offset=20"
    );
}

#[tokio::test]
async fn validation_failure_never_touches_the_transport() {
    let transport = MockTransport::replying(200, "{}");
    let err = client(&transport).get_order(0).await.unwrap_err();
    assert!(matches!(err, Error::Validation { argument: "order_id", .. }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn server_error_message_is_surfaced_as_data() {
    let transport = MockTransport::replying(404, r#"{"message":"order not found"}"#);
    let response = client(&transport).get_order(42).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.status, 404);
    assert_eq!(response.error.as_deref(), Some("order not found"));
}

#[tokio::test]
async fn non_json_body_comes_back_raw() {
    let transport = MockTransport::replying(502, "Bad Gateway");
    let response = client(&transport).get_order(42).await.unwrap();
    assert_eq!(response.payload, Payload::Raw("Bad Gateway".to_owned()));
    assert!(response.error.is_none());
}

#[tokio::test]
async fn dead_transport_is_a_hard_failure() {
    let transport = MockTransport::unreachable();
    let err = client(&transport).get_order(42).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.to_string(), "cannot obtain response");
}

#[tokio::test]
async fn delivery_status_defaults_time_to_clock_now() {
    let transport = MockTransport::replying(200, "{}");
    client(&transport)
        .set_delivery_status(660506, "handed over", None)
        .await
        .unwrap();

    let requests = transport.requests();
    let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
    assert_eq!(
        body,
        r#"{"state":"handed over","time":"Tue, 15 Jul 2014 12:00:00 +0000"}"#
    );
}

#[tokio::test]
async fn xml_client_sends_xml_bodies_but_decodes_json_responses() {
    let transport = MockTransport::replying(200, r#"{"success":true}"#);
    let mut config = config();
    config.format = WireFormat::Xml;
    let client = Client::with_clock(
        config,
        &transport,
        FixedClock(Utc.with_ymd_and_hms(2014, 7, 15, 12, 0, 0).unwrap()),
    );

    let response = client
        .add_order_comment(660506, "please call before delivery")
        .await
        .unwrap();
    assert!(matches!(response.payload, Payload::Structured(_)));

    let requests = transport.requests();
    assert_eq!(requests[0].header("Accept"), Some("application/xml"));
    assert_eq!(requests[0].header("Content-Type"), Some("application/xml"));
    let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
    assert_eq!(
        body,
        "<request><text><![CDATA[please call before delivery]]></text></request>"
    );
}
