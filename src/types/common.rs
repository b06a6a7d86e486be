use std::fmt::Display;
use std::str::FromStr;

use crate::errors::Error;

pub type AnyJson = serde_json::Value;

/// HTTP verbs the merchant API accepts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Write operations carry a body and a `Content-Type` header.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization used for request and response bodies, selected per client.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum WireFormat {
    #[default]
    Json,
    Xml,
}

impl WireFormat {
    /// MIME type sent in the `Accept` and `Content-Type` headers.
    pub fn mime(&self) -> &'static str {
        match self {
            WireFormat::Json => "application/json",
            WireFormat::Xml => "application/xml",
        }
    }
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireFormat::Json => f.write_str("json"),
            WireFormat::Xml => f.write_str("xml"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" | "application/json" => Ok(WireFormat::Json),
            "xml" | "application/xml" => Ok(WireFormat::Xml),
            other => Err(Error::Configuration(format!(
                "unknown wire format `{other}`, expected `json` or `xml`"
            ))),
        }
    }
}

/// Order lifecycle statuses recognized by the server. Closed set; anything
/// else is rejected client-side before I/O.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OrderStatus {
    Opened,
    Canceled,
    Rejected,
    Confirmed,
    Annuled,
    Invalid,
    Faked,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Opened,
        OrderStatus::Canceled,
        OrderStatus::Rejected,
        OrderStatus::Confirmed,
        OrderStatus::Annuled,
        OrderStatus::Invalid,
        OrderStatus::Faked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Opened => "opened",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Annuled => "annuled",
            OrderStatus::Invalid => "invalid",
            OrderStatus::Faked => "faked",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
                Error::validation("status", format!("one of: {}", valid.join(", ")))
            })
    }
}

/// Pagination scheme used by the order listing. Deployments of the API
/// diverge here: newer ones take a page number, older ones a row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationStyle {
    /// `pageSize` + `page` query parameters.
    #[default]
    PageNumber,
    /// `pageSize` + `offset` query parameters; the offset is derived as
    /// `(page - 1) * pageSize`.
    Offset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_parses_names_and_mime_types() {
        assert_eq!("json".parse::<WireFormat>().unwrap(), WireFormat::Json);
        assert_eq!("xml".parse::<WireFormat>().unwrap(), WireFormat::Xml);
        assert_eq!(
            "application/xml".parse::<WireFormat>().unwrap(),
            WireFormat::Xml
        );
    }

    #[test]
    fn wire_format_rejects_unknown_selector() {
        let err = "yaml".parse::<WireFormat>().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn order_status_round_trips_every_member() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn order_status_rejects_outsider() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, Error::Validation { argument: "status", .. }));
    }

    #[test]
    fn method_body_rule() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
