//! The operation table.
//!
//! One constructor per logical API call. Each runs its argument validators,
//! substitutes path parameters, appends query parameters in stable order and
//! declares the body field list; nothing here performs I/O or reads a clock.
//! The first failing validator aborts the call with a [`Error::Validation`]
//! naming the offending argument.

use bon::Builder;
use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::errors::{Error, Result};
use crate::types::{HttpMethod, OrderStatus, PaginationStyle};
use crate::types::{Bundle, OfferUpdate, Package};
use crate::wire::{Entity, Field, FieldValue};

/// Versioned base path shared by every endpoint.
pub const BASE_PATH: &str = "/api/1.0/";

/// One resolved logical operation: verb, signed path (query included) and
/// the body field list for write operations.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Vec<Field>>,
}

impl Operation {
    fn get(name: &'static str, path: String) -> Self {
        Operation {
            name,
            method: HttpMethod::Get,
            path,
            body: None,
        }
    }
}

/// Filters and paging for the order listing.
#[derive(Builder, Debug, Clone)]
pub struct OrderListQuery {
    pub page_size: i64,
    #[builder(default = 1)]
    pub page: i64,
    pub status: Option<OrderStatus>,
    pub transition_date_from: Option<DateTime<Utc>>,
    pub transition_date_to: Option<DateTime<Utc>>,
    pub transition_status: Option<OrderStatus>,
}

fn positive(argument: &'static str, value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(Error::validation(argument, "a positive integer"))
    }
}

fn bounded(argument: &'static str, value: &str, max_chars: usize) -> Result<String> {
    let length = value.chars().count();
    if length == 0 {
        Err(Error::validation(argument, "a non-empty string"))
    } else if length > max_chars {
        Err(Error::validation(
            argument,
            format!("a string of at most {max_chars} characters"),
        ))
    } else {
        Ok(value.to_owned())
    }
}

fn non_empty(argument: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        Err(Error::validation(argument, "a non-empty string"))
    } else {
        Ok(value.to_owned())
    }
}

/// Identifiers substituted into a path must not open a new path segment.
fn path_segment(argument: &'static str, value: &str) -> Result<String> {
    let acceptable = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if acceptable {
        Ok(value.to_owned())
    } else {
        Err(Error::validation(
            argument,
            "an identifier of ASCII letters, digits, `-` or `_`",
        ))
    }
}

pub fn get_order(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get("get_order", format!("{BASE_PATH}orders/{id}")))
}

pub fn list_orders(query: &OrderListQuery, style: PaginationStyle) -> Result<Operation> {
    let page_size = positive("page_size", query.page_size)?;
    let page = positive("page", query.page)?;

    let mut pairs = form_urlencoded::Serializer::new(String::new());
    pairs.append_pair("pageSize", &page_size.to_string());
    match style {
        PaginationStyle::PageNumber => {
            pairs.append_pair("page", &page.to_string());
        }
        PaginationStyle::Offset => {
            pairs.append_pair("offset", &((page - 1) * page_size).to_string());
        }
    }
    if let Some(status) = query.status {
        pairs.append_pair("status", status.as_str());
    }
    if let Some(from) = query.transition_date_from {
        pairs.append_pair("transitionDateFrom", &from.to_rfc2822());
    }
    if let Some(to) = query.transition_date_to {
        pairs.append_pair("transitionDateTo", &to.to_rfc2822());
    }
    if let Some(status) = query.transition_status {
        pairs.append_pair("transitionStatus", status.as_str());
    }

    Ok(Operation::get(
        "list_orders",
        format!("{BASE_PATH}orders?{}", pairs.finish()),
    ))
}

pub fn order_transitions(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get(
        "order_transitions",
        format!("{BASE_PATH}orders/{id}/transitions"),
    ))
}

pub fn set_order_status(
    order_id: i64,
    status: OrderStatus,
    reason_id: i64,
    comment: &str,
) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    let reason = positive("reason_id", reason_id)?;
    Ok(Operation {
        name: "set_order_status",
        method: HttpMethod::Put,
        path: format!("{BASE_PATH}orders/{id}/status"),
        body: Some(vec![
            Field::new("status", FieldValue::str(status.as_str())),
            Field::new("reasonId", FieldValue::Int(reason)),
            Field::new("comment", FieldValue::text(comment)),
        ]),
    })
}

pub fn order_status_history(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get(
        "order_status_history",
        format!("{BASE_PATH}orders/{id}/statuses"),
    ))
}

pub fn order_comments(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get(
        "order_comments",
        format!("{BASE_PATH}orders/{id}/comments"),
    ))
}

pub fn add_order_comment(order_id: i64, text: &str) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    let text = non_empty("text", text)?;
    Ok(Operation {
        name: "add_order_comment",
        method: HttpMethod::Post,
        path: format!("{BASE_PATH}orders/{id}/comments"),
        body: Some(vec![Field::new("text", FieldValue::Text(text))]),
    })
}

pub fn order_packages(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get(
        "order_packages",
        format!("{BASE_PATH}orders/{id}/packages"),
    ))
}

pub fn register_packages(order_id: i64, packages: &[Package]) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    if packages.is_empty() {
        return Err(Error::validation("packages", "at least one package"));
    }
    for package in packages {
        non_empty("service", &package.service)?;
        non_empty("package_id", &package.package_id)?;
        for item in &package.items {
            positive("quantity", item.quantity)?;
        }
    }
    let items = packages.iter().map(|p| p.fields()).collect();
    Ok(Operation {
        name: "register_packages",
        method: HttpMethod::Post,
        path: format!("{BASE_PATH}orders/{id}/packages"),
        body: Some(vec![Field::new("packages", FieldValue::Items(items))]),
    })
}

pub fn set_delivery_status(
    order_id: i64,
    state: &str,
    time: DateTime<Utc>,
) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    let state = bounded("state", state, 50)?;
    Ok(Operation {
        name: "set_delivery_status",
        method: HttpMethod::Put,
        path: format!("{BASE_PATH}orders/{id}/deliverystatus"),
        body: Some(vec![
            Field::new("state", FieldValue::Str(state)),
            Field::new("time", FieldValue::str(time.to_rfc2822())),
        ]),
    })
}

pub fn set_package_state(
    order_id: i64,
    package_id: &str,
    state: &str,
    time: DateTime<Utc>,
) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    let package = path_segment("package_id", package_id)?;
    let state = bounded("state", state, 50)?;
    Ok(Operation {
        name: "set_package_state",
        method: HttpMethod::Put,
        path: format!("{BASE_PATH}orders/{id}/packages/{package}/states"),
        body: Some(vec![
            Field::new("state", FieldValue::Str(state)),
            Field::new("time", FieldValue::str(time.to_rfc2822())),
        ]),
    })
}

pub fn order_appeal_subjects(order_id: i64) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    Ok(Operation::get(
        "order_appeal_subjects",
        format!("{BASE_PATH}orders/{id}/appealsubjects"),
    ))
}

pub fn create_appeal(order_id: i64, subject_id: i64, text: &str) -> Result<Operation> {
    let id = positive("order_id", order_id)?;
    let subject = positive("subject_id", subject_id)?;
    let text = non_empty("text", text)?;
    Ok(Operation {
        name: "create_appeal",
        method: HttpMethod::Post,
        path: format!("{BASE_PATH}orders/{id}/appeals/"),
        body: Some(vec![
            Field::new("subjectId", FieldValue::Int(subject)),
            Field::new("text", FieldValue::Text(text)),
        ]),
    })
}

pub fn update_offers(offers: &[OfferUpdate]) -> Result<Operation> {
    if offers.is_empty() {
        return Err(Error::validation("offers", "at least one offer row"));
    }
    for offer in offers {
        non_empty("own_id", &offer.own_id)?;
    }
    let rows = offers.iter().map(|o| o.fields()).collect();
    Ok(Operation {
        name: "update_offers",
        method: HttpMethod::Put,
        path: format!("{BASE_PATH}offers"),
        body: Some(vec![Field::new("offers", FieldValue::Items(rows))]),
    })
}

fn validated_bundle_body(bundle: &Bundle) -> Result<Vec<Field>> {
    non_empty("name", &bundle.name)?;
    non_empty("description", &bundle.description)?;
    Ok(bundle.fields())
}

pub fn create_bundle(bundle_id: i64, bundle: &Bundle) -> Result<Operation> {
    let id = positive("bundle_id", bundle_id)?;
    Ok(Operation {
        name: "create_bundle",
        method: HttpMethod::Post,
        path: format!("{BASE_PATH}bundles/{id}"),
        body: Some(validated_bundle_body(bundle)?),
    })
}

pub fn update_bundle(bundle_id: i64, bundle: &Bundle) -> Result<Operation> {
    let id = positive("bundle_id", bundle_id)?;
    Ok(Operation {
        name: "update_bundle",
        method: HttpMethod::Put,
        path: format!("{BASE_PATH}bundles/{id}"),
        body: Some(validated_bundle_body(bundle)?),
    })
}

pub fn delete_bundle(bundle_id: i64) -> Result<Operation> {
    let id = positive("bundle_id", bundle_id)?;
    Ok(Operation {
        name: "delete_bundle",
        method: HttpMethod::Delete,
        path: format!("{BASE_PATH}bundles/{id}"),
        body: None,
    })
}

pub fn order_status_directory() -> Operation {
    Operation::get(
        "order_status_directory",
        format!("{BASE_PATH}directory/order/statuses"),
    )
}

pub fn seller_delivery_variants(seller_id: i64) -> Result<Operation> {
    let id = positive("seller_id", seller_id)?;
    Ok(Operation::get(
        "seller_delivery_variants",
        format!("{BASE_PATH}directory/seller/{id}/delivery/variants/"),
    ))
}

pub fn delivery_location(delivery_id: i64) -> Result<Operation> {
    let id = positive("delivery_id", delivery_id)?;
    Ok(Operation::get(
        "delivery_location",
        format!("{BASE_PATH}directory/delivery/{id}/location"),
    ))
}

pub fn delivery_status_directory() -> Operation {
    Operation::get(
        "delivery_status_directory",
        format!("{BASE_PATH}directory/delivery/statuses"),
    )
}

pub fn payment_type_directory() -> Operation {
    Operation::get(
        "payment_type_directory",
        format!("{BASE_PATH}directory/payment/types"),
    )
}

pub fn appeal_subject_directory() -> Operation {
    Operation::get(
        "appeal_subject_directory",
        format!("{BASE_PATH}directory/appeal/subject"),
    )
}

pub fn appeal_status_directory() -> Operation {
    Operation::get(
        "appeal_status_directory",
        format!("{BASE_PATH}directory/appeal/status"),
    )
}
