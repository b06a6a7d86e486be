//! Request-side entity trees.
//!
//! All of these are value objects: built by the caller, consumed once by the
//! wire encoders, never mutated by the library. Each implements [`Entity`]
//! by listing its populated fields in declaration order; that single list
//! drives both the JSON and the XML rendering.

use bon::Builder;

use crate::wire::{Entity, Field, FieldValue};

/// A promotional bundle of offers, grouped into slots.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Bundle {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: String,
    pub is_available: Option<bool>,
    #[builder(into)]
    pub start_time: Option<String>,
    #[builder(into)]
    pub end_time: Option<String>,
    #[builder(into)]
    pub bonus_type: Option<String>,
    pub bonus_amount: Option<f64>,
    #[builder(default)]
    pub slots: Vec<BundleSlot>,
}

/// One slot of a bundle; the anchor slot carries the product the bundle is
/// attached to.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct BundleSlot {
    pub is_anchor: bool,
    #[builder(into)]
    pub bonus_type: Option<String>,
    pub bonus_amount: Option<f64>,
    #[builder(default)]
    pub offers: Vec<SlotOffer>,
}

/// An offer referenced from a bundle slot.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct SlotOffer {
    /// Merchant-side offer identifier.
    #[builder(into)]
    pub own_id: String,
    /// Marketplace-side numeric identifier.
    pub yml_id: Option<i64>,
}

/// A shipment package registered against an order.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Package {
    /// Delivery service handling the package.
    #[builder(into)]
    pub service: String,
    #[builder(into)]
    pub package_id: String,
    #[builder(default)]
    pub items: Vec<PackageItem>,
}

/// One line inside a shipment package.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct PackageItem {
    #[builder(into)]
    pub name: String,
    #[builder(default = 1)]
    pub quantity: i64,
}

/// One row of a bulk offer update; fields beyond the identifier are applied
/// only when set.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct OfferUpdate {
    #[builder(into)]
    pub own_id: String,
    pub yml_id: Option<i64>,
    pub price: Option<f64>,
    pub is_available: Option<bool>,
}

/// Push the bonus pair only when both halves are present; a lone type or a
/// lone amount never reaches the wire.
fn push_bonus(fields: &mut Vec<Field>, bonus_type: &Option<String>, bonus_amount: Option<f64>) {
    if let (Some(kind), Some(amount)) = (bonus_type, bonus_amount) {
        fields.push(Field::new("bonusType", FieldValue::str(kind.clone())));
        fields.push(Field::new("bonusAmount", FieldValue::Float(amount)));
    }
}

impl Entity for Bundle {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("name", FieldValue::str(self.name.clone())),
            Field::new("description", FieldValue::text(self.description.clone())),
        ];
        if let Some(available) = self.is_available {
            fields.push(Field::new("isAvailable", FieldValue::Bool(available)));
        }
        if let Some(start) = &self.start_time {
            fields.push(Field::new("startTime", FieldValue::str(start.clone())));
        }
        if let Some(end) = &self.end_time {
            fields.push(Field::new("endTime", FieldValue::str(end.clone())));
        }
        push_bonus(&mut fields, &self.bonus_type, self.bonus_amount);
        if !self.slots.is_empty() {
            let slots = self.slots.iter().map(|slot| slot.fields()).collect();
            fields.push(Field::new("slots", FieldValue::Items(slots)));
        }
        fields
    }
}

impl Entity for BundleSlot {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::new("isAnchor", FieldValue::Bool(self.is_anchor))];
        push_bonus(&mut fields, &self.bonus_type, self.bonus_amount);
        if !self.offers.is_empty() {
            let offers = self.offers.iter().map(|offer| offer.fields()).collect();
            fields.push(Field::new("offers", FieldValue::Items(offers)));
        }
        fields
    }
}

impl Entity for SlotOffer {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::new("ownId", FieldValue::str(self.own_id.clone()))];
        if let Some(yml_id) = self.yml_id {
            fields.push(Field::new("ymlId", FieldValue::Int(yml_id)));
        }
        fields
    }
}

impl Entity for Package {
    fn fields(&self) -> Vec<Field> {
        let items = self.items.iter().map(|item| item.fields()).collect();
        vec![
            Field::new("service", FieldValue::str(self.service.clone())),
            Field::new("packageId", FieldValue::str(self.package_id.clone())),
            Field::new("items", FieldValue::Items(items)),
        ]
    }
}

impl Entity for PackageItem {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", FieldValue::str(self.name.clone())),
            Field::new("quantity", FieldValue::Int(self.quantity)),
        ]
    }
}

impl Entity for OfferUpdate {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::new("ownId", FieldValue::str(self.own_id.clone()))];
        if let Some(yml_id) = self.yml_id {
            fields.push(Field::new("ymlId", FieldValue::Int(yml_id)));
        }
        if let Some(price) = self.price {
            fields.push(Field::new("price", FieldValue::Float(price)));
        }
        if let Some(available) = self.is_available {
            fields.push(Field::new("isAvailable", FieldValue::Bool(available)));
        }
        fields
    }
}
