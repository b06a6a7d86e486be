use serde_json::{Map, Value};

use super::fields::{Field, FieldValue};
use crate::errors::Result;

/// Render a field list as a flat JSON object, recursing into collections.
pub(super) fn encode(fields: &[Field]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&object(fields))?)
}

fn object(fields: &[Field]) -> Value {
    let mut map = Map::new();
    for field in fields {
        map.insert(field.name.to_owned(), value(&field.value));
    }
    Value::Object(map)
}

fn value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Str(s) | FieldValue::Text(s) => Value::from(s.as_str()),
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::Float(f) => Value::from(*f),
        FieldValue::Bool(b) => Value::from(*b),
        FieldValue::Items(children) => Value::Array(children.iter().map(|c| object(c)).collect()),
    }
}
