/// One named field of a request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: &'static str, value: FieldValue) -> Self {
        Field { name, value }
    }
}

/// Value of a payload field.
///
/// `Text` is free-form prose (comments, descriptions); the XML encoder wraps
/// it in CDATA while the JSON encoder treats it as a plain string. `Items`
/// is an ordered collection of child entities, rendered as a JSON array or
/// as a wrapper element containing repeated `item` elements.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Items(Vec<Vec<Field>>),
}

impl FieldValue {
    pub fn str(value: impl Into<String>) -> Self {
        FieldValue::Str(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// A request-side payload that can describe itself as an ordered field list.
///
/// Implementations push optional fields only when set, so neither encoding
/// ever carries a null placeholder.
pub trait Entity {
    fn fields(&self) -> Vec<Field>;
}
