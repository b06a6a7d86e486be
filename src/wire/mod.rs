//! Dual-format payload pipeline.
//!
//! Request bodies are described once as an ordered field list and rendered
//! to either wire format from that single declaration, so the JSON and XML
//! encodings always agree on which optional fields are present and in what
//! order the children appear.

mod fields;
mod json;
mod xml;

pub use fields::{Entity, Field, FieldValue};

use crate::errors::Result;
use crate::types::WireFormat;

/// Render an entity in the requested wire format.
pub fn encode(entity: &impl Entity, format: WireFormat) -> Result<Vec<u8>> {
    encode_fields(&entity.fields(), format)
}

/// Render an already-walked field list in the requested wire format.
pub fn encode_fields(fields: &[Field], format: WireFormat) -> Result<Vec<u8>> {
    match format {
        WireFormat::Json => json::encode(fields),
        WireFormat::Xml => xml::encode(fields),
    }
}
