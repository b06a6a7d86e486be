use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

use super::fields::{Field, FieldValue};
use crate::errors::{Error, Result};

/// Render a field list as an XML document rooted at `<request>`.
///
/// Children follow the same declared order as the JSON keys. Collections
/// become a wrapper element holding repeated `<item>` elements; free-text
/// values are emitted as CDATA sections.
pub(super) fn encode(fields: &[Field]) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, "request", fields)?;
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, fields: &[Field]) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    for field in fields {
        write_field(writer, field)?;
    }
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn write_field(writer: &mut Writer<Vec<u8>>, field: &Field) -> Result<()> {
    match &field.value {
        FieldValue::Items(children) => {
            emit(writer, Event::Start(BytesStart::new(field.name)))?;
            for child in children {
                write_element(writer, "item", child)?;
            }
            emit(writer, Event::End(BytesEnd::new(field.name)))
        }
        FieldValue::Text(text) => {
            emit(writer, Event::Start(BytesStart::new(field.name)))?;
            emit(writer, Event::CData(BytesCData::new(text.as_str())))?;
            emit(writer, Event::End(BytesEnd::new(field.name)))
        }
        scalar => {
            let rendered = scalar_text(scalar);
            emit(writer, Event::Start(BytesStart::new(field.name)))?;
            emit(writer, Event::Text(BytesText::new(&rendered)))?;
            emit(writer, Event::End(BytesEnd::new(field.name)))
        }
    }
}

fn scalar_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Str(s) => s.clone(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Text(_) | FieldValue::Items(_) => unreachable!("handled by write_field"),
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| Error::XmlEncode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(fields: &[Field]) -> String {
        String::from_utf8(encode(fields).unwrap()).unwrap()
    }

    #[test]
    fn wraps_fields_under_request_root() {
        let fields = vec![
            Field::new("status", FieldValue::str("rejected")),
            Field::new("reasonId", FieldValue::Int(1)),
        ];
        assert_eq!(
            encode_str(&fields),
            "<request><status>rejected</status><reasonId>1</reasonId></request>"
        );
    }

    #[test]
    fn free_text_is_cdata_wrapped() {
        let fields = vec![Field::new("comment", FieldValue::text("no <b>stock</b> & more"))];
        assert_eq!(
            encode_str(&fields),
            "<request><comment><![CDATA[no <b>stock</b> & more]]></comment></request>"
        );
    }

    #[test]
    fn plain_strings_are_escaped() {
        let fields = vec![Field::new("name", FieldValue::str("a<b>&c"))];
        assert_eq!(
            encode_str(&fields),
            "<request><name>a&lt;b&gt;&amp;c</name></request>"
        );
    }

    #[test]
    fn collections_render_as_item_wrappers() {
        let fields = vec![Field::new(
            "items",
            FieldValue::Items(vec![vec![
                Field::new("name", FieldValue::str("mouse")),
                Field::new("quantity", FieldValue::Int(2)),
            ]]),
        )];
        assert_eq!(
            encode_str(&fields),
            "<request><items><item><name>mouse</name><quantity>2</quantity></item></items></request>"
        );
    }

    #[test]
    fn booleans_render_lowercase() {
        let fields = vec![Field::new("isAnchor", FieldValue::Bool(true))];
        assert_eq!(
            encode_str(&fields),
            "<request><isAnchor>true</isAnchor></request>"
        );
    }
}
