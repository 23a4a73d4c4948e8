//! XML to nested key/array tree conversion.
//!
//! The produced [`serde_json::Value`] follows a fixed convention so callers can
//! address any field by path:
//!
//! - The document is `{ <root name>: <root node> }`.
//! - Every child element is pushed onto an array stored under its qualified
//!   name (`q:quakeml`, `event`, ...), so a single child is read as `name[0]`.
//! - An element without attributes and without child elements becomes its
//!   text content as a string (`""` when empty).
//! - Any other element becomes an object holding its attributes under `"$"`,
//!   its non-blank text under `"_"`, and its children under their names.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key under which element attributes are stored.
pub const ATTR_KEY: &str = "$";

/// Key under which text is stored for elements that also carry attributes or children.
pub const TEXT_KEY: &str = "_";

/// Errors raised while converting an XML document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Syntax(String),
    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(String),
    #[error("Document has no root element")]
    NoRoot,
}

/// An element under construction.
struct Frame {
    name: String,
    attrs: Map<String, Value>,
    text: String,
    children: Map<String, Value>,
}

impl Frame {
    fn open(start: &BytesStart) -> Result<Self, XmlError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attrs = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::Syntax(format!("Invalid attribute: {}", e)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::Syntax(format!("Invalid attribute value: {}", e)))?;
            attrs.insert(key, Value::String(value.into_owned()));
        }
        Ok(Self {
            name,
            attrs,
            text: String::new(),
            children: Map::new(),
        })
    }

    fn push_child(&mut self, name: String, node: Value) {
        match self
            .children
            .entry(name)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items.push(node),
            other => *other = Value::Array(vec![node]),
        }
    }

    fn close(self) -> (String, Value) {
        if self.attrs.is_empty() && self.children.is_empty() {
            return (self.name, Value::String(self.text));
        }

        let mut node = Map::new();
        if !self.attrs.is_empty() {
            node.insert(ATTR_KEY.to_string(), Value::Object(self.attrs));
        }
        if !self.text.trim().is_empty() {
            node.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        node.extend(self.children);
        (self.name, Value::Object(node))
    }
}

/// Parses XML text into the nested key/array tree.
///
/// # Errors
///
/// Returns [`XmlError`] for syntax errors, unclosed elements, or a document
/// without a root element.
///
/// # Examples
///
/// ```
/// use quakegate_core::xml::parse_document;
///
/// let doc = parse_document("<a><b>1</b><b>2</b></a>").unwrap();
/// assert_eq!(doc["a"]["b"][1], "2");
/// ```
pub fn parse_document(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() {
                    return Err(XmlError::Syntax("multiple root elements".to_string()));
                }
                stack.push(Frame::open(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                if root.is_some() {
                    return Err(XmlError::Syntax("multiple root elements".to_string()));
                }
                let closed = Frame::open(e)?.close();
                attach(&mut stack, &mut root, closed);
            }
            Ok(Event::End(_)) => {
                let Some(frame) = stack.pop() else {
                    return Err(XmlError::Syntax("unexpected closing tag".to_string()));
                };
                attach(&mut stack, &mut root, frame.close());
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .decode()
                    .map_err(|e| XmlError::Syntax(format!("Invalid text: {}", e)))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let bytes = e.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&bytes));
            }
            Ok(Event::GeneralRef(ref e)) => {
                let name = e
                    .decode()
                    .map_err(|e| XmlError::Syntax(format!("Invalid entity: {}", e)))?;
                let resolved = match e
                    .resolve_char_ref()
                    .map_err(|e| XmlError::Syntax(format!("Invalid character reference: {}", e)))?
                {
                    Some(ch) => ch.to_string(),
                    None => quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::Syntax(format!("Unknown entity: &{};", name)))?
                        .to_string(),
                };
                append_text(&mut stack, &resolved);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(XmlError::Syntax(format!(
                    "Error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof(open.name.clone()));
    }

    let (name, node) = root.ok_or(XmlError::NoRoot)?;
    let mut doc = Map::new();
    doc.insert(name, node);
    Ok(Value::Object(doc))
}

fn attach(stack: &mut [Frame], root: &mut Option<(String, Value)>, closed: (String, Value)) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(closed.0, closed.1),
        None => *root = Some(closed),
    }
}

fn append_text(stack: &mut [Frame], text: &str) {
    // Text outside the root element (whitespace, mostly) has nowhere to go.
    if let Some(frame) = stack.last_mut() {
        frame.text.push_str(text);
    }
}
