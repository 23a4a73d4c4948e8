//! QuakeML extraction over the tree produced by [`crate::xml::parse_document`].
//!
//! The event list sits at `root → eventParameters[0] → event[]`. Each field is
//! read by its own accessor, so a missing or malformed field only blanks that
//! field and never the rest of the event.

use serde_json::Value;

use super::types::{CreationInfo, Depth, Magnitude, Origin, QuakeEvent};
use crate::xml::{parse_document, XmlError, ATTR_KEY, TEXT_KEY};

/// Evaluates `path`, returning `default` when any step of it is missing.
///
/// # Examples
///
/// ```
/// use quakegate_core::quake::try_or;
/// use serde_json::json;
///
/// let doc = json!({ "a": [{ "b": ["1"] }] });
/// let found = try_or(|| doc.get("a")?.get(0)?.get("b")?.get(0)?.as_str(), "-");
/// let missing = try_or(|| doc.get("x")?.get(0)?.as_str(), "-");
/// assert_eq!((found, missing), ("1", "-"));
/// ```
pub fn try_or<T>(path: impl FnOnce() -> Option<T>, default: T) -> T {
    path().unwrap_or(default)
}

/// Parses an XML payload and extracts its events.
pub fn events_from_xml(xml: &str) -> Result<Vec<QuakeEvent>, XmlError> {
    let doc = parse_document(xml)?;
    Ok(events_from_document(&doc))
}

/// Extracts every event of the first `eventParameters` block.
pub fn events_from_document(doc: &Value) -> Vec<QuakeEvent> {
    let events = try_or(
        || {
            doc.as_object()?
                .values()
                .next()?
                .get("eventParameters")?
                .get(0)?
                .get("event")?
                .as_array()
                .map(Vec::as_slice)
        },
        &[] as &[Value],
    );

    events.iter().map(event_from_node).collect()
}

fn event_from_node(event: &Value) -> QuakeEvent {
    QuakeEvent {
        public_id: attr(event, "publicID"),
        event_type: child(event, &["type"]).and_then(text),
        description: child(event, &["description", "text"]).and_then(text),
        magnitude: try_or(|| child(event, &["magnitude"]).map(magnitude), Magnitude::default()),
        origin: try_or(|| child(event, &["origin"]).map(origin), Origin::default()),
        creation_info: try_or(
            || child(event, &["creationInfo"]).map(creation_info),
            CreationInfo::default(),
        ),
    }
}

fn magnitude(node: &Value) -> Magnitude {
    Magnitude {
        value: child(node, &["mag", "value"]).and_then(number),
        uncertainty: child(node, &["mag", "uncertainty"]).and_then(number),
        magnitude_type: child(node, &["type"]).and_then(text),
    }
}

fn origin(node: &Value) -> Origin {
    Origin {
        latitude: child(node, &["latitude", "value"]).and_then(number),
        longitude: child(node, &["longitude", "value"]).and_then(number),
        time: child(node, &["time", "value"]).and_then(text),
        uncertainty: child(node, &["time", "uncertainty"]).and_then(number),
        depth: Depth {
            value: child(node, &["depth", "value"]).and_then(number),
            uncertainty: child(node, &["depth", "uncertainty"]).and_then(number),
        },
    }
}

fn creation_info(node: &Value) -> CreationInfo {
    CreationInfo {
        agency_id: child(node, &["agencyID"]).and_then(text),
        author: child(node, &["author"]).and_then(text),
        creation_time: child(node, &["creationTime"]).and_then(text),
    }
}

/// Follows `keys`, taking the first element at each step.
fn child<'a>(node: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(node, |current, key| current.get(*key)?.get(0))
}

fn attr(node: &Value, name: &str) -> Option<String> {
    Some(node.get(ATTR_KEY)?.get(name)?.as_str()?.to_string())
}

fn text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => Some(map.get(TEXT_KEY)?.as_str()?.to_string()),
        _ => None,
    }
}

fn number(node: &Value) -> Option<f64> {
    text(node)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
