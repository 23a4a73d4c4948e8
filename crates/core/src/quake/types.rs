//! Resolved event records.
//!
//! Every leaf is optional: a value missing from the upstream document, or one
//! that does not parse as the target type, is `None`. The nested groups are
//! always present so clients can select into them without null checks.

use serde::{Deserialize, Serialize};

/// A single seismic event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(name = "Quake"))]
pub struct QuakeEvent {
    /// Resource identifier of the event (`publicID` attribute).
    pub public_id: Option<String>,
    /// Event classification, e.g. `earthquake`.
    pub event_type: Option<String>,
    /// Human readable region description.
    pub description: Option<String>,
    pub magnitude: Magnitude,
    pub origin: Origin,
    pub creation_info: CreationInfo,
}

/// Magnitude estimate of an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct Magnitude {
    pub value: Option<f64>,
    pub uncertainty: Option<f64>,
    /// Magnitude scale, e.g. `ML` or `Mw`.
    #[cfg_attr(feature = "graphql", graphql(name = "type"))]
    pub magnitude_type: Option<String>,
}

/// Hypocenter and origin time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct Origin {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Origin time as published upstream.
    pub time: Option<String>,
    /// Uncertainty of the origin time, in seconds.
    pub uncertainty: Option<f64>,
    pub depth: Depth,
}

/// Hypocenter depth, in the upstream unit (meters for QuakeML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct Depth {
    pub value: Option<f64>,
    pub uncertainty: Option<f64>,
}

/// Provenance of the event record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
pub struct CreationInfo {
    #[cfg_attr(feature = "graphql", graphql(name = "agencyID"))]
    pub agency_id: Option<String>,
    pub author: Option<String>,
    pub creation_time: Option<String>,
}
