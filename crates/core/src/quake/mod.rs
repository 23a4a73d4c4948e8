//! Seismic event domain: query parameters, QuakeML extraction, and the
//! upstream source abstraction.

mod error;
mod extract;
mod query;
mod source;
mod types;

pub use error::{QuakeError, Result};
pub use extract::{events_from_document, events_from_xml, try_or};
pub use query::{default_window, EventQuery, TIME_FORMAT};
pub use source::{EventSource, QueryPairs};
pub use types::{CreationInfo, Depth, Magnitude, Origin, QuakeEvent};
