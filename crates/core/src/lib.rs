//! Functional core for quakegate.
//!
//! Everything here is free of HTTP servers and concrete stores:
//!
//! - [`cache`]: cache traits, key helpers, and the read-through [`cache::ResponseCache`]
//! - [`xml`]: converts XML text into the nested key/array tree used for extraction
//! - [`quake`]: event query parameters, QuakeML extraction, and the upstream trait

pub mod cache;
pub mod quake;
pub mod xml;
