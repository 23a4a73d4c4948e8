//! Event query parameters.

use chrono::{DateTime, Months, Utc};

use super::source::QueryPairs;
use crate::cache::events_key;

/// Timestamp layout used for the default query window.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Filters for an FDSN event query.
///
/// Every filter is optional. Only "truthy" values reach the upstream service:
/// non-empty strings and numbers that are neither zero nor NaN. Anything else
/// is left out of the request instead of being sent empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub starttime: Option<String>,
    pub endtime: Option<String>,
    pub maxmag: Option<f64>,
    pub minmag: Option<f64>,
    pub maxdepth: Option<f64>,
    pub minlat: Option<f64>,
    pub maxlat: Option<f64>,
    pub minlon: Option<f64>,
    pub maxlon: Option<f64>,
    pub minversion: Option<i32>,
    pub format: Option<String>,
    pub limit: Option<i32>,
}

trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

fn truthy<T: Truthy>(value: &Option<T>) -> Option<&T> {
    value.as_ref().filter(|v| v.is_truthy())
}

impl EventQuery {
    /// Creates a query over `[starttime, endtime]` with no other filters.
    pub fn between(starttime: impl Into<String>, endtime: impl Into<String>) -> Self {
        Self {
            starttime: Some(starttime.into()),
            endtime: Some(endtime.into()),
            ..Self::default()
        }
    }

    /// Returns the outbound parameters, dropping absent and falsy values.
    ///
    /// # Examples
    ///
    /// ```
    /// use quakegate_core::quake::EventQuery;
    ///
    /// let query = EventQuery {
    ///     starttime: Some("2020-01-01".to_string()),
    ///     endtime: Some(String::new()),
    ///     maxmag: Some(0.0),
    ///     ..EventQuery::default()
    /// };
    /// assert_eq!(query.to_query_pairs(), vec![("starttime", "2020-01-01".to_string())]);
    /// ```
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        let mut push = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((name, value));
            }
        };

        push("starttime", truthy(&self.starttime).cloned());
        push("endtime", truthy(&self.endtime).cloned());
        push("maxmag", truthy(&self.maxmag).map(f64::to_string));
        push("minmag", truthy(&self.minmag).map(f64::to_string));
        push("maxdepth", truthy(&self.maxdepth).map(f64::to_string));
        push("minlat", truthy(&self.minlat).map(f64::to_string));
        push("maxlat", truthy(&self.maxlat).map(f64::to_string));
        push("minlon", truthy(&self.minlon).map(f64::to_string));
        push("maxlon", truthy(&self.maxlon).map(f64::to_string));
        push("minversion", truthy(&self.minversion).map(i32::to_string));
        push("format", truthy(&self.format).cloned());
        push("limit", truthy(&self.limit).map(i32::to_string));

        pairs
    }

    /// Returns the cache key for this query, if both time bounds are truthy.
    pub fn cache_key(&self) -> Option<String> {
        let start = truthy(&self.starttime)?;
        let end = truthy(&self.endtime)?;
        Some(events_key(start, end))
    }
}

/// Returns the default `(starttime, endtime)` window: one month before `now` up to `now`.
pub fn default_window(now: DateTime<Utc>) -> (String, String) {
    let start = now.checked_sub_months(Months::new(1)).unwrap_or(now);
    (
        start.format(TIME_FORMAT).to_string(),
        now.format(TIME_FORMAT).to_string(),
    )
}
