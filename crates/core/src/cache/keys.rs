/// Returns the cache key for an event query over a time range.
///
/// Only the time bounds take part in the key; the remaining filters are not
/// part of it, so two queries over the same window share an entry.
///
/// ISO timestamps contain `:` themselves, so the key cannot be split back
/// into its bounds. Treat it as opaque.
///
/// # Examples
///
/// ```
/// use quakegate_core::cache::events_key;
///
/// assert_eq!(
///     events_key("2023-01-01T00:00:00", "2023-01-02T00:00:00"),
///     "events:2023-01-01T00:00:00:2023-01-02T00:00:00"
/// );
/// ```
pub fn events_key(starttime: &str, endtime: &str) -> String {
    format!("events:{}:{}", starttime, endtime)
}
