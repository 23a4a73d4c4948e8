use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use chrono::Utc;

use quakegate_core::quake::{default_window, EventQuery, QuakeEvent};

use crate::resolver::EventResolver;

/// Root query type.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Seismic events from the FDSN event service.
    ///
    /// `starttime` and `endtime` default to one month ago and now (UTC).
    /// Empty strings and zero values are not forwarded upstream.
    #[allow(clippy::too_many_arguments)]
    async fn events(
        &self,
        ctx: &Context<'_>,
        starttime: Option<String>,
        endtime: Option<String>,
        maxmag: Option<f64>,
        minmag: Option<f64>,
        maxdepth: Option<f64>,
        minlat: Option<f64>,
        maxlat: Option<f64>,
        minlon: Option<f64>,
        maxlon: Option<f64>,
        minversion: Option<i32>,
        format: Option<String>,
        limit: Option<i32>,
    ) -> Result<Vec<QuakeEvent>> {
        let resolver = ctx.data::<Arc<EventResolver>>()?;
        let (default_start, default_end) = default_window(Utc::now());

        let query = EventQuery {
            starttime: Some(starttime.unwrap_or(default_start)),
            endtime: Some(endtime.unwrap_or(default_end)),
            maxmag,
            minmag,
            maxdepth,
            minlat,
            maxlat,
            minlon,
            maxlon,
            minversion,
            format,
            limit,
        };

        resolver.events(&query).await.map_err(|err| {
            tracing::warn!(error = %err, "Event query failed");
            err.into()
        })
    }
}
