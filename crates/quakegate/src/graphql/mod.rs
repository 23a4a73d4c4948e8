//! GraphQL schema exposed at `/graphql`.

mod query;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::resolver::EventResolver;

pub use query::QueryRoot;

/// The gateway schema: a single `events` query.
pub type QuakeSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with `resolver` available to field resolvers.
pub fn build_schema(resolver: Arc<EventResolver>) -> QuakeSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}
