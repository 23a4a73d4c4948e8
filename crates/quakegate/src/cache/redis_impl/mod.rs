//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! Expiration is delegated to Redis (`SET ... EX`).

mod cache;

pub use cache::RedisCache;
