mod error;
mod keys;
mod read_through;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::events_key;
pub use read_through::{ResponseCache, DEFAULT_TTL};
pub use serialization::{deserialize_value, serialize_value, SerializationError};
pub use traits::Cache;
