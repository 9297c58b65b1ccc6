//! Registry Module
//!
//! Student records, their validation, and the in-memory collection.

mod record;
mod seed;
mod store;


// Re-export public types
pub use record::{is_truthy, RequiredField, Student};
pub use seed::{load_seed, parse_seed};
pub use store::{ReplaceIdPolicy, StudentStore};
