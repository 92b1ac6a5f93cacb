//! Navigation primitives.
//!
//! Address and navigation-state shapes shared with the host router, plus the
//! query-parameter port the view core reads and writes selections through.

pub mod address;
pub mod query;

pub use address::{Address, NavigationSnapshot};
pub use query::{InMemoryQueryParams, QueryParams};
