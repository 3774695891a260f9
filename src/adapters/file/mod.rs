//! File-based security store
//!
//! Implements `SecurityStore` using a pretty-printed JSON file.

mod store;

pub use store::{JsonFileSecurityStore, StoreError};
