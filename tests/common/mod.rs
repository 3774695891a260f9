//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Recording implementations of the port traits
