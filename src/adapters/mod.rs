//! Adapter implementations for port traits
//!
//! This module contains concrete implementations, some of which handle I/O:
//!
//! - `memory` - In-memory security store and the shared state record
//! - `file/` - JSON file security store
//! - `detector` - Cat detector for externally scored frames
//! - `log_listener` - Status listener that writes to the log

pub mod detector;
pub mod file;
pub mod log_listener;
pub mod memory;

pub use detector::ThresholdCatDetector;
pub use file::{JsonFileSecurityStore, StoreError};
pub use log_listener::LogListener;
pub use memory::{MemorySecurityStore, SecurityState};
