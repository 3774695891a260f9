//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the alarm policy and the
//! systems around it (state storage, image analysis, observers).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The alarm engine depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Recording mocks for unit tests
//! - **Flexibility**: Swap in-memory, file-backed or remote stores
//! - **Clarity**: Policy never touches storage details

mod cat_detector;
mod security_store;
mod status_listener;

pub use cat_detector::CatDetector;
pub use security_store::SecurityStore;
pub use status_listener::StatusListener;
