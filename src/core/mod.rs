//! Core domain logic for homeguard
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Sensor, AlarmStatus, ArmingStatus, Image)
//! - `services/` - The alarm engine and its listener fan-out
//! - `ports/` - Trait definitions for the store, detector and listeners

pub mod models;
pub mod ports;
pub mod services;
