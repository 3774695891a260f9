//! Command implementations

mod arm;
mod image;
mod sensor;
mod status;

pub use arm::arm;
pub use image::image;
pub use sensor::sensor_cmd;
pub use status::status;

use std::sync::Arc;

use homeguard::adapters::{JsonFileSecurityStore, LogListener, ThresholdCatDetector};
use homeguard::config::Config;
use homeguard::core::services::AlarmEngine;

/// Engine over the configured state file
pub type Engine = AlarmEngine<JsonFileSecurityStore, ThresholdCatDetector>;

/// Build an engine from the user's config
fn open_engine(detector: ThresholdCatDetector) -> anyhow::Result<Engine> {
    let config = Config::load();
    let path = config.state_file();
    log::debug!("Using state file {}", path.display());

    let store = JsonFileSecurityStore::open(path)?;
    let mut engine = AlarmEngine::new(store, detector);
    if config.listeners.log_events {
        engine.add_status_listener(Arc::new(LogListener));
    }
    Ok(engine)
}
