//! Image command - feed a camera frame to the engine

use std::path::Path;

use homeguard::adapters::ThresholdCatDetector;
use homeguard::core::models::Image;
use homeguard::output::{OperationResult, OutputMode};

use super::open_engine;

/// Process a camera frame scored at `confidence` percent
pub fn image(path: &Path, confidence: f32, output_mode: OutputMode) -> anyhow::Result<()> {
    let frame = Image::open(path)?;
    let mut engine = open_engine(ThresholdCatDetector::new(confidence))?;
    engine.process_image(&frame)?;

    let message = if engine.cat_detected()? {
        format!("Cat detected in {}", path.display())
    } else {
        format!("No cat in {}", path.display())
    };
    OperationResult::ok(message)
        .with_alarm_status(engine.alarm_status()?)
        .render(output_mode);
    Ok(())
}
