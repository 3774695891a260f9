//! Cat detector adapters

use crate::core::models::Image;
use crate::core::ports::CatDetector;

/// Detector for frames already scored by an external classifier
///
/// Reports a fixed confidence (percent) for every frame; a frame counts as
/// showing a cat when that confidence reaches the requested threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCatDetector {
    confidence: f32,
}

impl ThresholdCatDetector {
    /// Create a detector reporting `confidence`, clamped to 0-100
    #[must_use]
    pub fn new(confidence: f32) -> Self {
        Self {
            confidence: confidence.clamp(0.0, 100.0),
        }
    }

    /// Confidence reported for every frame
    #[must_use]
    pub const fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl Default for ThresholdCatDetector {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl CatDetector for ThresholdCatDetector {
    fn image_contains_cat(&self, image: &Image, confidence_threshold: f32) -> anyhow::Result<bool> {
        log::debug!("Frame of {} bytes scored at {}%", image.bytes().len(), self.confidence);
        Ok(self.confidence >= confidence_threshold)
    }
}
