//! Cat detector port
//!
//! Defines the interface to the image-analysis capability.

use crate::core::models::Image;

/// Answers whether a camera frame shows a cat
pub trait CatDetector: Send + Sync {
    /// Returns true if `image` contains a cat with at least
    /// `confidence_threshold` percent confidence (0-100)
    fn image_contains_cat(&self, image: &Image, confidence_threshold: f32) -> anyhow::Result<bool>;
}
