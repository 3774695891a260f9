//! Camera frame model

use std::path::Path;

/// A single camera frame, handed opaquely to the cat detector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// Wrap raw encoded frame bytes
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read a frame from disk
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("failed to read image {}: {e}", path.display()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Raw frame bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
