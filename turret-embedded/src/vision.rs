//! Boundary types for the colour-blob tracker.
//!
//! Frame capture and segmentation live outside this crate. A detector reports
//! at most one observation per processed frame and has no link to the motors.

use serde::{Deserialize, Serialize};

/// Blobs with an enclosing radius at or below this many pixels are noise.
pub const MIN_BLOB_RADIUS: f32 = 10.0;

/// Pixel-space position of the tracked target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlobObservation {
    pub x: i32,
    pub y: i32,
    pub radius: f32,
}

impl BlobObservation {
    /// Build from a minimum enclosing circle; the centre is truncated to
    /// whole pixels.
    pub fn from_circle(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
            radius,
        }
    }

    pub fn qualifies(&self) -> bool {
        self.radius > MIN_BLOB_RADIUS
    }
}

pub trait BlobDetector {
    type Frame;
    type Error;

    /// `Ok(None)` when no qualifying blob is present in `frame`.
    fn detect(&mut self, frame: &Self::Frame) -> Result<Option<BlobObservation>, Self::Error>;
}
