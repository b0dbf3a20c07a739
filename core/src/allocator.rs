//! Per-image display duration allocation.
//!
//! Two modes exist: the operator either types a duration per image, or
//! enters one total and lets the portal divide it evenly. The divided value
//! is recomputed from the current count and total on every read and is never
//! written back onto the images.

use crate::pending::PendingImage;
use serde::{Deserialize, Serialize};

/// How a batch's display time is distributed across its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionMode {
    /// Each image keeps the duration typed in by the operator.
    Manual,
    /// One total duration, divided evenly across the batch.
    EquallyDivided,
}

/// Seconds each image gets when `total_minutes` is split across `count`
/// images.
///
/// Integer division truncates toward zero; up to `count - 1` leftover
/// seconds are dropped rather than redistributed. Zero when the batch is
/// empty or the total is not positive. Minutes are a float because the
/// total-duration input accepts fractional values.
pub fn divided_duration(count: usize, total_minutes: f64) -> u32 {
    if count == 0 || total_minutes <= 0.0 {
        return 0;
    }
    ((total_minutes * 60.0) / count as f64).floor() as u32
}

/// Effective duration of every image under the given mode, in batch order.
pub fn allocate(mode: SubmissionMode, images: &[PendingImage], total_minutes: f64) -> Vec<u32> {
    match mode {
        SubmissionMode::Manual => images.iter().map(|image| image.duration_secs).collect(),
        SubmissionMode::EquallyDivided => {
            let per_image = divided_duration(images.len(), total_minutes);
            vec![per_image; images.len()]
        }
    }
}

/// Whether the submit action must stay disabled.
///
/// Only manual mode gates on durations: an equally divided batch goes
/// through even when the computed share is zero.
pub fn submit_blocked(mode: SubmissionMode, images: &[PendingImage]) -> bool {
    match mode {
        SubmissionMode::EquallyDivided => false,
        SubmissionMode::Manual => images.iter().any(|image| image.duration_secs == 0),
    }
}
