//! Interactive quality-control review of anatomical segmentations overlaid on T1 MRI
//!
//! The system validates which subjects under a data root carry the required
//! volumes, prepares an overlay visualization per subject, and drives a
//! sequential review session in which a human rater assigns each segmentation
//! a rating. Partial ratings are preserved when the rater stops mid-batch.

#![forbid(unsafe_code)]

/// Command-line interface, configuration, errors, ratings, and progress output
pub mod io;
/// Review orchestration: run context, image preparation, and the rating session
pub mod review;
/// Subject roster validation against the required per-subject files
pub mod subjects;
/// Volume loading and the segmentation overlay transform
pub mod volume;

pub use io::error::{QcError, Result};
