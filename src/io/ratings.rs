//! Insertion-ordered rating record and its JSON persistence

use crate::io::configuration::QcConfig;
use crate::io::error::{QcError, Result, file_system};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One collected rating, keyed by the subject that received it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    /// Subject whose segmentation was rated
    pub subject_id: String,
    /// Rating value as returned by the review capability, kept opaque
    pub rating: String,
}

/// Ratings collected so far, in processing order
///
/// Grows by one entry per reviewed subject and never shrinks. Duplicate
/// subject IDs are recorded independently, matching the roster semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingRecord {
    entries: Vec<RatingEntry>,
}

impl RatingRecord {
    /// Create an empty record
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a rating for the given subject
    pub fn record(&mut self, subject_id: impl Into<String>, rating: impl Into<String>) {
        self.entries.push(RatingEntry {
            subject_id: subject_id.into(),
            rating: rating.into(),
        });
    }

    /// Entries in processing order
    pub fn entries(&self) -> &[RatingEntry] {
        &self.entries
    }

    /// Rating of the first entry recorded for `subject_id`, if any
    pub fn get(&self, subject_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.subject_id == subject_id)
            .map(|e| e.rating.as_str())
    }

    /// Number of ratings collected so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ratings have been collected yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Persist the collected ratings under the output directory
///
/// Written as a JSON array of `{subject_id, rating}` objects so processing
/// order survives the round trip. Safe to call with an empty or partial
/// record, which covers the early-stop path.
///
/// # Errors
///
/// Returns an error if the ratings cannot be serialized or the file cannot
/// be written
pub fn save_ratings(record: &RatingRecord, out_dir: &Path, config: &QcConfig) -> Result<PathBuf> {
    let path = out_dir.join(&config.ratings_filename);
    let payload = serde_json::to_string_pretty(record).map_err(|source| QcError::RatingsExport {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, payload).map_err(file_system(path.clone(), "write ratings"))?;
    Ok(path)
}
