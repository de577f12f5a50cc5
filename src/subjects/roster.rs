//! Partitioning of candidate subjects into usable and skipped sets

use crate::io::configuration::QcConfig;
use crate::io::error::{QcError, Result, file_system};
use std::path::{Path, PathBuf};

/// A subject excluded from review, with every failing required path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSubject {
    /// Identifier of the skipped subject
    pub id: String,
    /// Required paths that are missing or empty
    pub missing: Vec<PathBuf>,
}

/// Result of validating a candidate subject list against a data root
///
/// Every candidate lands in exactly one of the two sets, in input order.
#[derive(Clone, Debug, Default)]
pub struct SubjectRoster {
    /// Subjects with all required files present and non-empty
    pub usable: Vec<String>,
    /// Subjects excluded from review, with the reasons recorded
    pub skipped: Vec<SkippedSubject>,
}

/// Resolve the required file paths for one subject, anatomical first
pub fn required_paths(root: &Path, subject_id: &str, config: &QcConfig) -> [PathBuf; 2] {
    let mri_dir = root.join(subject_id).join("mri");
    config
        .required_filenames()
        .map(|name| mri_dir.join(name))
}

/// Read candidate subject IDs from a listing file, one per line
///
/// Lines are trimmed of surrounding whitespace and newlines; blank lines are
/// dropped. A missing or unreadable listing is a fatal input error.
///
/// # Errors
///
/// Returns [`QcError::SubjectListing`] if the file cannot be read
pub fn candidates_from_listing(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| QcError::SubjectListing {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Enumerate candidate subject IDs as the immediate subdirectories of `root`
///
/// Sorted by name so repeated runs see the same order.
///
/// # Errors
///
/// Returns a file system error if the data root cannot be listed
pub fn candidates_from_data_root(root: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(root).map_err(file_system(root, "list data root"))?;
    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(file_system(root, "list data root"))?;
        if entry.path().is_dir() {
            ids.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    ids.sort();
    Ok(ids)
}

impl SubjectRoster {
    /// Check each candidate for the required files and partition the list
    ///
    /// A subject is usable iff both required files exist with non-zero size;
    /// otherwise it is skipped with every failing path recorded. Ordering
    /// follows the candidate order.
    ///
    /// # Errors
    ///
    /// Returns [`QcError::NoUsableSubjects`] when no candidate survives
    /// validation, since a review run without subjects is meaningless
    pub fn validate(candidates: &[String], root: &Path, config: &QcConfig) -> Result<Self> {
        let mut roster = Self::default();
        for id in candidates {
            let missing: Vec<PathBuf> = required_paths(root, id, config)
                .into_iter()
                .filter(|path| !is_present_and_non_empty(path))
                .collect();
            if missing.is_empty() {
                roster.usable.push(id.clone());
            } else {
                roster.skipped.push(SkippedSubject {
                    id: id.clone(),
                    missing,
                });
            }
        }

        if roster.usable.is_empty() {
            return Err(QcError::NoUsableSubjects {
                candidates: candidates.len(),
            });
        }

        Ok(roster)
    }

    /// Emit the operator summary: usable count plus skipped subjects and
    /// their missing or empty files
    ///
    /// Misconfigured trees silently losing subjects is the main operational
    /// failure mode, so this is printed unconditionally.
    // Operator-facing summary, not a log line
    #[allow(clippy::print_stderr)]
    pub fn report(&self) {
        if !self.skipped.is_empty() {
            eprintln!(
                "The following subjects do NOT have all the required files or some are empty - skipping them!"
            );
            for subject in &self.skipped {
                eprintln!("  {}", subject.id);
                for path in &subject.missing {
                    eprintln!("    missing or empty: {}", path.display());
                }
            }
        }
        eprintln!(" {} subjects are usable for review.", self.usable.len());
    }
}

fn is_present_and_non_empty(path: &Path) -> bool {
    std::fs::metadata(path).map(|meta| meta.len() > 0).unwrap_or(false)
}
