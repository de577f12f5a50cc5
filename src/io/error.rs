//! Error types and context for subject validation and review operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all review operations
#[derive(Debug)]
pub enum QcError {
    /// Run configuration cannot be satisfied
    Config {
        /// Description of what is wrong with the configuration
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The subject ID listing file is missing or unreadable
    SubjectListing {
        /// Path to the listing file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// No candidate subject has all the required files
    NoUsableSubjects {
        /// Number of candidate subjects that were checked
        candidates: usize,
    },

    /// Failed to load a required volume from disk
    VolumeLoad {
        /// Semantic role of the file ("anatomical T1" or "aparc+aseg segmentation")
        role: &'static str,
        /// Path to the volume file
        path: PathBuf,
        /// Underlying NIfTI reader error
        source: nifti::NiftiError,
    },

    /// A loaded volume does not have the expected three dimensions
    VolumeShape {
        /// Semantic role of the file
        role: &'static str,
        /// Path to the volume file
        path: PathBuf,
        /// Number of dimensions actually found
        ndim: usize,
    },

    /// The requested visualization kind has no implementation yet
    UnsupportedVisKind {
        /// Wire name of the requested kind
        kind: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered visualization to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize the collected ratings
    RatingsExport {
        /// Path where the ratings file was being written
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for QcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => {
                write!(f, "Configuration error: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SubjectListing { path, source } => {
                write!(
                    f,
                    "Unable to read the subject ID list '{}': {source}",
                    path.display()
                )
            }
            Self::NoUsableSubjects { candidates } => {
                write!(
                    f,
                    "None of the {candidates} candidate subjects have all the required files - unable to proceed"
                )
            }
            Self::VolumeLoad { role, path, source } => {
                write!(
                    f,
                    "Failed to load {role} volume '{}': {source}",
                    path.display()
                )
            }
            Self::VolumeShape { role, path, ndim } => {
                write!(
                    f,
                    "Expected a 3D {role} volume at '{}', found {ndim} dimensions",
                    path.display()
                )
            }
            Self::UnsupportedVisKind { kind } => {
                write!(
                    f,
                    "Visualization kind '{kind}' has not been implemented yet"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export visualization to '{}': {source}",
                    path.display()
                )
            }
            Self::RatingsExport { path, source } => {
                write!(
                    f,
                    "Failed to write ratings to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for QcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SubjectListing { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::VolumeLoad { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::RatingsExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for review results
pub type Result<T> = std::result::Result<T, QcError>;

/// Create a configuration error
pub fn config_error(reason: &impl ToString) -> QcError {
    QcError::Config {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QcError {
    QcError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation label to a raw I/O error
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> QcError {
    let path = path.into();
    move |source| QcError::FileSystem {
        path,
        operation,
        source,
    }
}
