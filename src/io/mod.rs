//! Input/output operations: CLI surface, configuration, errors, ratings, progress

/// Command-line interface and run-context resolution
pub mod cli;
/// Immutable run configuration and validated display parameters
pub mod configuration;
/// Error types for all review operations
pub mod error;
/// Progress display for the subject batch
pub mod progress;
/// Insertion-ordered rating record and its on-disk persistence
pub mod ratings;
