//! Review orchestration: visualization kinds, run context, and the rating session

mod console;
mod prepare;
mod session;

pub use console::{ConsoleReviewer, label_color, parse_rating_line, render_montage};
pub use prepare::{PreparedSubject, output_stem, prepare_subject};
pub use session::{ReviewSession, RunOutcome};

use crate::io::configuration::{AlphaPair, QcConfig};
use crate::io::error::Result;
use clap::ValueEnum;
use ndarray::Array3;
use std::fmt;
use std::path::{Path, PathBuf};

/// Requested visualization/overlay combination
///
/// Only [`VisKind::CorticalVolumetric`] is implemented; the other kinds fail
/// deterministically during preparation rather than rendering something wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum VisKind {
    /// Volumetric overlay of the cortical segmentation on the T1 MRI
    CorticalVolumetric,
    /// Cortical surface rendering (not yet implemented)
    CorticalSurface,
    /// Combined volumetric and surface view (not yet implemented)
    CorticalComposite,
    /// Volumetric overlay of subcortical structures (not yet implemented)
    SubcorticalVolumetric,
}

impl VisKind {
    /// Stable snake_case name, used in CLI values and output artifact names
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::CorticalVolumetric => "cortical_volumetric",
            Self::CorticalSurface => "cortical_surface",
            Self::CorticalComposite => "cortical_composite",
            Self::SubcorticalVolumetric => "subcortical_volumetric",
        }
    }
}

impl fmt::Display for VisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Everything a run needs, fixed before the first subject is reviewed
#[derive(Clone, Debug)]
pub struct RunContext {
    /// Directory containing one folder per subject
    pub data_root: PathBuf,
    /// Directory receiving visualizations and ratings, created beforehand
    pub out_dir: PathBuf,
    /// Validated usable subjects, in review order
    pub subjects: Vec<String>,
    /// Requested visualization kind
    pub vis: VisKind,
    /// Validated layer transparencies
    pub alphas: AlphaPair,
    /// Filenames and defaults for this run
    pub config: QcConfig,
}

/// Inputs handed to the review capability for one subject
pub struct ReviewRequest<'a> {
    /// Anatomical T1 volume
    pub anatomical: &'a Array3<f32>,
    /// Derived overlay volume, same shape as the anatomical
    pub overlay: &'a Array3<i32>,
    /// Deterministic path stem for this subject's output artifacts
    pub output_stem: &'a Path,
    /// Layer transparencies
    pub alphas: AlphaPair,
    /// Identifying annotation shown to the rater
    pub annotation: &'a str,
}

/// What the review capability returns for one subject
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// Rating assigned by the rater, opaque to the orchestrator
    pub rating: String,
    /// Whether the rater asked to stop the batch after this subject
    pub stop_requested: bool,
}

/// The interactive rating step, kept behind a seam
///
/// The orchestrator only depends on this trait, so it can be exercised with
/// a scripted stub instead of a terminal.
pub trait Reviewer {
    /// Present one subject for review and collect a rating plus stop flag
    ///
    /// Blocks until the rater responds; this is the run's only suspension
    /// point.
    ///
    /// # Errors
    ///
    /// Returns an error if the visualization cannot be produced or the
    /// rater's response cannot be read
    fn review_and_rate(&mut self, request: &ReviewRequest<'_>) -> Result<ReviewOutcome>;
}
