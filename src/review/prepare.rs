//! Per-subject image preparation ahead of the interactive review

use crate::io::configuration::OUTPUT_STEM_PREFIX;
use crate::io::error::{QcError, Result};
use crate::review::{RunContext, VisKind};
use crate::subjects::required_paths;
use crate::volume::{load_anatomical, load_segmentation, void_subcortical_symmetrize_cortical};
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// Volumes and output location prepared for one subject's review
#[derive(Debug)]
pub struct PreparedSubject {
    /// Anatomical T1 volume
    pub anatomical: Array3<f32>,
    /// Derived overlay volume, same shape as the segmentation it came from
    pub overlay: Array3<i32>,
    /// Path stem for this subject's output artifacts
    pub output_stem: PathBuf,
}

/// Deterministic output path stem for a subject's artifacts
///
/// Pure in its inputs, so re-runs land on the same paths and saved artifacts
/// stay associated with their ratings.
pub fn output_stem(out_dir: &Path, vis: VisKind, subject_id: &str) -> PathBuf {
    out_dir.join(format!("{OUTPUT_STEM_PREFIX}_{vis}_{subject_id}"))
}

/// Load and transform one subject's volumes for the requested visualization
///
/// Dispatches on the visualization kind before touching the filesystem, so
/// unimplemented kinds fail immediately instead of producing partial output.
///
/// # Errors
///
/// Returns [`QcError::UnsupportedVisKind`] for kinds other than
/// `cortical_volumetric`, and propagates volume load failures labelled with
/// the role of the file that failed
pub fn prepare_subject(ctx: &RunContext, subject_id: &str) -> Result<PreparedSubject> {
    match ctx.vis {
        VisKind::CorticalVolumetric => {}
        other => {
            return Err(QcError::UnsupportedVisKind {
                kind: other.wire_name().to_string(),
            });
        }
    }

    let [t1_path, seg_path] = required_paths(&ctx.data_root, subject_id, &ctx.config);
    let anatomical = load_anatomical(&t1_path)?;
    let segmentation = load_segmentation(&seg_path)?;
    let overlay = void_subcortical_symmetrize_cortical(&segmentation);

    Ok(PreparedSubject {
        anatomical,
        overlay,
        output_stem: output_stem(&ctx.out_dir, ctx.vis, subject_id),
    })
}
