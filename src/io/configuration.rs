//! Run configuration defaults and validated display parameters

use crate::io::error::{Result, invalid_parameter};

/// Name of the output folder created under the data root when none is given
pub const DEFAULT_OUT_DIR_NAME: &str = "visualqc";

/// Fixed filename of the anatomical T1 volume under `<root>/<id>/mri/`
pub const T1_MRI_FILENAME: &str = "orig.nii.gz";

/// Fixed filename of the segmentation volume under `<root>/<id>/mri/`
pub const SEG_FILENAME: &str = "aparc+aseg.nii.gz";

/// Default transparency of the anatomical layer
pub const DEFAULT_ALPHA_MRI: f64 = 0.7;

/// Default transparency of the segmentation layer
pub const DEFAULT_ALPHA_SEG: f64 = 0.7;

/// Filename of the persisted ratings under the output directory
pub const RATINGS_FILENAME: &str = "ratings.json";

/// Prefix of every per-subject output artifact
pub const OUTPUT_STEM_PREFIX: &str = "visual_qc";

// FreeSurfer aparc+aseg label layout: cortical parcels occupy a fixed
// per-hemisphere band above a baseline, everything below is subcortical.
/// First left-hemisphere cortical label in aparc+aseg
pub const CORTEX_LH_BASELINE: i32 = 1000;
/// First right-hemisphere cortical label in aparc+aseg
pub const CORTEX_RH_BASELINE: i32 = 2000;
/// Number of labels in one hemisphere's cortical band
pub const CORTEX_BAND_WIDTH: i32 = 1000;

/// Immutable per-run configuration of filenames and defaults
///
/// Passed explicitly into the validator and orchestrator so tests can run
/// against alternate directory layouts without touching global state.
#[derive(Clone, Debug)]
pub struct QcConfig {
    /// Output folder name used when no output directory is given
    pub out_dir_name: String,
    /// Filename of the anatomical volume under `<root>/<id>/mri/`
    pub anatomical_filename: String,
    /// Filename of the segmentation volume under `<root>/<id>/mri/`
    pub segmentation_filename: String,
    /// Filename of the persisted ratings
    pub ratings_filename: String,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            out_dir_name: DEFAULT_OUT_DIR_NAME.to_string(),
            anatomical_filename: T1_MRI_FILENAME.to_string(),
            segmentation_filename: SEG_FILENAME.to_string(),
            ratings_filename: RATINGS_FILENAME.to_string(),
        }
    }
}

impl QcConfig {
    /// Required per-subject filenames in validation order (anatomical first)
    pub fn required_filenames(&self) -> [&str; 2] {
        [&self.anatomical_filename, &self.segmentation_filename]
    }
}

/// Validated transparency values for the anatomical and segmentation layers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaPair {
    /// Transparency of the anatomical layer, in [0, 1]
    pub mri: f64,
    /// Transparency of the segmentation layer, in [0, 1]
    pub seg: f64,
}

impl AlphaPair {
    /// Validate a pair of transparency values, both bounds inclusive
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either value is non-finite or
    /// outside [0.0, 1.0]
    pub fn validated(mri: f64, seg: f64) -> Result<Self> {
        for (name, value) in [("alpha_mri", mri), ("alpha_seg", seg)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"transparency must be between 0.0 and 1.0",
                ));
            }
        }
        Ok(Self { mri, seg })
    }
}

impl Default for AlphaPair {
    fn default() -> Self {
        Self {
            mri: DEFAULT_ALPHA_MRI,
            seg: DEFAULT_ALPHA_SEG,
        }
    }
}
