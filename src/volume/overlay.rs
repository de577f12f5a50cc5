//! Overlay derivation: void subcortical labels, symmetrize cortical ones

use crate::io::configuration::{CORTEX_BAND_WIDTH, CORTEX_LH_BASELINE, CORTEX_RH_BASELINE};
use ndarray::Array3;

/// Whether an aparc+aseg label lies in either hemisphere's cortical band
pub const fn is_cortical(label: i32) -> bool {
    (label > CORTEX_LH_BASELINE && label < CORTEX_LH_BASELINE + CORTEX_BAND_WIDTH)
        || (label > CORTEX_RH_BASELINE && label < CORTEX_RH_BASELINE + CORTEX_BAND_WIDTH)
}

/// Derive the cortical overlay from an aparc+aseg segmentation
///
/// Subcortical structures are voided to background and right-hemisphere
/// cortical parcels are folded onto their left-hemisphere counterparts, so
/// homologous regions get the same label on both sides. The output has the
/// same shape as the input.
pub fn void_subcortical_symmetrize_cortical(seg: &Array3<i32>) -> Array3<i32> {
    seg.mapv(|label| {
        if !is_cortical(label) {
            0
        } else if label >= CORTEX_RH_BASELINE {
            label - CORTEX_BAND_WIDTH
        } else {
            label
        }
    })
}
