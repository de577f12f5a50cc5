//! Volume loading and the segmentation overlay transform

mod loader;
mod overlay;

pub use loader::{load_anatomical, load_segmentation};
pub use overlay::{is_cortical, void_subcortical_symmetrize_cortical};
