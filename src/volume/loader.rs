//! NIfTI volume loading with role-labelled errors

use crate::io::error::{QcError, Result};
use ndarray::{Array3, Ix3};
use nifti::{DataElement, IntoNdArray, NiftiObject, ReaderOptions};
use std::path::Path;

/// Load the anatomical T1 volume as floating-point intensities
///
/// # Errors
///
/// Returns a load error labelled with the anatomical role if the file cannot
/// be read, or a shape error if the volume is not three-dimensional
pub fn load_anatomical(path: &Path) -> Result<Array3<f32>> {
    open(path, "anatomical T1")
}

/// Load the segmentation volume as integer labels
///
/// # Errors
///
/// Returns a load error labelled with the segmentation role if the file
/// cannot be read, or a shape error if the volume is not three-dimensional
pub fn load_segmentation(path: &Path) -> Result<Array3<i32>> {
    open(path, "aparc+aseg segmentation")
}

fn open<T: DataElement>(path: &Path, role: &'static str) -> Result<Array3<T>> {
    let obj = ReaderOptions::new()
        .read_file(path)
        .map_err(|source| QcError::VolumeLoad {
            role,
            path: path.to_path_buf(),
            source,
        })?;

    let data = obj
        .into_volume()
        .into_ndarray::<T>()
        .map_err(|source| QcError::VolumeLoad {
            role,
            path: path.to_path_buf(),
            source,
        })?;

    let ndim = data.ndim();
    data.into_dimensionality::<Ix3>()
        .map_err(|_| QcError::VolumeShape {
            role,
            path: path.to_path_buf(),
            ndim,
        })
}
