//! Tests for per-subject image preparation and output path derivation

#[cfg(test)]
mod tests {
    use crate::support::make_valid_subject;
    use std::path::{Path, PathBuf};
    use visualqc::QcError;
    use visualqc::io::configuration::{AlphaPair, QcConfig};
    use visualqc::review::{RunContext, VisKind, output_stem, prepare_subject};

    fn context(root: &Path, vis: VisKind) -> RunContext {
        RunContext {
            data_root: root.to_path_buf(),
            out_dir: root.join("visualqc"),
            subjects: vec!["sub001".to_string()],
            vis,
            alphas: AlphaPair::default(),
            config: QcConfig::default(),
        }
    }

    // Tests the output stem is pure in its inputs
    // Verified by mixing a timestamp into the stem
    #[test]
    fn test_output_stem_is_deterministic() {
        let out = Path::new("/qc/out");
        let first = output_stem(out, VisKind::CorticalVolumetric, "sub001");
        let second = output_stem(out, VisKind::CorticalVolumetric, "sub001");

        assert_eq!(first, second);
        assert_eq!(
            first,
            PathBuf::from("/qc/out/visual_qc_cortical_volumetric_sub001")
        );
    }

    // Tests unimplemented kinds fail fast without touching the filesystem
    // Verified by loading volumes before the dispatch
    #[test]
    fn test_unsupported_kinds_never_return_partial_output() {
        // A data root that does not exist: reaching the loader would surface
        // a load error instead of the unsupported-kind error
        let missing_root = Path::new("/no/such/root");
        for vis in [
            VisKind::CorticalSurface,
            VisKind::CorticalComposite,
            VisKind::SubcorticalVolumetric,
        ] {
            let ctx = context(missing_root, vis);
            let err = prepare_subject(&ctx, "sub001").unwrap_err();
            match err {
                QcError::UnsupportedVisKind { kind } => assert_eq!(kind, vis.wire_name()),
                other => unreachable!("expected UnsupportedVisKind, got {other}"),
            }
        }
    }

    // Tests a load failure is labelled with the role of the failing file
    // Verified by swapping the role labels in the loader
    #[test]
    fn test_load_failure_carries_role() {
        let root = tempfile::tempdir().unwrap();
        // Placeholder bytes pass roster validation but are not a NIfTI volume
        make_valid_subject(root.path(), "sub001");

        let ctx = context(root.path(), VisKind::CorticalVolumetric);
        let err = prepare_subject(&ctx, "sub001").unwrap_err();
        match err {
            QcError::VolumeLoad { role, path, .. } => {
                assert_eq!(role, "anatomical T1");
                assert!(path.ends_with("sub001/mri/orig.nii.gz"));
            }
            other => unreachable!("expected VolumeLoad, got {other}"),
        }
    }
}
