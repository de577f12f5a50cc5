//! Subject roster validation against the required per-subject files

mod roster;

pub use roster::{
    SkippedSubject, SubjectRoster, candidates_from_data_root, candidates_from_listing,
    required_paths,
};
