//! Tests for the rating record and its JSON persistence

#[cfg(test)]
mod tests {
    use visualqc::io::configuration::QcConfig;
    use visualqc::io::ratings::{RatingRecord, save_ratings};

    // Tests persisting an empty record is safe, covering the early-stop path
    // Verified by asserting a file appears with an empty JSON array
    #[test]
    fn test_save_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = RatingRecord::new();

        let path = save_ratings(&record, dir.path(), &QcConfig::default()).unwrap();
        assert_eq!(path, dir.path().join("ratings.json"));

        let reloaded: RatingRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(reloaded.is_empty());
    }

    // Tests the processing order survives the save/load round trip
    // Verified by sorting the entries before writing
    #[test]
    fn test_save_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = RatingRecord::new();
        record.record("sub_z", "5");
        record.record("sub_a", "1");

        let path = save_ratings(&record, dir.path(), &QcConfig::default()).unwrap();
        let reloaded: RatingRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(reloaded, record);
        let ids: Vec<&str> = reloaded
            .entries()
            .iter()
            .map(|e| e.subject_id.as_str())
            .collect();
        assert_eq!(ids, vec!["sub_z", "sub_a"]);
    }

    // Tests a repeated save overwrites rather than appends
    // Verified by appending instead of truncating in save_ratings
    #[test]
    fn test_save_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = QcConfig::default();

        let mut first = RatingRecord::new();
        first.record("sub001", "3");
        first.record("sub002", "4");
        save_ratings(&first, dir.path(), &config).unwrap();

        let mut second = RatingRecord::new();
        second.record("sub001", "2");
        let path = save_ratings(&second, dir.path(), &config).unwrap();

        let reloaded: RatingRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("sub001"), Some("2"));
    }

    // Tests a custom ratings filename from the config is honored
    // Verified by hardcoding the default filename in save_ratings
    #[test]
    fn test_custom_ratings_filename() {
        let dir = tempfile::tempdir().unwrap();
        let config = QcConfig {
            ratings_filename: "scores.json".to_string(),
            ..QcConfig::default()
        };

        let path = save_ratings(&RatingRecord::new(), dir.path(), &config).unwrap();
        assert_eq!(path, dir.path().join("scores.json"));
        assert!(path.exists());
    }
}
