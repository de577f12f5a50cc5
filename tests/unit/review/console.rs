//! Tests for rating-line parsing and montage rendering

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use visualqc::io::configuration::AlphaPair;
    use visualqc::review::{label_color, parse_rating_line, render_montage};

    // Tests the stop suffix is recognized with and without a rating
    // Verified by requiring the rating before the suffix
    #[test]
    fn test_rating_line_stop_suffix() {
        assert_eq!(parse_rating_line("4\n"), Some(("4".to_string(), false)));
        assert_eq!(parse_rating_line("4 q\n"), Some(("4".to_string(), true)));
        assert_eq!(parse_rating_line("4 Q\n"), Some(("4".to_string(), true)));
        assert_eq!(parse_rating_line("q\n"), Some((String::new(), true)));
    }

    // Tests blank input asks the rater again instead of rating
    // Verified by returning an empty rating for blank lines
    #[test]
    fn test_blank_line_reprompts() {
        assert_eq!(parse_rating_line(""), None);
        assert_eq!(parse_rating_line("   \n"), None);
    }

    // Tests free-text ratings stay opaque and intact
    // Verified by parsing the rating as a number
    #[test]
    fn test_free_text_rating() {
        assert_eq!(
            parse_rating_line("borderline, re-check\n"),
            Some(("borderline, re-check".to_string(), false))
        );
    }

    // Tests the montage lays the three mid-slice panels side by side
    // Verified against the panel dimensions of a 4x6x8 volume
    #[test]
    fn test_montage_dimensions() {
        let anatomical = Array3::<f32>::zeros((4, 6, 8));
        let overlay = Array3::<i32>::zeros((4, 6, 8));

        let montage = render_montage(&anatomical, &overlay, AlphaPair::default());
        // Panels are 8x6, 8x4, and 6x4 pixels with a 4 pixel gap between them
        assert_eq!(montage.width(), 8 + 4 + 8 + 4 + 6);
        assert_eq!(montage.height(), 6);
    }

    // Tests a fully opaque segmentation layer shows the pure label color
    // Verified by halving the blend weight
    #[test]
    fn test_opaque_overlay_shows_label_color() {
        let anatomical = Array3::<f32>::from_elem((1, 1, 1), 50.0);
        let overlay = Array3::<i32>::from_elem((1, 1, 1), 1005);
        let alphas = AlphaPair::validated(1.0, 1.0).unwrap();

        let montage = render_montage(&anatomical, &overlay, alphas);
        let expected = label_color(1005);
        assert_eq!(montage.get_pixel(0, 0).0, expected);
    }

    // Tests degenerate volumes still produce an image
    // Verified by letting the zero-size case slice the volume
    #[test]
    fn test_empty_volume_renders_placeholder() {
        let anatomical = Array3::<f32>::zeros((0, 4, 4));
        let overlay = Array3::<i32>::zeros((0, 4, 4));

        let montage = render_montage(&anatomical, &overlay, AlphaPair::default());
        assert_eq!((montage.width(), montage.height()), (1, 1));
    }
}
