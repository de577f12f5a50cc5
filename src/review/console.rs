//! Terminal reviewer: orthogonal mid-slice montage plus a stdin rating prompt

use crate::io::configuration::AlphaPair;
use crate::io::error::{QcError, Result, file_system};
use crate::review::{Reviewer, ReviewOutcome, ReviewRequest};
use image::{Rgb, RgbImage};
use ndarray::{Array3, ArrayView2, Axis};
use std::path::PathBuf;

/// Gap between montage panels, in pixels
const PANEL_GAP: u32 = 4;

// Golden-ratio hue stepping keeps adjacent labels visually distinct
const HUE_STEP: f32 = 0.618_034;

/// Deterministic display color for an overlay label; background stays black
pub fn label_color(label: i32) -> [u8; 3] {
    if label == 0 {
        return [0, 0, 0];
    }
    let hue = (label as f32 * HUE_STEP).rem_euclid(1.0);
    hsv_to_rgb(hue, 0.85, 0.9)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

fn intensity_range(anatomical: &Array3<f32>) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in anatomical {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

fn blend_panel(
    anat: &ArrayView2<'_, f32>,
    seg: &ArrayView2<'_, i32>,
    range: (f32, f32),
    alphas: AlphaPair,
) -> RgbImage {
    let (rows, cols) = anat.dim();
    let (min, max) = range;
    let span = if max > min { max - min } else { 1.0 };
    let alpha_mri = alphas.mri as f32;
    let alpha_seg = alphas.seg as f32;

    let mut panel = RgbImage::new(cols as u32, rows as u32);
    for row in 0..rows {
        for col in 0..cols {
            let value = anat.get((row, col)).copied().unwrap_or(min);
            let gray = (value - min) / span * 255.0 * alpha_mri;

            let label = seg.get((row, col)).copied().unwrap_or(0);
            let pixel = if label == 0 {
                let g = gray.clamp(0.0, 255.0) as u8;
                Rgb([g, g, g])
            } else {
                let color = label_color(label);
                let mut channels = [0u8; 3];
                for (out, &c) in channels.iter_mut().zip(color.iter()) {
                    let mixed = gray * (1.0 - alpha_seg) + f32::from(c) * alpha_seg;
                    *out = mixed.clamp(0.0, 255.0) as u8;
                }
                Rgb(channels)
            };
            panel.put_pixel(col as u32, row as u32, pixel);
        }
    }
    panel
}

/// Render a three-panel montage of the orthogonal middle slices
///
/// The anatomical layer is shown as dimmed grayscale and overlay labels are
/// alpha-blended on top; both layers honor the validated transparencies.
pub fn render_montage(
    anatomical: &Array3<f32>,
    overlay: &Array3<i32>,
    alphas: AlphaPair,
) -> RgbImage {
    let dims = anatomical.dim();
    if dims.0 == 0 || dims.1 == 0 || dims.2 == 0 {
        return RgbImage::new(1, 1);
    }

    let range = intensity_range(anatomical);
    let cuts = [
        (Axis(0), dims.0 / 2),
        (Axis(1), dims.1 / 2),
        (Axis(2), dims.2 / 2),
    ];

    let panels: Vec<RgbImage> = cuts
        .into_iter()
        .map(|(axis, mid)| {
            let anat = anatomical.index_axis(axis, mid);
            let seg = overlay.index_axis(axis, mid);
            blend_panel(&anat, &seg, range, alphas)
        })
        .collect();

    let total_width: u32 =
        panels.iter().map(RgbImage::width).sum::<u32>() + PANEL_GAP * (panels.len() as u32 - 1);
    let total_height = panels.iter().map(RgbImage::height).max().unwrap_or(1);

    let mut montage = RgbImage::new(total_width, total_height);
    let mut offset = 0u32;
    for panel in &panels {
        for (x, y, pixel) in panel.enumerate_pixels() {
            montage.put_pixel(offset + x, y, *pixel);
        }
        offset += panel.width() + PANEL_GAP;
    }
    montage
}

/// Interpret one line of rater input
///
/// Returns the rating and whether a stop was requested; `None` means the
/// line was blank and the rater should be asked again. A trailing `q` token
/// requests early stop while still carrying the rating, and a lone `q` stops
/// with an empty rating.
pub fn parse_rating_line(line: &str) -> Option<(String, bool)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.split_last() {
        None => None,
        Some((last, rest)) if last.eq_ignore_ascii_case("q") => Some((rest.join(" "), true)),
        _ => Some((tokens.join(" "), false)),
    }
}

/// Default review capability: montage PNG on disk, rating prompt on stdin
#[derive(Debug, Default)]
pub struct ConsoleReviewer;

impl ConsoleReviewer {
    /// Create a console reviewer
    pub const fn new() -> Self {
        Self
    }

    fn export_montage(request: &ReviewRequest<'_>) -> Result<PathBuf> {
        let montage = render_montage(request.anatomical, request.overlay, request.alphas);
        let path = PathBuf::from(format!("{}.png", request.output_stem.display()));
        montage
            .save(&path)
            .map_err(|source| QcError::ImageExport {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

impl Reviewer for ConsoleReviewer {
    // The prompt is the interactive surface of the tool
    #[allow(clippy::print_stderr)]
    fn review_and_rate(&mut self, request: &ReviewRequest<'_>) -> Result<ReviewOutcome> {
        let png_path = Self::export_montage(request)?;
        eprintln!("{}", request.annotation);
        eprintln!("  overlay montage saved to {}", png_path.display());
        eprintln!("  enter a rating; append 'q' to stop the batch after this subject");

        loop {
            eprint!("rating> ");
            let mut line = String::new();
            let read = std::io::stdin()
                .read_line(&mut line)
                .map_err(file_system("<stdin>", "read rating"))?;
            if read == 0 {
                // EOF on stdin: treat as a stop request with an empty rating
                return Ok(ReviewOutcome {
                    rating: String::new(),
                    stop_requested: true,
                });
            }
            if let Some((rating, stop_requested)) = parse_rating_line(&line) {
                return Ok(ReviewOutcome {
                    rating,
                    stop_requested,
                });
            }
            eprintln!("Please enter a non-empty rating (append 'q' to stop).");
        }
    }
}
