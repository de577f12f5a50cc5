//! Command-line interface and run-context resolution

use crate::io::configuration::{AlphaPair, DEFAULT_ALPHA_MRI, DEFAULT_ALPHA_SEG, QcConfig};
use crate::io::error::{Result, config_error, file_system, invalid_parameter};
use crate::review::{ConsoleReviewer, ReviewSession, RunContext, RunOutcome, VisKind};
use crate::subjects::{SubjectRoster, candidates_from_data_root, candidates_from_listing};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "visualqc")]
#[command(
    author,
    version,
    about = "Rate the accuracy of anatomical segmentations and parcellations"
)]
/// Command-line arguments for the segmentation review tool
pub struct Cli {
    /// Directory containing the per-subject imaging folders
    ///
    /// Each subject is expected at `<data-root>/<id>/mri/` with the required
    /// anatomical and segmentation volumes inside
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_root: PathBuf,

    /// File listing the subject IDs to process, one per line
    ///
    /// When absent, every subdirectory of the data root is a candidate
    #[arg(short = 'i', long, value_name = "FILE")]
    pub id_list: Option<PathBuf>,

    /// Type of visualization/overlay requested
    #[arg(short = 'v', long, value_enum, default_value_t = VisKind::CorticalVolumetric)]
    pub vis_type: VisKind,

    /// Output folder for the visualizations and ratings
    ///
    /// Default: a folder named `visualqc` created inside the data root
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Transparency of the MRI and segmentation layers, each in [0, 1]
    #[arg(
        short = 'a',
        long,
        num_args = 2,
        allow_negative_numbers = true,
        value_names = ["MRI", "SEG"],
        default_values_t = [DEFAULT_ALPHA_MRI, DEFAULT_ALPHA_SEG]
    )]
    pub alphas: Vec<f64>,

    /// Suppress the progress bar and per-subject chatter
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Validate the arguments into an immutable run context
    ///
    /// Performs every fatal configuration check before any review begins:
    /// data root existence, listing readability, subject validation (with the
    /// operator summary), alpha bounds, and output directory creation.
    ///
    /// # Errors
    ///
    /// Returns a distinct configuration error for each failed check
    pub fn into_run_context(self, config: QcConfig) -> Result<RunContext> {
        if !self.data_root.is_dir() {
            return Err(config_error(&format!(
                "data root '{}' does not exist or is not a directory",
                self.data_root.display()
            )));
        }

        let alphas = match self.alphas.as_slice() {
            [mri, seg] => AlphaPair::validated(*mri, *seg)?,
            other => {
                return Err(invalid_parameter(
                    "alphas",
                    &format!("{other:?}"),
                    &"expected exactly two values",
                ));
            }
        };

        let candidates = match &self.id_list {
            Some(listing) => candidates_from_listing(listing)?,
            None => candidates_from_data_root(&self.data_root)?,
        };
        let roster = SubjectRoster::validate(&candidates, &self.data_root, &config)?;
        roster.report();

        let out_dir = self
            .out_dir
            .unwrap_or_else(|| self.data_root.join(&config.out_dir_name));
        std::fs::create_dir_all(&out_dir)
            .map_err(file_system(out_dir.clone(), "create output directory"))?;

        Ok(RunContext {
            data_root: self.data_root,
            out_dir,
            subjects: roster.usable,
            vis: self.vis_type,
            alphas,
            config,
        })
    }
}

/// Resolve the run context and drive the full review session
///
/// # Errors
///
/// Returns configuration errors before the review loop starts, and
/// preparation/review failures from within it
// Final location report is operator-facing output
#[allow(clippy::print_stderr)]
pub fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let ctx = cli.into_run_context(QcConfig::default())?;
    let out_dir = ctx.out_dir.clone();

    let mut session = ReviewSession::new(ctx, ConsoleReviewer::new()).with_progress(!quiet);
    match session.run()? {
        RunOutcome::Completed => {
            eprintln!("Results are available in:\n\t{}", out_dir.display());
        }
        RunOutcome::Stopped { reviewed } => {
            eprintln!(
                "Stopped after {reviewed} subjects; partial ratings are available in:\n\t{}",
                out_dir.display()
            );
        }
    }
    Ok(())
}
