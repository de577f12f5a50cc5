//! The sequential review loop over the usable subjects

use crate::io::progress::ProgressManager;
use crate::io::ratings::{RatingRecord, save_ratings};
use crate::review::prepare::prepare_subject;
use crate::review::{Reviewer, ReviewRequest, RunContext};
use crate::io::error::Result;

/// How a review run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every usable subject was reviewed
    Completed,
    /// The rater stopped the batch early; ratings up to that point are saved
    Stopped {
        /// Number of subjects reviewed before the stop, including the one
        /// whose review triggered it
        reviewed: usize,
    },
}

/// Drives preparation and review for each usable subject in order
///
/// Strictly sequential: one subject is active at a time, and the blocking
/// review call is the only suspension point. The rating returned together
/// with a stop request is still recorded before the run winds down.
pub struct ReviewSession<R: Reviewer> {
    ctx: RunContext,
    reviewer: R,
    ratings: RatingRecord,
    show_progress: bool,
}

impl<R: Reviewer> ReviewSession<R> {
    /// Create a session over a resolved run context
    pub fn new(ctx: RunContext, reviewer: R) -> Self {
        Self {
            ctx,
            reviewer,
            ratings: RatingRecord::new(),
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar and per-subject chatter
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Ratings collected so far
    pub fn ratings(&self) -> &RatingRecord {
        &self.ratings
    }

    /// The injected review capability
    pub fn reviewer(&self) -> &R {
        &self.reviewer
    }

    /// Review each usable subject in order, persisting ratings at the end
    ///
    /// A stop request from the reviewer terminates the batch cleanly after
    /// recording that subject's rating; the remaining subjects are neither
    /// prepared nor reviewed.
    ///
    /// # Errors
    ///
    /// Propagates preparation and review failures, which abort the whole run;
    /// a corrupt volume is a data-integrity problem worth stopping for
    // Per-subject lines are operator feedback, mirroring the summary output
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<RunOutcome> {
        let ctx = &self.ctx;
        let reviewer = &mut self.reviewer;
        let ratings = &mut self.ratings;

        let progress = self
            .show_progress
            .then(|| ProgressManager::new(ctx.subjects.len()));

        for subject_id in &ctx.subjects {
            if let Some(ref pm) = progress {
                pm.start_subject(subject_id);
                pm.suspend(|| eprintln!("Reviewing {subject_id}"));
            }

            let prepared = prepare_subject(ctx, subject_id)?;
            let annotation = format!("ID {subject_id}");
            let request = ReviewRequest {
                anatomical: &prepared.anatomical,
                overlay: &prepared.overlay,
                output_stem: &prepared.output_stem,
                alphas: ctx.alphas,
                annotation: &annotation,
            };

            let outcome = match progress {
                Some(ref pm) => pm.suspend(|| reviewer.review_and_rate(&request)),
                None => reviewer.review_and_rate(&request),
            }?;

            // Recorded before the stop check so the triggering subject's
            // rating is never lost
            ratings.record(subject_id.clone(), outcome.rating.clone());

            if let Some(ref pm) = progress {
                pm.suspend(|| eprintln!("id {subject_id} rating {}", outcome.rating));
                pm.complete_subject();
            }

            if outcome.stop_requested {
                if let Some(ref pm) = progress {
                    pm.finish();
                }
                save_ratings(ratings, &ctx.out_dir, &ctx.config)?;
                return Ok(RunOutcome::Stopped {
                    reviewed: ratings.len(),
                });
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }
        save_ratings(ratings, &ctx.out_dir, &ctx.config)?;
        Ok(RunOutcome::Completed)
    }
}
