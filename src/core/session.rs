use crate::core::replace;
use crate::domain::model::{ExtractionResult, ReplacementRule};
use crate::utils::error::{ExtractError, Result};
use std::time::{Duration, Instant};

/// How long the "copied" acknowledgement stays visible before reverting.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

/// Per-run state the review surface works against.
///
/// `original` holds the service's (possibly rule-mutated) result. `processed`
/// is an optional transient override slot: this crate only ever clears it, so
/// whoever sets it owns the invariant that it mirrors `original`'s record
/// count and field set with different values. Display and export use
/// `processed` when present, else `original`.
#[derive(Debug, Default)]
pub struct ReviewSession {
    original: Option<ExtractionResult>,
    processed: Option<ExtractionResult>,
    loading: bool,
    error: Option<String>,
    copied_at: Option<Instant>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard against a second submission while one is in flight. On success
    /// the busy flag is set and any stale error is cleared; no result state
    /// changes here.
    pub fn begin_submission(&mut self) -> Result<()> {
        if self.loading {
            return Err(ExtractError::ValidationError {
                message: "A submission is already in progress.".to_string(),
            });
        }
        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// Store a fresh service response. Any previously derived `processed`
    /// view belongs to the old data and is discarded.
    pub fn complete_submission(&mut self, result: ExtractionResult) {
        self.original = Some(result);
        self.processed = None;
        self.error = None;
        self.loading = false;
    }

    /// Record the failure message and release the busy flag. `original` and
    /// `processed` are untouched: no partial data is ever applied.
    pub fn fail_submission(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Rewrite `original` in place with the rule list and drop any
    /// `processed` override. Cumulative and final: a later rule set operates
    /// on the already-rewritten text, not the pristine upload. No-op when no
    /// result is held.
    pub fn apply_rules(&mut self, rules: &[ReplacementRule]) {
        if let Some(original) = &self.original {
            self.original = Some(replace::apply_rules(original, rules));
            self.processed = None;
        }
    }

    /// The value the table and both export paths operate on.
    pub fn active(&self) -> Option<&ExtractionResult> {
        self.processed.as_ref().or(self.original.as_ref())
    }

    pub fn original(&self) -> Option<&ExtractionResult> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&ExtractionResult> {
        self.processed.as_ref()
    }

    /// Install a `processed` override. No producer exists inside this crate;
    /// the slot is only cleared here.
    pub fn set_processed(&mut self, result: ExtractionResult) {
        if let Some(original) = &self.original {
            debug_assert_eq!(original.data.len(), result.data.len());
        }
        self.processed = Some(result);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// The acknowledgement reverts on its own once the window has elapsed.
    pub fn copied(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPY_ACK_WINDOW)
            .unwrap_or(false)
    }
}
