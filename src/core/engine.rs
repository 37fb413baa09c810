use crate::core::export::{self, CopyOutcome};
use crate::core::session::ReviewSession;
use crate::core::upload;
use crate::domain::model::{ExtractionResult, ReplacementRule, UploadMetadata};
use crate::domain::ports::{ClipboardSink, ExtractionApi, Storage};
use crate::output::table;
use crate::utils::error::Result;
use crate::utils::validation;
use std::path::Path;

/// Drives one review run: submit a PDF (or load a saved result), apply
/// replacement rules, render, and export. Holds the single [`ReviewSession`]
/// that all steps mutate.
pub struct ExtractEngine<A: ExtractionApi, S: Storage> {
    api: A,
    storage: S,
    session: ReviewSession,
}

impl<A: ExtractionApi, S: Storage> ExtractEngine<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            session: ReviewSession::new(),
        }
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    /// One user-initiated submission: local PDF check first (a rejected file
    /// never reaches the network), then the single outbound request. On
    /// success the response becomes the session's `original`; on failure only
    /// the error message changes.
    pub async fn submit(&mut self, pdf_path: &str, metadata: &UploadMetadata) -> Result<()> {
        if let Err(err) = validation::validate_pdf_file(pdf_path) {
            self.session.fail_submission(err.to_string());
            return Err(err);
        }

        self.session.begin_submission()?;

        let bytes = match self.storage.read_file(pdf_path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.session.fail_submission(upload::failure_message(&err));
                return Err(err);
            }
        };

        let file_name = Path::new(pdf_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.pdf")
            .to_string();

        tracing::info!("Submitting {} ({} bytes)", file_name, bytes.len());
        match self.api.upload(&file_name, bytes, metadata).await {
            Ok(result) => {
                tracing::info!(
                    "Extraction complete: job {} reports {} voters",
                    result.job_id,
                    result.total_voters
                );
                self.session.complete_submission(result);
                Ok(())
            }
            Err(err) => {
                self.session.fail_submission(upload::failure_message(&err));
                Err(err)
            }
        }
    }

    /// Seed the session from a previously exported envelope instead of the
    /// network.
    pub fn load_result(&mut self, result: ExtractionResult) {
        tracing::info!(
            "Loaded saved result: job {} with {} records",
            result.job_id,
            result.data.len()
        );
        self.session.complete_submission(result);
    }

    /// Cumulative rewrite of the held result; see [`ReviewSession::apply_rules`].
    pub fn apply_rules(&mut self, rules: &[ReplacementRule]) {
        let active_count = rules.iter().filter(|rule| rule.is_active()).count();
        if active_count > 0 {
            tracing::info!("Applying {} replacement rule(s)", active_count);
        }
        self.session.apply_rules(rules);
    }

    /// Render the active record list as a review table. Nothing prints when
    /// no result is held.
    pub fn print_table(&self, show_all: bool) {
        if let Some(active) = self.session.active() {
            table::print(active, show_all);
        }
    }

    /// Save `voters-<job_id>.json` for the active result; returns the file
    /// name, or `None` when no result is held.
    pub async fn export(&self) -> Result<Option<String>> {
        let Some(active) = self.session.active() else {
            return Ok(None);
        };
        let name = export::save_json(&self.storage, active).await?;
        tracing::info!("Exported {}", name);
        Ok(Some(name))
    }

    /// Copy the active record list, marking the session's transient copied
    /// acknowledgement on either path.
    pub fn copy<C: ClipboardSink>(&mut self, clipboard: &mut C) -> Result<Option<CopyOutcome>> {
        let Some(active) = self.session.active() else {
            return Ok(None);
        };
        let outcome = export::copy_json(clipboard, active)?;
        self.session.mark_copied();
        Ok(Some(outcome))
    }
}
