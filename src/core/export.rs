use crate::domain::model::ExtractionResult;
use crate::domain::ports::{ClipboardSink, Storage};
use crate::utils::error::{ExtractError, Result};

/// Pretty-printed JSON text of the record list. The clipboard path, its
/// stdout fallback, and the saved file all carry exactly this content.
pub fn to_json_text(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result.data)?)
}

/// Deterministic artifact name for a job.
pub fn export_file_name(job_id: &str) -> String {
    format!("voters-{}.json", job_id)
}

/// Write the record list as `voters-<job_id>.json` and return the file name.
pub async fn save_json<S: Storage>(storage: &S, result: &ExtractionResult) -> Result<String> {
    let name = export_file_name(&result.job_id);
    let text = to_json_text(result)?;
    storage.write_file(&name, text.as_bytes()).await?;
    Ok(name)
}

/// How a copy request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text landed on the system clipboard.
    Clipboard,
    /// Clipboard unavailable or denied; the same text was emitted on stdout
    /// for manual copy.
    Manual,
}

/// Copy the record list to the clipboard, degrading to stdout when the
/// clipboard is unavailable. Clipboard failure is non-fatal.
pub fn copy_json<C: ClipboardSink>(
    clipboard: &mut C,
    result: &ExtractionResult,
) -> Result<CopyOutcome> {
    let text = to_json_text(result)?;
    match clipboard.set_text(&text) {
        Ok(()) => Ok(CopyOutcome::Clipboard),
        Err(err) => {
            tracing::warn!("Clipboard copy failed, emitting for manual copy: {}", err);
            println!("{}", text);
            Ok(CopyOutcome::Manual)
        }
    }
}

/// Production clipboard backed by the desktop session.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ExtractError::ClipboardError {
            message: e.to_string(),
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ExtractError::ClipboardError {
                message: e.to_string(),
            })
    }
}
