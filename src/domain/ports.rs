use crate::domain::model::{ExtractionResult, UploadMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The extraction service behind its single upload endpoint. PDF parsing and
/// field extraction happen entirely on the other side of this seam.
#[async_trait]
pub trait ExtractionApi: Send + Sync {
    /// Submit one file with its area metadata. Exactly one outbound request
    /// per call.
    async fn upload(
        &self,
        file_name: &str,
        file: Vec<u8>,
        metadata: &UploadMetadata,
    ) -> Result<ExtractionResult>;
}

/// Destination for the copy-to-clipboard export path. Kept as a trait so the
/// fallback behavior is testable without a desktop session.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}
