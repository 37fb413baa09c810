use crate::domain::model::{ExtractionResult, UploadMetadata};
use crate::domain::ports::ExtractionApi;
use crate::utils::error::{ExtractError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

/// Fallback shown when the service fails without a usable `detail` payload.
pub const GENERIC_FAILURE: &str = "An error occurred during processing.";

/// Conventional error payload of the extraction service.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// HTTP client for the extraction service's upload endpoint.
pub struct UploadClient {
    client: Client,
    endpoint: String,
}

impl UploadClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ExtractionApi for UploadClient {
    async fn upload(
        &self,
        file_name: &str,
        file: Vec<u8>,
        metadata: &UploadMetadata,
    ) -> Result<ExtractionResult> {
        let part = Part::bytes(file)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;

        let form = Form::new()
            .part("file", part)
            .text("district", metadata.district.clone())
            .text("upazila", metadata.upazila.clone())
            .text("union", metadata.r#union.clone())
            .text("ward_number", metadata.ward_number.clone())
            .text("voter_area", metadata.voter_area.clone())
            .text("voter_area_code", metadata.voter_area_code.clone());

        tracing::debug!("Uploading {} to {}", file_name, self.endpoint);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        tracing::debug!("Upload response status: {}", status);

        if status.is_success() {
            Ok(response.json::<ExtractionResult>().await?)
        } else {
            let message = response
                .json::<ErrorDetail>()
                .await
                .map(|payload| payload.detail)
                .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
            Err(ExtractError::ServiceError { message })
        }
    }
}

/// Message surfaced to the user for a failed submission: the service's
/// `detail` text when it sent one, otherwise the generic fallback. Transport
/// errors carry no payload and always fall back.
pub fn failure_message(err: &ExtractError) -> String {
    match err {
        ExtractError::ServiceError { message } => message.clone(),
        _ => GENERIC_FAILURE.to_string(),
    }
}
