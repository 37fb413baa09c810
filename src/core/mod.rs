pub mod engine;
pub mod export;
pub mod replace;
pub mod session;
pub mod upload;

pub use crate::domain::model::{ExtractionResult, ReplacementRule, UploadMetadata, Voter};
pub use crate::domain::ports::{ClipboardSink, ConfigProvider, ExtractionApi, Storage};
pub use crate::utils::error::Result;
