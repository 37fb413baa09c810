pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

pub use config::{storage::LocalStorage, Cli, Command, CommonConfig, MetadataArgs};
pub use core::engine::ExtractEngine;
pub use core::export::{CopyOutcome, SystemClipboard};
pub use core::session::ReviewSession;
pub use core::upload::UploadClient;
pub use utils::error::{ExtractError, Result};
