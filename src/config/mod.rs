pub mod storage;

use crate::domain::model::{ReplacementRule, UploadMetadata};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "voter-extract")]
#[command(about = "Upload a Bengali voter list PDF and review the extracted records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a voter list PDF to the extraction service
    Extract {
        /// Path to the voter list PDF
        file: String,

        #[command(flatten)]
        common: CommonConfig,

        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// Re-run replacement rules over a previously saved extraction result
    Replace {
        /// Path to a saved extraction result (JSON envelope)
        file: String,

        #[command(flatten)]
        common: CommonConfig,
    },
}

impl Command {
    pub fn common(&self) -> &CommonConfig {
        match self {
            Command::Extract { common, .. } => common,
            Command::Replace { common, .. } => common,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CommonConfig {
    /// Upload endpoint of the extraction service
    #[arg(long, default_value = "http://localhost:8000/api/upload")]
    pub api_endpoint: String,

    /// Directory exported JSON files are written to
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Literal find/replace rule, applied across all text fields in order;
    /// repeatable
    #[arg(long = "replace", value_name = "FIND=REPLACE", value_parser = parse_rule)]
    pub rules: Vec<ReplacementRule>,

    /// Copy the exported JSON to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Show every voter field in the table, not just the main columns
    #[arg(long)]
    pub show_all: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Area metadata sent alongside the upload. Defaults match the voter lists
/// this tool is usually pointed at.
#[derive(Debug, Clone, Args)]
pub struct MetadataArgs {
    /// District (জেলা)
    #[arg(long, default_value = "ব্রাহ্মণবাড়িয়া")]
    pub district: String,

    /// Upazila (উপজেলা)
    #[arg(long, default_value = "সরাইল")]
    pub upazila: String,

    /// Union (ইউনিয়ন)
    #[arg(long, default_value = "")]
    pub r#union: String,

    /// Ward number (ওয়ার্ড নং)
    #[arg(long, default_value = "")]
    pub ward_number: String,

    /// Voter area (ভোটার এলাকা)
    #[arg(long, default_value = "")]
    pub voter_area: String,

    /// Voter area code (এলাকা কোড)
    #[arg(long, default_value = "")]
    pub voter_area_code: String,
}

impl MetadataArgs {
    pub fn to_metadata(&self) -> UploadMetadata {
        UploadMetadata {
            district: self.district.clone(),
            upazila: self.upazila.clone(),
            r#union: self.r#union.clone(),
            ward_number: self.ward_number.clone(),
            voter_area: self.voter_area.clone(),
            voter_area_code: self.voter_area_code.clone(),
        }
    }
}

/// `FIND=REPLACE`, split on the first `=` so the replacement may contain
/// further `=` characters. An empty FIND parses fine and stays inert.
fn parse_rule(raw: &str) -> std::result::Result<ReplacementRule, String> {
    match raw.split_once('=') {
        Some((find, replace)) => Ok(ReplacementRule::new(find, replace)),
        None => Err(format!(
            "expected FIND=REPLACE, got '{}' (no '=' found)",
            raw
        )),
    }
}

impl ConfigProvider for CommonConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CommonConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_splits_on_first_equals() {
        let rule = parse_rule("a=b=c").unwrap();
        assert_eq!(rule.find, "a");
        assert_eq!(rule.replace, "b=c");
    }

    #[test]
    fn test_parse_rule_allows_empty_sides() {
        let rule = parse_rule("=x").unwrap();
        assert!(!rule.is_active());

        let rule = parse_rule("x=").unwrap();
        assert_eq!(rule.replace, "");
        assert!(rule.is_active());
    }

    #[test]
    fn test_parse_rule_rejects_missing_separator() {
        assert!(parse_rule("no-separator").is_err());
    }

    #[test]
    fn test_extract_command_defaults() {
        let cli = Cli::try_parse_from(["voter-extract", "extract", "list.pdf"]).unwrap();
        let Command::Extract {
            file,
            common,
            metadata,
        } = cli.command
        else {
            panic!("expected extract command");
        };

        assert_eq!(file, "list.pdf");
        assert_eq!(common.api_endpoint, "http://localhost:8000/api/upload");
        assert_eq!(common.output_path, "./output");
        assert!(common.rules.is_empty());
        assert_eq!(metadata.district, "ব্রাহ্মণবাড়িয়া");
        assert_eq!(metadata.upazila, "সরাইল");
        assert_eq!(metadata.r#union, "");
    }

    #[test]
    fn test_replace_flags_accumulate_in_order() {
        let cli = Cli::try_parse_from([
            "voter-extract",
            "replace",
            "voters-42.json",
            "--replace",
            "a=b",
            "--replace",
            "b=c",
        ])
        .unwrap();

        let common = cli.command.common();
        assert_eq!(common.rules.len(), 2);
        assert_eq!(common.rules[0], ReplacementRule::new("a", "b"));
        assert_eq!(common.rules[1], ReplacementRule::new("b", "c"));
    }

    #[test]
    fn test_config_validation() {
        let cli = Cli::try_parse_from([
            "voter-extract",
            "extract",
            "list.pdf",
            "--api-endpoint",
            "ftp://nope",
        ])
        .unwrap();
        assert!(cli.command.common().validate().is_err());
    }
}
