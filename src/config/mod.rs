pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEST_CSV: &str = "polyjuice_edits.csv";
pub const DEFAULT_MODEL_ENDPOINT: &str = "http://127.0.0.1:8000/perturb";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "polyjuice-gen")]
#[command(about = "Generate counterfactual sentence edits with a Polyjuice model server")]
pub struct CliConfig {
    #[arg(short = 's', long, help = "The csv file with the sentences to be edited")]
    pub source_csv: Option<String>,

    #[arg(short = 'c', long, help = "The column name of the sentences in the csv")]
    pub source_col: Option<String>,

    #[arg(short = 'd', long, help = "The destination csv where the edits will be stored")]
    pub dest_csv: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL_ENDPOINT, help = "HTTP endpoint of the perturbation model server")]
    pub model_endpoint: String,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Force GPU inference on or off; autodetect when omitted"
    )]
    pub cuda: Option<bool>,

    #[arg(long, help = "Print (original, counter) pairs instead of writing the csv")]
    pub debug: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let source_csv = validation::validate_required_field("source_csv", &self.source_csv)?;
        validation::validate_existing_file("source_csv", source_csv)?;

        let source_col = validation::validate_required_field("source_col", &self.source_col)?;
        validation::validate_non_empty_string("source_col", source_col)?;

        validation::validate_path("dest_csv", self.dest_csv())?;
        validation::validate_url("model_endpoint", &self.model_endpoint)?;

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn source_csv(&self) -> &str {
        self.source_csv.as_deref().unwrap_or_default()
    }

    fn source_col(&self) -> &str {
        self.source_col.as_deref().unwrap_or_default()
    }

    fn dest_csv(&self) -> &str {
        self.dest_csv.as_deref().unwrap_or(DEFAULT_DEST_CSV)
    }

    fn model_endpoint(&self) -> &str {
        &self.model_endpoint
    }

    fn cuda(&self) -> Option<bool> {
        self.cuda
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GenError;
    use std::io::Write;

    fn valid_config(source_csv: String) -> CliConfig {
        CliConfig {
            source_csv: Some(source_csv),
            source_col: Some("text".to_string()),
            dest_csv: None,
            model_endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
            cuda: None,
            debug: false,
            verbose: false,
        }
    }

    fn temp_source() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text\nhello").unwrap();
        file
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let source = temp_source();
        let config = valid_config(source.path().to_str().unwrap().to_string());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_source_csv() {
        let mut config = valid_config("unused".to_string());
        config.source_csv = None;

        assert!(matches!(
            config.validate(),
            Err(GenError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nonexistent_source_csv() {
        let config = valid_config("/no/such/sentences.csv".to_string());

        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_source_col() {
        let source = temp_source();
        let mut config = valid_config(source.path().to_str().unwrap().to_string());
        config.source_col = None;

        assert!(matches!(
            config.validate(),
            Err(GenError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_dest_csv_defaults_when_unset() {
        let config = valid_config("unused".to_string());
        assert_eq!(config.dest_csv(), DEFAULT_DEST_CSV);

        let mut config = config;
        config.dest_csv = Some("out/edits.csv".to_string());
        assert_eq!(config.dest_csv(), "out/edits.csv");
    }

    #[test]
    fn test_cuda_flag_parsing() {
        let source = temp_source();
        let path = source.path().to_str().unwrap();

        let base = ["polyjuice-gen", "-s", path, "-c", "text"];

        let config = CliConfig::parse_from(base);
        assert_eq!(config.cuda, None);

        let config = CliConfig::parse_from(base.iter().copied().chain(["--cuda"]));
        assert_eq!(config.cuda, Some(true));

        let config = CliConfig::parse_from(base.iter().copied().chain(["--cuda", "false"]));
        assert_eq!(config.cuda, Some(false));
    }
}
