use crate::config::toml_config::BookConfig;
use crate::utils::error::{BookError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fosterbook")]
#[command(about = "Parse add-contact commands for a foster contact book")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// File with one add command per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory for the export bundle (overrides export.output_path)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Parse and report only, do not write the export bundle
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Arguments of a single add command, e.g. n/NAME p/PHONE e/EMAIL a/ADDRESS
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CliConfig {
    pub fn command_args(&self) -> String {
        self.args.join(" ")
    }

    /// 命令列優先於設定檔
    pub fn resolve_output_path<'a>(&'a self, config: &'a BookConfig) -> &'a str {
        self.output_path
            .as_deref()
            .unwrap_or(&config.export.output_path)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.input, self.args.is_empty()) {
            (Some(_), false) => Err(BookError::ConfigError {
                message: "give either --input or command arguments, not both".to_string(),
            }),
            (None, true) => Err(BookError::MissingConfigError {
                field: "--input or command arguments".to_string(),
            }),
            (Some(input), true) => validation::validate_path("--input", input),
            (None, false) => Ok(()),
        }?;

        if let Some(output_path) = &self.output_path {
            validation::validate_path("--output-path", output_path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_command_args() {
        let cli = CliConfig::parse_from([
            "fosterbook",
            "n/Jane",
            "Doe",
            "p/123",
            "e/j@e.com",
            "a/Street",
        ]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.command_args(), "n/Jane Doe p/123 e/j@e.com a/Street");
    }

    #[test]
    fn test_input_and_args_are_exclusive() {
        let cli = CliConfig::parse_from(["fosterbook", "--input", "people.txt", "n/Jane"]);
        assert!(cli.validate().is_err());

        let neither = CliConfig::parse_from(["fosterbook"]);
        assert!(matches!(
            neither.validate(),
            Err(BookError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_output_path_override() {
        let config = BookConfig::default();
        let cli = CliConfig::parse_from(["fosterbook", "-i", "people.txt"]);
        assert_eq!(cli.resolve_output_path(&config), "./output");

        let cli = CliConfig::parse_from([
            "fosterbook",
            "-i",
            "people.txt",
            "--output-path",
            "/tmp/out",
        ]);
        assert_eq!(cli.resolve_output_path(&config), "/tmp/out");
    }
}
