use crate::adapters::export::ExportFormat;
use crate::config::toml_config::{BoardConfig, GROUP_MODES};
use crate::utils::error::{BoardError, Result};
use crate::utils::validation;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "karigar-board")]
#[command(about = "Group workshop orders by karigar or product")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Orders JSON file (overrides the configured source)
    #[arg(long, conflicts_with = "endpoint")]
    pub orders: Option<String>,

    /// Orders API endpoint (overrides the configured source)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Karigars JSON file used to resolve display names
    #[arg(long)]
    pub karigars: Option<String>,

    /// Group by "karigar" or "product"
    #[arg(long)]
    pub mode: Option<String>,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Write the board to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Open every group
    #[arg(long)]
    pub expand_all: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_today(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

impl CliArgs {
    /// Loads the config file when given, otherwise builds one from flags, then applies overrides.
    pub fn resolve_config(&self) -> Result<BoardConfig> {
        let mut config = match (&self.config, &self.orders, &self.endpoint) {
            (Some(path), _, _) => BoardConfig::from_file(path)?,
            (None, Some(orders), _) => BoardConfig::for_file(orders.clone()),
            (None, None, Some(endpoint)) => BoardConfig::for_endpoint(endpoint.clone()),
            (None, None, None) => {
                return Err(BoardError::MissingConfigError {
                    field: "--config, --orders or --endpoint".to_string(),
                })
            }
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut BoardConfig) -> Result<()> {
        if let Some(orders) = &self.orders {
            config.source.r#type = "file".to_string();
            config.source.path = Some(orders.clone());
            tracing::debug!("🔧 Orders file overridden to: {}", orders);
        }
        if let Some(endpoint) = &self.endpoint {
            config.source.r#type = "http".to_string();
            config.source.endpoint = Some(endpoint.clone());
            tracing::debug!("🔧 Endpoint overridden to: {}", endpoint);
        }
        if let Some(karigars) = &self.karigars {
            config.source.karigars_path = Some(karigars.clone());
        }
        if let Some(mode) = &self.mode {
            validation::validate_one_of("--mode", &mode.to_ascii_lowercase(), &GROUP_MODES)?;
            config.view.mode = mode.clone();
        }
        if let Some(format) = &self.format {
            validation::validate_one_of("--format", &format.to_ascii_lowercase(), &ExportFormat::NAMES)?;
            config.output.format = Some(format.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GroupMode;

    #[test]
    fn test_flags_build_config_without_file() {
        let args = CliArgs::parse_from([
            "karigar-board",
            "--orders",
            "orders.json",
            "--mode",
            "product",
            "--format",
            "csv",
            "--today",
            "2024-03-10",
        ]);

        let config = args.resolve_config().unwrap();
        assert_eq!(config.source.path.as_deref(), Some("orders.json"));
        assert_eq!(config.group_mode(), GroupMode::ByProduct);
        assert_eq!(config.export_format(), ExportFormat::Csv);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn test_endpoint_flag_switches_to_http() {
        let args = CliArgs::parse_from(["karigar-board", "--endpoint", "http://localhost:3000/orders"]);
        let config = args.resolve_config().unwrap();
        assert!(config.is_http());
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_missing_source_is_reported() {
        let args = CliArgs::parse_from(["karigar-board"]);
        assert!(matches!(
            args.resolve_config(),
            Err(BoardError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        let args = CliArgs::parse_from(["karigar-board", "--orders", "o.json", "--mode", "karat"]);
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_bad_today_fails_parsing() {
        assert!(CliArgs::try_parse_from(["karigar-board", "--today", "10/03/2024"]).is_err());
    }
}
