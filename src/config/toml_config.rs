use crate::adapters::export::ExportFormat;
use crate::core::board::BoardSettings;
use crate::core::expansion::DEFAULT_EXPANDED;
use crate::core::labels::{DESCRIPTION_LIMIT, GROUP_LABEL_LIMIT};
use crate::domain::model::GroupMode;
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SOURCE_TYPES: [&str; 2] = ["file", "http"];
pub const GROUP_MODES: [&str; 2] = ["karigar", "product"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: Option<String>,
    pub karigars_path: Option<String>,
    pub endpoint: Option<String>,
    pub karigars_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Initial flag for groups that appear for the first time.
    #[serde(default = "default_expanded")]
    pub default_expanded: bool,
    #[serde(default = "default_label_limit")]
    pub label_limit: usize,
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

fn default_mode() -> String {
    "karigar".to_string()
}

fn default_expanded() -> bool {
    DEFAULT_EXPANDED
}

fn default_label_limit() -> usize {
    GROUP_LABEL_LIMIT
}

fn default_description_limit() -> usize {
    DESCRIPTION_LIMIT
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            default_expanded: DEFAULT_EXPANDED,
            label_limit: GROUP_LABEL_LIMIT,
            description_limit: DESCRIPTION_LIMIT,
        }
    }
}

impl BoardConfig {
    /// Config for a local orders file with every other setting at its default.
    pub fn for_file(path: impl Into<String>) -> Self {
        Self {
            source: SourceConfig {
                r#type: "file".to_string(),
                path: Some(path.into()),
                karigars_path: None,
                endpoint: None,
                karigars_endpoint: None,
                timeout_seconds: None,
            },
            view: ViewConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        let mut config = Self::for_file(String::new());
        config.source.r#type = "http".to_string();
        config.source.path = None;
        config.source.endpoint = Some(endpoint.into());
        config
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoardError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("source.type", &self.source.r#type, &SOURCE_TYPES)?;

        if self.is_http() {
            let endpoint = validation::validate_required_field("source.endpoint", &self.source.endpoint)?;
            validation::validate_url("source.endpoint", endpoint)?;
            if let Some(endpoint) = &self.source.karigars_endpoint {
                validation::validate_url("source.karigars_endpoint", endpoint)?;
            }
            if let Some(timeout) = self.source.timeout_seconds {
                validation::validate_range("source.timeout_seconds", timeout, 1, 600)?;
            }
        } else {
            let path = validation::validate_required_field("source.path", &self.source.path)?;
            validation::validate_path("source.path", path)?;
            validation::validate_file_extension("source.path", path, &["json"])?;
            if let Some(path) = &self.source.karigars_path {
                validation::validate_path("source.karigars_path", path)?;
                validation::validate_file_extension("source.karigars_path", path, &["json"])?;
            }
        }

        validation::validate_one_of("view.mode", &self.view.mode.to_ascii_lowercase(), &GROUP_MODES)?;
        validation::validate_range("view.label_limit", self.view.label_limit, 0, 200)?;
        validation::validate_range("view.description_limit", self.view.description_limit, 0, 500)?;

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", &format.to_ascii_lowercase(), &ExportFormat::NAMES)?;
        }
        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }
        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    pub fn is_http(&self) -> bool {
        self.source.r#type == "http"
    }

    pub fn group_mode(&self) -> GroupMode {
        GroupMode::parse(&self.view.mode).unwrap_or_default()
    }

    pub fn export_format(&self) -> ExportFormat {
        self.output
            .format
            .as_deref()
            .and_then(ExportFormat::parse)
            .unwrap_or_default()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            mode: self.group_mode(),
            default_expanded: self.view.default_expanded,
            label_limit: self.view.label_limit,
            description_limit: self.view.description_limit,
        }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
