use crate::core::echo::DEFAULT_ECHO_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub echo: EchoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    pub fruit_list: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoConfig {
    #[serde(default = "default_echo_file")]
    pub file: String,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            file: default_echo_file(),
        }
    }
}

fn default_echo_file() -> String {
    DEFAULT_ECHO_FILE.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    /// "compact" (default) or "json".
    pub format: Option<String>,
}

impl DemoConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DemoError::FileRead {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable. Unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for DemoConfig {
    fn fruit_list_path(&self) -> Option<&str> {
        self.resources.fruit_list.as_deref()
    }

    fn echo_file(&self) -> &str {
        &self.echo.file
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("resources.fruit_list", self.resources.fruit_list.as_deref())?;
        validate_path("echo.file", &self.echo.file)?;

        if let Some(format) = &self.logging.format {
            if !["compact", "json"].contains(&format.as_str()) {
                return Err(DemoError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: "Unsupported format. Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }
}
