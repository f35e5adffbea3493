use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Environment variable holding an inline YAML config document.
pub const CONFIG_ENV_VAR: &str = "GREETING_CONFIG";

pub const DEFAULT_NAME: &str = "Guest";
pub const DEFAULT_PLATFORM: &str = "AWS Lambda";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingConfig {
    /// Substituted when the event carries no `name` key.
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Rendered after "welcome to" in the greeting body. Overriding it
    /// changes the fixed "welcome to AWS Lambda!" wording for every caller.
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            platform: default_platform(),
        }
    }
}

pub fn load_config(config_path: Option<&str>) -> Result<GreetingConfig> {
    let config = match config_path {
        Some(path) => GreetingConfig::from_file(path)?,
        None => GreetingConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

impl GreetingConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            location: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reads the config from [`CONFIG_ENV_VAR`]; falls back to defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(config_str) => Self::from_env_value(Some(&config_str)),
            Err(std::env::VarError::NotPresent) => Self::from_env_value(None),
            Err(e) => Err(ConfigError::LoadFailed {
                location: CONFIG_ENV_VAR.to_string(),
                error: Box::new(e),
            }
            .into()),
        }
    }

    /// Interprets the raw value of [`CONFIG_ENV_VAR`], `None` meaning unset.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(config_str) => Self::from_yaml_str(config_str),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is a config with nothing overridden.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GreetingConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "default_name cannot be empty".to_string(),
            }
            .into());
        }
        if self.platform.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "platform cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
