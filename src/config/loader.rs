//! Loading `ReportConfig` from files and the environment

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::{ReportConfig, ENV_PREFIX};
use crate::error::{Error, Result};

impl ReportConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read a config file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("yml") | Some("yaml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(Error::Config(format!(
                    "unsupported config file type: {}",
                    path.display()
                )))
            }
        };

        debug!("Loaded report config from {}", path.display());
        Ok(config)
    }

    /// Apply `ROLLUP_*` overrides read through `lookup`
    ///
    /// `lookup` receives the full variable name and returns its value if
    /// set. Passing `|name| std::env::var(name).ok()` reads the process
    /// environment.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{ENV_PREFIX}{suffix}");
            lookup(&name).map(|value| (name, value))
        };

        if let Some((_, value)) = var("LOG_LEVEL") {
            self.log_level = value.trim().to_ascii_lowercase();
        }
        if let Some((name, value)) = var("TOP_N") {
            self.top_n = parse_var(&name, &value)?;
        }
        if let Some((name, value)) = var("AGE_BAND_WIDTH") {
            self.age_band_width = parse_var(&name, &value)?;
        }
        if let Some((_, value)) = var("NAME_SEPARATOR") {
            self.name_separator = value;
        }
        if let Some((name, value)) = var("HIGH_EARNER_SALARY") {
            self.high_earner_salary = parse_var(&name, &value)?;
        }
        if let Some((name, value)) = var("DEPARTMENT_PAYROLL_FLOOR") {
            self.department_payroll_floor = parse_var(&name, &value)?;
        }

        Ok(self)
    }

    /// Defaults overlaid with the process environment, validated
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_env_overrides(|name| std::env::var(name).ok())?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// File, then environment, then validation
    pub fn load_layered(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load(path)?.with_env_overrides(|name| std::env::var(name).ok())?;
        config.ensure_valid()?;
        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{name}='{value}': {e}")))
}
