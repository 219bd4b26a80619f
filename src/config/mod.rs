//! Report configuration
//!
//! `ReportConfig` carries the thresholds and sizes that the composed
//! reports use. Values are layered with increasing precedence:
//!
//! 1. Hardcoded defaults
//! 2. A TOML or YAML file (`ReportConfig::load`)
//! 3. Environment variables with the `ROLLUP_` prefix
//!
//! # Example
//!
//! ```ignore
//! use rollup::config::ReportConfig;
//!
//! let config = ReportConfig::load("rollup.toml")?
//!     .with_env_overrides(|name| std::env::var(name).ok())?;
//! config.ensure_valid()?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use stillwater::Validation;

use crate::error::{Error, Result};

pub mod loader;


/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Prefix of every environment override
pub const ENV_PREFIX: &str = "ROLLUP_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Entries kept by top-N report sections.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Width in years of an age band; must be positive.
    #[serde(default = "default_age_band_width")]
    pub age_band_width: u32,

    /// Separator used when joining names into one string.
    #[serde(default = "default_name_separator")]
    pub name_separator: String,

    /// Salary at or above which an employee counts as a high earner.
    #[serde(default = "default_high_earner_salary")]
    pub high_earner_salary: f64,

    /// Department payroll at or above which a department is reported.
    #[serde(default = "default_department_payroll_floor")]
    pub department_payroll_floor: f64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_top_n() -> usize {
    3
}

fn default_age_band_width() -> u32 {
    10
}

fn default_name_separator() -> String {
    ",".to_string()
}

fn default_high_earner_salary() -> f64 {
    50000.0
}

fn default_department_payroll_floor() -> f64 {
    100000.0
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            top_n: default_top_n(),
            age_band_width: default_age_band_width(),
            name_separator: default_name_separator(),
            high_earner_salary: default_high_earner_salary(),
            department_payroll_floor: default_department_payroll_floor(),
        }
    }
}

impl ReportConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_age_band_width(mut self, width: u32) -> Self {
        self.age_band_width = width;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Check every field, accumulating all problems instead of stopping
    /// at the first
    pub fn validate(&self) -> Validation<(), Vec<ConfigProblem>> {
        let mut problems = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            problems.push(ConfigProblem::new(
                "log_level",
                format!(
                    "'{}' is not one of {}",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }
        if self.age_band_width == 0 {
            problems.push(ConfigProblem::new(
                "age_band_width",
                "must be greater than zero",
            ));
        }
        if !is_non_negative(self.high_earner_salary) {
            problems.push(ConfigProblem::new(
                "high_earner_salary",
                format!("must be a non-negative number, got {}", self.high_earner_salary),
            ));
        }
        if !is_non_negative(self.department_payroll_floor) {
            problems.push(ConfigProblem::new(
                "department_payroll_floor",
                format!(
                    "must be a non-negative number, got {}",
                    self.department_payroll_floor
                ),
            ));
        }

        if problems.is_empty() {
            Validation::success(())
        } else {
            Validation::failure(problems)
        }
    }

    /// `validate` folded into the crate error type
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().into_result().map_err(|problems| {
            Error::Validation(
                problems
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }
}

/// A single rejected configuration field
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigProblem {
    pub field: &'static str,
    pub message: String,
}

impl ConfigProblem {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
