//! Environment configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variables consulted, in order, when detecting the environment
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    Development,
    /// Staging/test environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Check if running in staging
    pub fn is_staging(&self) -> bool {
        matches!(self, Environment::Staging)
    }

    /// Get environment from ENV variable
    ///
    /// A missing or unrecognised value resolves to production so that a
    /// misconfigured deployment never discloses diagnostics.
    pub fn from_env() -> Self {
        let value = ENVIRONMENT_VARS
            .iter()
            .find_map(|name| env::var(name).ok());
        Self::from_value(value.as_deref())
    }

    /// Resolve an optional raw value, failing closed to production
    pub fn from_value(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Environment::Production)
    }

    /// The disclosure policy that applies in this environment
    pub fn disclosure_mode(&self) -> DisclosureMode {
        DisclosureMode::from(*self)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Production
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// How much diagnostic detail may reach clients
///
/// Established once at startup and handed to the classifier and sanitizer
/// explicitly; nothing in the request path reads the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureMode {
    /// Responses carry the diagnostic trace
    Development,
    /// Responses never carry traces and fault details are replaced
    Production,
}

impl DisclosureMode {
    pub fn is_development(&self) -> bool {
        matches!(self, DisclosureMode::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, DisclosureMode::Production)
    }
}

impl From<Environment> for DisclosureMode {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => DisclosureMode::Development,
            Environment::Staging | Environment::Production => DisclosureMode::Production,
        }
    }
}

impl Default for DisclosureMode {
    fn default() -> Self {
        DisclosureMode::Production
    }
}

impl std::fmt::Display for DisclosureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisclosureMode::Development => write!(f, "development"),
            DisclosureMode::Production => write!(f, "production"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Enable colored output (terminal only)
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Include source location in logs
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: default_log_format(),
            colored: default_colored(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
                colored: true,
                source_location: true,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                format: LogFormat::Json,
                colored: false,
                source_location: false,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                format: LogFormat::Json,
                colored: false,
                source_location: false,
            },
        }
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_colored() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Development ".parse::<Environment>().unwrap(), Environment::Development);
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_fails_closed() {
        assert_eq!(Environment::from_value(None), Environment::Production);
        assert_eq!(Environment::from_value(Some("")), Environment::Production);
        assert_eq!(Environment::from_value(Some("local")), Environment::Production);
        assert_eq!(Environment::from_value(Some("development")), Environment::Development);
    }

    #[test]
    fn test_disclosure_mode_mapping() {
        assert_eq!(Environment::Development.disclosure_mode(), DisclosureMode::Development);
        assert_eq!(Environment::Staging.disclosure_mode(), DisclosureMode::Production);
        assert_eq!(Environment::Production.disclosure_mode(), DisclosureMode::Production);
        assert!(DisclosureMode::default().is_production());
    }

    #[test]
    fn test_logging_config_for_environment() {
        let dev_log = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev_log.level, "debug");
        assert!(dev_log.colored);
        assert!(dev_log.source_location);

        let prod_log = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod_log.level, "warn");
        assert_eq!(prod_log.format, LogFormat::Json);
        assert!(!prod_log.colored);
    }
}
