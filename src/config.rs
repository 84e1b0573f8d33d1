//! Configuration file handling for delivery-filter.

use serde::Deserialize;
use std::path::Path;

/// Batch processing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_max_messages")]
    pub max_messages: usize,
    #[serde(default)]
    pub reject_unsorted: bool,
    /// Window used when the input stops right after the messages.
    #[serde(default)]
    pub default_window: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigWrapper {
    // Everything lives under the `params` section.
    pub params: Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_messages: Self::default_max_messages(),
            reject_unsorted: false,
            default_window: None,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, crate::error::Error> {
        let wrapped_config: ConfigWrapper = serini::from_str(content)?;
        Ok(wrapped_config.params)
    }

    // serde does not support default literals.
    const fn default_max_messages() -> usize {
        10_000_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_messages, 10_000_000);
        assert_eq!(config.reject_unsorted, false);
        assert_eq!(config.default_window, None);
    }

    #[test]
    fn test_parse_params_section() -> TestResult {
        let config = Config::parse("[params]\nmax_messages = 42\ndefault_window = 5\n")?;
        assert_eq!(config.max_messages, 42);
        assert_eq!(config.default_window, Some(5));
        assert_eq!(config.reject_unsorted, false);
        Ok(())
    }

    #[test]
    fn test_from_file() -> TestResult {
        let path = std::env::temp_dir()
            .join(format!("delivery-filter-{}.ini", std::process::id()));
        std::fs::write(&path, "[params]\nmax_messages = 7\n")?;
        let config = Config::from_file(&path);
        std::fs::remove_file(&path)?;
        assert_eq!(config?.max_messages, 7);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/delivery-filter.ini");
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
