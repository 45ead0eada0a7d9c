//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values after parsing.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty".into(),
            ));
        }
        if self
            .processing
            .supported_formats
            .iter()
            .any(|fmt| fmt.is_empty() || fmt.starts_with('.'))
        {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats entries must be bare extensions (\"jpg\", not \".jpg\")"
                    .into(),
            ));
        }
        if self.output.dir_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir_suffix must not be empty".into(),
            ));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.format must be \"pretty\" or \"json\", got \"{other}\""
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_formats_rejected() {
        let mut config = Config::default();
        config.processing.supported_formats.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut config = Config::default();
        config.processing.supported_formats = vec![".jpg".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut config = Config::default();
        config.output.dir_suffix.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
