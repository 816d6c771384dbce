//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validate a configuration for running the scan pipeline.
///
/// Loading alone accepts any well-formed TOML; this check is applied
/// before anything that will actually call the remote model.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.provider.api_keys.is_empty() {
        return Err(ConfigError::MissingField("provider.api_keys".to_string()));
    }
    if config.provider.api_keys.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "provider.api_keys".to_string(),
            message: "keys must not be empty".to_string(),
        });
    }
    if config.provider.model.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "provider.model".to_string(),
            message: "model must not be empty".to_string(),
        });
    }
    if config.overlay.duration_ms == 0 {
        return Err(ConfigError::InvalidValue {
            field: "overlay.duration_ms".to_string(),
            message: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ProviderConfig;

    fn valid() -> Config {
        Config {
            provider: ProviderConfig {
                api_keys: vec!["key".to_string()],
                ..ProviderConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn test_no_keys_rejected() {
        let config = Config::default();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn test_blank_key_rejected() {
        let mut config = valid();
        config.provider.api_keys.push("   ".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_blank_model_rejected() {
        let mut config = valid();
        config.provider.model = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_overlay_duration_rejected() {
        let mut config = valid();
        config.overlay.duration_ms = 0;
        assert!(validate(&config).is_err());
    }
}
