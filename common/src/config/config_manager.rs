use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the cached config, loading and validating it on first access.
    /// Missing content falls back to `TConfig::default()` without caching, so
    /// a config file created later is still picked up.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::InMemoryProvider;

    #[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
    struct TestConfig {
        tick_interval_ms: u64,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.tick_interval_ms > 5000 {
                return Err("Tick interval must not exceed 5000ms".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_falls_back_to_default() {
        let manager = ConfigManager::new(InMemoryProvider::new(None), YamlConfigSerializer::new());
        let config: TestConfig = manager.get_config().unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_stored_config() {
        let manager = ConfigManager::new(InMemoryProvider::new(None), YamlConfigSerializer::new());
        let config = TestConfig {
            tick_interval_ms: 150,
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = ConfigManager::new(
            InMemoryProvider::new(Some("tick_interval_ms: 9000")),
            YamlConfigSerializer::new(),
        );
        let result: Result<TestConfig, String> = manager.get_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let manager = ConfigManager::new(
            InMemoryProvider::new(Some("not: [valid")),
            YamlConfigSerializer::new(),
        );
        let result: Result<TestConfig, String> = manager.get_config();
        assert!(result.is_err());
    }
}
