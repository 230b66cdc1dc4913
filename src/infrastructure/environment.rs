use std::path::PathBuf;

use crate::config::{get_config_dir, Config};
use crate::domain::{ClientError, ClientProvider, SecretStore};

use super::VaultClient;

/// Builds a `VaultClient` from the config file and process environment.
#[derive(Default)]
pub struct EnvironmentProvider {
    config_dir: Option<PathBuf>,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config_dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => get_config_dir()?,
        };
        Config::load(&config_dir)
    }
}

impl ClientProvider for EnvironmentProvider {
    fn acquire_client(&self) -> Result<Box<dyn SecretStore>, ClientError> {
        let config = self
            .load_config()
            .map_err(|e| ClientError::Config(format!("{:#}", e)))?;
        let client = VaultClient::new(&config)?;
        Ok(Box::new(client))
    }
}
