use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use zeroize::Zeroizing;

const DEFAULT_ADDRESS: &str = "https://127.0.0.1:8200";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct FileConfig {
    address: Option<String>,
    token: Option<String>,
    namespace: Option<String>,
    timeout_seconds: Option<u64>,
    tls_skip_verify: Option<bool>,
}

/// Effective client settings after the file and environment are merged.
#[derive(Clone)]
pub struct Config {
    pub address: String,
    pub token: Option<Zeroizing<String>>,
    pub namespace: Option<String>,
    pub timeout: Duration,
    pub tls_skip_verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            token: None,
            namespace: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            tls_skip_verify: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("token", &self.masked_token())
            .field("namespace", &self.namespace)
            .field("timeout", &self.timeout)
            .field("tls_skip_verify", &self.tls_skip_verify)
            .finish()
    }
}

impl Config {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let token_file = dirs::home_dir().map(|home| home.join(".vault-token"));
        Self::load_with(config_dir, |key| std::env::var(key).ok(), token_file)
    }

    /// Merges `config.toml`, then the environment, then the token file.
    pub fn load_with<F>(config_dir: &Path, env: F, token_file: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = Self::read_file(config_dir)?;
        let mut config = Self::default();

        if let Some(address) = file.address {
            config.address = address;
        }
        config.token = file.token.map(Zeroizing::new);
        config.namespace = file.namespace;
        if let Some(seconds) = file.timeout_seconds {
            config.timeout = Duration::from_secs(seconds);
        }
        if let Some(skip) = file.tls_skip_verify {
            config.tls_skip_verify = skip;
        }

        if let Some(address) = non_empty(env("VAULT_ADDR")) {
            config.address = address;
        }
        if let Some(token) = non_empty(env("VAULT_TOKEN")) {
            config.token = Some(Zeroizing::new(token));
        }
        if let Some(namespace) = non_empty(env("VAULT_NAMESPACE")) {
            config.namespace = Some(namespace);
        }
        if let Some(timeout) = non_empty(env("VAULT_CLIENT_TIMEOUT")) {
            let seconds: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid VAULT_CLIENT_TIMEOUT value: {}", timeout))?;
            config.timeout = Duration::from_secs(seconds);
        }
        if let Some(skip) = non_empty(env("VAULT_SKIP_VERIFY")) {
            config.tls_skip_verify = parse_bool(&skip)
                .with_context(|| format!("Invalid VAULT_SKIP_VERIFY value: {}", skip))?;
        }

        if config.token.is_none() {
            if let Some(path) = token_file.filter(|p| p.exists()) {
                let content = fs::read_to_string(&path).context("Failed to read token file")?;
                config.token = non_empty(Some(content.trim().to_string())).map(Zeroizing::new);
                tracing::debug!("Loaded token from {}", path.display());
            }
        }

        tracing::debug!(?config, "Resolved client configuration");
        Ok(config)
    }

    fn read_file(config_dir: &Path) -> Result<FileConfig> {
        let config_path = config_dir.join("config.toml");

        if !config_path.exists() {
            tracing::debug!("No config file at {}", config_path.display());
            return Ok(FileConfig::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn masked_token(&self) -> String {
        match &self.token {
            None => "(not set)".to_string(),
            Some(token) => {
                let visible: String = token.chars().take(4).collect();
                format!("{}****", visible)
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = non_empty(std::env::var("VR_CONFIG_DIR").ok()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home.join(".vaultread"))
}
