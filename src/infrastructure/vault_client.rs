use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::config::Config;
use crate::domain::{ClientError, Secret, SecretStore, StoreError};

const TOKEN_HEADER: &str = "X-Vault-Token";
const NAMESPACE_HEADER: &str = "X-Vault-Namespace";

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Logical reads against the Vault HTTP API.
pub struct VaultClient {
    address: Url,
    token: Option<Zeroizing<String>>,
    namespace: Option<String>,
    client: Client,
}

impl VaultClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let address = Url::parse(&config.address)
            .map_err(|e| ClientError::InvalidAddress(config.address.clone(), e.to_string()))?;

        if !matches!(address.scheme(), "http" | "https") {
            return Err(ClientError::InvalidAddress(
                config.address.clone(),
                "scheme must be http or https".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.tls_skip_verify)
            .user_agent(concat!("vaultread-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            address,
            token: config.token.clone(),
            namespace: config.namespace.clone(),
            client,
        })
    }

    /// Builds `<address>/v1/<path>` one segment at a time so `#`, `?` and
    /// `%` stay inside the path. The URL parser would drop `.` and `..`
    /// segments, so those are refused rather than sent to another path.
    fn url_for(&self, path: &str) -> Result<Url, StoreError> {
        if path.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(StoreError::InvalidPath(path.to_string()));
        }

        let mut url = self.address.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidPath(path.to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(path.split('/'));
        Ok(url)
    }

    fn with_vault_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            builder = builder.header(TOKEN_HEADER, token.as_str());
        }
        if let Some(namespace) = &self.namespace {
            builder = builder.header(NAMESPACE_HEADER, namespace);
        }
        builder
    }

    fn check_response(response: Response) -> Result<Option<Secret>, StoreError> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received read response");

        let body = response
            .text()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::parse_body(status, &body)
    }

    fn parse_body(status: StatusCode, body: &str) -> Result<Option<Secret>, StoreError> {
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(None);
            }
            return serde_json::from_str(body)
                .map(Some)
                .map_err(|e| StoreError::InvalidResponse(e.to_string()));
        }

        let errors = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .errors;

        if status == StatusCode::NOT_FOUND && errors.is_empty() {
            return Ok(None);
        }

        let errors = if errors.is_empty() {
            body.trim().to_string()
        } else {
            errors.join(", ")
        };

        Err(StoreError::Api {
            status: status.as_u16(),
            errors,
        })
    }
}

impl SecretStore for VaultClient {
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, "Reading secret");

        let response = self
            .with_vault_headers(self.client.get(url))
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::check_response(response)
    }
}
