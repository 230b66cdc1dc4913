use super::error::{ClientError, StoreError};
use super::Secret;

/// Backend able to perform a logical read.
pub trait SecretStore {
    /// Returns `Ok(None)` when the store answered but holds nothing at `path`.
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError>;
}

/// Source of configured store handles.
pub trait ClientProvider {
    fn acquire_client(&self) -> Result<Box<dyn SecretStore>, ClientError>;
}
