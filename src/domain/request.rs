use super::error::ReadError;
use super::path::normalize_path;

/// One validated `read` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub path: String,
    pub format: String,
    pub field: Option<String>,
}

impl ReadRequest {
    /// `raw_path` is checked before normalization, so `/` alone is accepted
    /// and reads the empty path.
    pub fn new(raw_path: &str, format: String, field: &str) -> Result<Self, ReadError> {
        if raw_path.is_empty() {
            return Err(ReadError::Usage("read expects one argument".to_string()));
        }

        Ok(Self {
            path: normalize_path(raw_path).to_string(),
            format,
            field: (!field.is_empty()).then(|| field.to_string()),
        })
    }
}
