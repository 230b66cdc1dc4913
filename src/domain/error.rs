use thiserror::Error;

/// Failures surfaced by `vr read`, each bound to one exit code.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Usage(String),

    #[error("Error initializing client: {0}")]
    Initialization(#[from] ClientError),

    #[error("Error reading {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("No value found at {0}")]
    NotFound(String),

    #[error("Field {0} not present in secret")]
    FieldMissing(String),
}

impl ReadError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadError::Initialization(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),

    #[error("Code: {status}. Errors: {errors}")]
    Api { status: u16, errors: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Path '{0}' contains '.' or '..' segments")]
    InvalidPath(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid address '{0}': {1}")]
    InvalidAddress(String, String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build HTTP client: {0}")]
    Http(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ReadError::Usage("x".into()).exit_code(), 1);
        assert_eq!(
            ReadError::Initialization(ClientError::Config("bad".into())).exit_code(),
            2
        );
        assert_eq!(ReadError::NotFound("a".into()).exit_code(), 1);
        assert_eq!(ReadError::FieldMissing("a".into()).exit_code(), 1);
        assert_eq!(
            ReadError::Store {
                path: "a".into(),
                source: StoreError::Transport("refused".into()),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ReadError::NotFound("secret/nope".into()).to_string(),
            "No value found at secret/nope"
        );
        assert_eq!(
            ReadError::FieldMissing("missing".into()).to_string(),
            "Field missing not present in secret"
        );
        assert_eq!(
            ReadError::Store {
                path: "secret/foo".into(),
                source: StoreError::Api {
                    status: 403,
                    errors: "permission denied".into(),
                },
            }
            .to_string(),
            "Error reading secret/foo: Code: 403. Errors: permission denied"
        );
        assert_eq!(
            ReadError::from(ClientError::Config("bad token".into())).to_string(),
            "Error initializing client: Configuration error: bad token"
        );
    }
}
