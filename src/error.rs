use std::path::PathBuf;

use crate::http::ApiError;

pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("missing configuration: {0}")]
    Config(String),

    #[error("could not load service account key {path}: {source}")]
    CredentialLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not initialize database session: {0}")]
    Initialization(String),

    #[error("could not read database root: {0}")]
    RemoteRead(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_load_error_names_the_offending_path() {
        let error = ProbeError::CredentialLoad {
            path: PathBuf::from("/no/such/key.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/no/such/key.json"));
        assert!(message.contains("service account key"));
    }

    #[test]
    fn remote_read_error_carries_the_http_status() {
        let error = ProbeError::from(ApiError::Http {
            code: 401,
            message: "Permission denied".to_string(),
        });
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Permission denied"));
    }
}
