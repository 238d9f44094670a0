use std::path::PathBuf;

use crate::error::{ProbeError, ProbeResult};

pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const DATABASE_URL_ENV: &str = "FIREBASE_DATABASE_URL";

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub service_account_path: PathBuf,
    pub database_url: String,
}

impl ProbeConfig {
    pub fn new(service_account_path: impl Into<PathBuf>, database_url: impl Into<String>) -> Self {
        ProbeConfig {
            service_account_path: service_account_path.into(),
            database_url: database_url.into(),
        }
    }

    /// Resolves configuration from explicit values (CLI flags) falling back to
    /// the environment.
    pub fn resolve(
        service_account_path: Option<String>,
        database_url: Option<String>,
    ) -> ProbeResult<Self> {
        let path = service_account_path
            .or_else(|| std::env::var(CREDENTIALS_ENV).ok())
            .ok_or_else(|| {
                ProbeError::Config(format!(
                    "pass --credentials or set the {CREDENTIALS_ENV} env variable"
                ))
            })?;
        let url = database_url
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .ok_or_else(|| {
                ProbeError::Config(format!(
                    "pass --database-url or set the {DATABASE_URL_ENV} env variable"
                ))
            })?;
        Ok(ProbeConfig::new(path, url))
    }

    pub fn root_url(&self) -> String {
        format!("{}/.json", self.database_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_resolves_from_explicit_values() {
        let config = ProbeConfig::resolve(
            Some("/tmp/service_account.json".to_string()),
            Some("https://demo-rtdb.firebaseio.com".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.service_account_path,
            PathBuf::from("/tmp/service_account.json")
        );
        assert_eq!(config.database_url, "https://demo-rtdb.firebaseio.com");
    }

    #[test]
    fn it_reports_the_missing_database_url() {
        // No FIREBASE_DATABASE_URL in the test environment
        std::env::remove_var(DATABASE_URL_ENV);
        let error = ProbeConfig::resolve(Some("/tmp/service_account.json".to_string()), None)
            .unwrap_err();
        assert!(error.to_string().contains(DATABASE_URL_ENV));
    }

    #[test]
    fn root_url_targets_the_root_node() {
        let config = ProbeConfig::new("key.json", "https://demo-rtdb.firebaseio.com");
        assert_eq!(config.root_url(), "https://demo-rtdb.firebaseio.com/.json");
    }

    #[test]
    fn root_url_tolerates_a_trailing_slash() {
        let config = ProbeConfig::new("key.json", "https://demo-rtdb.firebaseio.com/");
        assert_eq!(config.root_url(), "https://demo-rtdb.firebaseio.com/.json");
    }
}
