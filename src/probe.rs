use std::fmt::Formatter;

use log::debug;
use serde_json::Value;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::gcp::{client, oauth};
use crate::http::HttpClient;

/// What the database root held at the moment of the read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSnapshot {
    /// The backend returned `null`: nothing has ever been written at root.
    Absent,
    /// The backend returned an object with no keys.
    Empty,
    /// Top-level key names, in the order the backend returned them.
    Populated(Vec<String>),
}

impl RootSnapshot {
    pub fn classify(value: Value) -> RootSnapshot {
        match value {
            Value::Null => RootSnapshot::Absent,
            Value::Object(map) if map.is_empty() => RootSnapshot::Empty,
            Value::Object(map) => RootSnapshot::Populated(map.keys().cloned().collect()),
            // A scalar written at root has no keyed children
            _ => RootSnapshot::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub database_url: String,
    pub root: RootSnapshot,
}

impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "✓ Connected to the Firebase Realtime Database")?;
        writeln!(f, "✓ Database URL: {}", self.database_url)?;
        match &self.root {
            RootSnapshot::Populated(keys) => {
                writeln!(f, "\n📊 Database contains {} root key(s):", keys.len())?;
                for key in keys {
                    writeln!(f, "  - {key}")?;
                }
            }
            RootSnapshot::Absent => {
                writeln!(f, "\n⚠ Database is empty (no data at root level)")?;
                writeln!(f, "  This is normal for a new database")?;
            }
            RootSnapshot::Empty => {
                writeln!(f, "\n⚠ Database root is an empty object (no keys)")?;
            }
        }
        Ok(())
    }
}

pub struct ConnectivityProbe {
    config: ProbeConfig,
}

impl ConnectivityProbe {
    pub fn new(config: ProbeConfig) -> ConnectivityProbe {
        ConnectivityProbe { config }
    }

    /// Authenticates, performs one read of the database root and reports what
    /// was found. Never touches the process: all failures come back as values.
    pub async fn run(&self) -> ProbeResult<ProbeReport> {
        let oauth = oauth::get_oauth_token(&self.config.service_account_path).await?;

        let root_url = self.config.root_url();
        reqwest::Url::parse(&root_url).map_err(|e| {
            ProbeError::Initialization(format!(
                "malformed database URL {}: {e}",
                self.config.database_url
            ))
        })?;
        let client = client::authenticated_client(&oauth.token)?;

        debug!("reading database root at {root_url}");
        let root: Value = client
            .make_json_request(|client| client.get(&root_url))
            .await?;

        Ok(ProbeReport {
            database_url: self.config.database_url.clone(),
            root: RootSnapshot::classify(root),
        })
    }
}
