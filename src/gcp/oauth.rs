use std::path::Path;

use crate::error::{ProbeError, ProbeResult};

const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/firebase.database",
];

pub struct OAuth {
    pub token: String,
    pub project_id: Option<String>,
}

/// Loads the service account key and exchanges it for an access token usable
/// as a Bearer token against the Realtime Database REST API.
pub async fn get_oauth_token(service_account_path: &Path) -> ProbeResult<OAuth> {
    // The key file contains JSON like `{"type": "service_account", "client_email": ... }`
    let secret = yup_oauth2::read_service_account_key(service_account_path)
        .await
        .map_err(|e| ProbeError::CredentialLoad {
            path: service_account_path.to_path_buf(),
            source: e,
        })?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(secret.clone())
        .build()
        .await
        .map_err(|e| ProbeError::Initialization(format!("could not build authenticator: {e}")))?;

    // token(<scopes>) is the one important function of this crate; it does everything to
    // obtain a token that can be sent e.g. as Bearer token.
    let token = auth
        .token(SCOPES)
        .await
        .map_err(|e| ProbeError::Initialization(format!("token exchange failed: {e}")))?;
    Ok(OAuth {
        token: token
            .token()
            .ok_or_else(|| {
                ProbeError::Initialization("token exchange returned no access token".to_string())
            })?
            .to_string(),
        project_id: secret.project_id,
    })
}
