use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::error::{ProbeError, ProbeResult};

/// Builds an HTTP client carrying the Bearer token on every request.
pub fn authenticated_client(token: &str) -> ProbeResult<Client> {
    let mut header_map = HeaderMap::new();

    let authorization_header = format!("Bearer {token}");
    let mut auth_value = HeaderValue::from_str(&authorization_header)
        .map_err(|e| ProbeError::Initialization(format!("invalid bearer token: {e}")))?;
    auth_value.set_sensitive(true);
    header_map.append(AUTHORIZATION, auth_value);

    header_map.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(header_map)
        .build()
        .map_err(|e| ProbeError::Initialization(format!("could not build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_a_token_with_control_characters() {
        let error = authenticated_client("bad\ntoken").unwrap_err();
        assert!(matches!(error, ProbeError::Initialization(_)));
    }

    #[test]
    fn it_builds_a_client_for_a_regular_token() {
        assert!(authenticated_client("ya29.a0AfH6SMB").is_ok());
    }
}
