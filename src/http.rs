use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub type HttpResult<T> = std::result::Result<T, ApiError>;

/// Transport-level failures of a single JSON request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not decode response body: {error}")]
    JsonParsing { error: reqwest::Error },
    #[error("network failure: {error}")]
    Network { error: reqwest::Error },
    #[error("HTTP {code}: {message}")]
    Http { code: u16, message: String },
    #[error("{message}")]
    Unknown { message: String },
}

#[async_trait]
pub trait HttpClient {
    type Request;
    type Client;

    async fn make_json_request<T: DeserializeOwned, O: FnOnce(&Self::Client) -> Self::Request>(
        &self,
        to_request: O,
    ) -> HttpResult<T>
    where
        O: Send;
}

#[async_trait]
impl HttpClient for Client {
    type Request = reqwest::RequestBuilder;
    type Client = reqwest::Client;

    async fn make_json_request<T: DeserializeOwned, O: FnOnce(&Client) -> Self::Request>(
        &self,
        to_request: O,
    ) -> HttpResult<T>
    where
        O: Send,
    {
        let response = to_request(self)
            .send()
            .await
            .map_err(|e| ApiError::Network { error: e })?;

        match response.error_for_status_ref() {
            Ok(_) => response
                .json()
                .await
                .map_err(|e| ApiError::JsonParsing { error: e }),
            Err(e) => {
                let status = e.status().ok_or(ApiError::Unknown {
                    message: format!("Could not decode status, got {:?}", e),
                })?;
                let message = response.text().await.map_err(|e| ApiError::Unknown {
                    message: format!("Could not decode response, got {:?}", e),
                })?;
                Err(ApiError::Http {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_the_backend_message() {
        let error = ApiError::Http {
            code: 403,
            message: "Permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 403: Permission denied");
    }
}
