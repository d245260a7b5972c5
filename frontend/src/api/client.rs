use reqwest::{Client, StatusCode};

use crate::{api::types::*, config};

pub const LOGIN_PATH: &str = "/users/login";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Single request/response exchange with the authentication endpoint.
    /// Only `200 OK` with a parseable body counts as success; there is no retry.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResult, LoginError> {
        let base_url = self.resolved_base_url().await;
        let url = endpoint(&base_url, LOGIN_PATH);
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest::from(credentials))
            .send()
            .await
            .map_err(|e| LoginError::failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LoginError::from_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoginError::failed(format!("Failed to read response: {}", e)))?;
        if body.trim().is_empty() {
            return Err(LoginError::failed("Empty response body"));
        }
        serde_json::from_str(&body)
            .map_err(|e| LoginError::failed(format!("Failed to parse response: {}", e)))
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::endpoint;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("http://api.local/", "/users/login"),
            "http://api.local/users/login"
        );
        assert_eq!(
            endpoint("http://api.local/api", "/users/login"),
            "http://api.local/api/users/login"
        );
    }
}
