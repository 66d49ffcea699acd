use crate::domain::model::{Place, ReviewDraft, SessionToken};
use crate::domain::ports::PlacesApi;
use crate::utils::error::{ApiError, FrontError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// reqwest-backed client for the HBnB backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FrontError::ConfigError {
                message: format!("Cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/places/{id}` with the id percent-encoded as a single segment.
    fn place_url(&self, place_id: &str) -> std::result::Result<Url, ApiError> {
        if place_id.is_empty() || place_id == "." || place_id == ".." {
            return Err(ApiError::Http {
                status: StatusCode::NOT_FOUND.as_u16(),
                message: format!("Invalid place id: {:?}", place_id),
            });
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::Network {
            message: format!("Invalid base URL {}: {}", self.base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network {
                message: format!("Base URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("places")
            .push(place_id);
        Ok(url)
    }

    fn authorized(request: RequestBuilder, token: Option<&SessionToken>) -> RequestBuilder {
        match token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, token.bearer_header()),
            None => request,
        }
    }
}

/// Reads an error body and returns the first string among `fields`.
async fn server_message(response: Response, fields: &[&str]) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    fields
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
        .map(str::to_string)
}

async fn http_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let message = server_message(response, &["message", "error"])
        .await
        .unwrap_or_else(|| fallback.to_string());
    ApiError::Http { status, message }
}

#[async_trait]
impl PlacesApi for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> std::result::Result<SessionToken, ApiError> {
        let url = self.url("/auth/login");
        tracing::debug!("Making login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        if status.is_success() {
            let body: Value = response.json().await.map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;
            return body
                .get("access_token")
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(SessionToken::new)
                .ok_or_else(|| ApiError::Http {
                    status: status.as_u16(),
                    message: "Login response missing access_token".to_string(),
                });
        }

        // 登入失敗以 `error` 欄位為準
        let message = server_message(response, &["error", "message"]).await;
        if status == StatusCode::UNAUTHORIZED || message.as_deref() == Some(INVALID_CREDENTIALS) {
            return Err(ApiError::InvalidCredentials {
                message: message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            });
        }

        Err(ApiError::Http {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| "Login failed".to_string()),
        })
    }

    async fn fetch_places(
        &self,
        token: Option<&SessionToken>,
    ) -> std::result::Result<Vec<Place>, ApiError> {
        let url = self.url("/places/");
        tracing::debug!("Fetching places from: {}", url);

        let response = Self::authorized(self.client.get(&url), token).send().await?;
        if !response.status().is_success() {
            return Err(http_error(response, "Failed to fetch places").await);
        }

        let places: Vec<Place> = response.json().await?;
        tracing::debug!("Fetched {} places", places.len());
        Ok(places)
    }

    async fn fetch_place(
        &self,
        token: Option<&SessionToken>,
        place_id: &str,
    ) -> std::result::Result<Place, ApiError> {
        let url = self.place_url(place_id)?;
        tracing::debug!("Fetching place details from: {}", url);

        let response = Self::authorized(self.client.get(url), token).send().await?;
        if !response.status().is_success() {
            return Err(http_error(response, "Failed to fetch place details").await);
        }

        Ok(response.json().await?)
    }

    async fn submit_review(
        &self,
        token: &SessionToken,
        draft: &ReviewDraft,
    ) -> std::result::Result<Value, ApiError> {
        let url = self.url("/reviews/");
        tracing::debug!("Submitting review for place {} to: {}", draft.place_id, url);

        let response = Self::authorized(self.client.post(&url), Some(token))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http_error(response, "Failed to submit review").await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}
