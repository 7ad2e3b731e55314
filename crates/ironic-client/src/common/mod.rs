//! Common utilities for the Ironic API client
//!
//! Provides shared request handling used by all API calls.

pub mod query;

use crate::config::AuthConfig;
use crate::error::IronicError;
use crate::models::PortCollection;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Header carrying the requested API microversion
pub const API_VERSION_HEADER: &str = "X-OpenStack-Ironic-API-Version";

/// A collection response that may link to a next page
pub trait Paged: for<'de> Deserialize<'de> {
    type Item;

    /// Split the page into its items and the link to the next page
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

impl Paged for PortCollection {
    type Item = crate::models::Port;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.ports, self.next)
    }
}

/// HTTP client wrapper with authentication and microversion headers
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_version: String,
    auth: AuthConfig,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, api_version: String, auth: AuthConfig) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version,
            auth,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Attach the microversion, accept and auth headers
    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(API_VERSION_HEADER, &self.api_version)
            .header("Accept", "application/json");

        match &self.auth {
            AuthConfig::None => builder,
            AuthConfig::Basic { username, password } => builder.basic_auth(username, Some(password)),
            AuthConfig::Token(token) => builder.header("X-Auth-Token", token),
        }
    }

    /// Map a non-success response to an error
    async fn error_for(method: &str, path: &str, response: Response) -> IronicError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return IronicError::Authentication(format!("{} {}: {} - {}", method, path, status, body));
        }

        IronicError::Api {
            status: status.as_u16(),
            message: format!("{} {} failed: {}", method, path, body),
        }
    }

    /// Make a GET request
    ///
    /// A 404 is reported as [`IronicError::NotFound`].
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, IronicError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.decorate(self.client.get(&url)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(IronicError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            )));
        }

        if !status.is_success() {
            return Err(Self::error_for("GET", path, response).await);
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a POST request with a JSON body
    pub async fn post<B: serde::Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, IronicError> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let response = self
            .decorate(self.client.post(&url))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for("POST", path, response).await);
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch all pages of a collection, following `next` links
    pub async fn fetch_all_pages<P: Paged>(&self, path: &str) -> Result<Vec<P::Item>, IronicError> {
        let mut all_results = Vec::new();
        let mut next = Some(path.to_string());

        while let Some(current) = next.take() {
            debug!("Fetching page: {}", current);

            let response = self.decorate(self.client.get(self.build_url(&current))).send().await?;
            if !response.status().is_success() {
                return Err(Self::error_for("GET", &current, response).await);
            }

            let response_text = response.text().await?;
            let page: P = serde_json::from_str(&response_text).map_err(|e| IronicError::Api {
                status: 200,
                message: format!(
                    "error decoding response body: {} - Response (first 500 chars): {}",
                    e,
                    response_text.chars().take(500).collect::<String>()
                ),
            })?;

            let (items, next_link) = page.into_parts();
            all_results.extend(items);
            // A server repeating the current link would otherwise loop forever
            next = next_link.filter(|link| !link.is_empty() && *link != current);
        }

        Ok(all_results)
    }
}
