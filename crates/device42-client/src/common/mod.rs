//! Common utilities for the Device42 API client
//!
//! Provides the HTTP request core shared across all API modules.

pub mod query;

use crate::error::Device42Error;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default API version segment. Most endpoints live under `/api/1.0/`;
/// the device and IP-address write endpoints are unversioned (`/api/`).
pub const API_VERSION: &str = "1.0";

/// HTTP client wrapper with authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of Debug output
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, username: String, password: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from an API path.
    ///
    /// Versioned paths land under `/api/1.0/`, unversioned ones under `/api/`.
    /// The API wants a trailing slash on plain resource paths but rejects one
    /// appended after a query string, so the slash is only added when the path
    /// carries no query and does not already end with one.
    pub fn build_url(&self, path: &str, versioned: bool) -> String {
        let mut url = if versioned {
            format!("{}/api/{}/{}", self.base_url, API_VERSION, path)
        } else {
            format!("{}/api/{}", self.base_url, path)
        };
        if !url.ends_with('/') && !url.contains('?') {
            url.push('/');
        }
        url
    }

    /// Make a GET request against a versioned API path
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, Device42Error> {
        let url = self.build_url(path, true);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(Device42Error::Http)?;

        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::Authentication(format!(
                "GET {} rejected: {} - {}",
                path,
                status,
                snippet(&body)
            )));
        }

        if status == 404 {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::NotFound(format!(
                "Resource not found: {} - {}",
                path,
                snippet(&body)
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::Api(format!(
                "GET {} failed: {} - {}",
                path,
                status,
                snippet(&body)
            )));
        }

        // Capture the body so decode failures carry context
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            Device42Error::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                snippet(&response_text)
            ))
        })
    }

    /// Make a form-encoded POST request
    pub async fn post_form<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        versioned: bool,
        form: &[(&str, String)],
    ) -> Result<T, Device42Error> {
        let url = self.build_url(path, versioned);
        debug!("POST {} with {} form fields", url, form.len());
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .form(form)
            .send()
            .await
            .map_err(Device42Error::Http)?;
        self.decode_write_response(path, "POST", response).await
    }

    /// Make a form-encoded PUT request
    pub async fn put_form<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T, Device42Error> {
        let url = self.build_url(path, true);
        debug!("PUT {} with {} form fields", url, form.len());
        let response = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .form(form)
            .send()
            .await
            .map_err(Device42Error::Http)?;
        self.decode_write_response(path, "PUT", response).await
    }

    async fn decode_write_response<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        verb: &str,
        response: reqwest::Response,
    ) -> Result<T, Device42Error> {
        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::Authentication(format!(
                "{} {} rejected: {} - {}",
                verb,
                path,
                status,
                snippet(&body)
            )));
        }

        if status == 404 {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::NotFound(format!(
                "Resource not found: {} - {}",
                path,
                snippet(&body)
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Device42Error::Api(format!(
                "{} {} failed: {} - {}",
                verb,
                path,
                status,
                snippet(&body)
            )));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            Device42Error::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                snippet(&response_text)
            ))
        })
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(500).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> HttpClient {
        HttpClient::new(
            Client::new(),
            "https://d42.example.com:443/".to_string(),
            "admin".to_string(),
            "changeme".to_string(),
        )
    }

    #[test]
    fn build_url_appends_version_and_slash() {
        let h = http();
        assert_eq!(
            h.build_url("racks", true),
            "https://d42.example.com:443/api/1.0/racks/"
        );
        assert_eq!(
            h.build_url("racks/", true),
            "https://d42.example.com:443/api/1.0/racks/"
        );
    }

    #[test]
    fn build_url_unversioned() {
        let h = http();
        assert_eq!(h.build_url("device", false), "https://d42.example.com:443/api/device/");
    }

    #[test]
    fn build_url_leaves_query_paths_alone() {
        // The API rejects a trailing slash appended after query parameters.
        let h = http();
        assert_eq!(
            h.build_url("devices/id/156/?follow=yes", true),
            "https://d42.example.com:443/api/1.0/devices/id/156/?follow=yes"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let h = http();
        assert_eq!(h.base_url(), "https://d42.example.com:443");
    }
}
