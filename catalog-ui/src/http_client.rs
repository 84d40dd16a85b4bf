//! JSON-over-HTTP client shared by the catalog services.
//! Every failure, whatever its cause, comes back as a `RequestError`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, RequestError>;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request to {url} failed with status: {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse JSON response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("product has no id")]
    MissingId,
}

/// Connection settings for `HttpClient`.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_options(base_url, &ClientOptions::default())
    }

    pub fn with_options(base_url: &str, options: &ClientOptions) -> Self {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = {
            let mut builder = builder;
            if let Some(timeout) = options.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(connect_timeout) = options.connect_timeout {
                builder = builder.connect_timeout(connect_timeout);
            }
            builder
        };
        #[cfg(target_arch = "wasm32")]
        let _ = options;

        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        });

        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    /// Joins `path` onto the base URL verbatim; the base is expected to carry its own trailing slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_request<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        log::debug!("[HTTP] GET {}", url);
        let request = self.client.get(&url);
        self.execute(request, url).await
    }

    pub async fn post_request<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.url(path);
        log::debug!("[HTTP] POST {}", url);
        let request = self.client.post(&url).json(body);
        self.execute(request, url).await
    }

    pub async fn put_request<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.url(path);
        log::debug!("[HTTP] PUT {}", url);
        let request = self.client.put(&url).json(body);
        self.execute(request, url).await
    }

    pub async fn delete_request<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        log::debug!("[HTTP] DELETE {}", url);
        let request = self.client.delete(&url);
        self.execute(request, url).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<R> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(RequestError::Transport { url, source }),
        };

        let status = response.status();
        log::debug!("[HTTP] {} -> {}", url, status);

        if !status.is_success() {
            return Err(RequestError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(RequestError::Transport { url, source }),
        };

        // An empty body (e.g. 204 from DELETE) decodes as JSON null.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };

        serde_json::from_str(body).map_err(|e| RequestError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
