//! HTTP transport for Atlas REST API calls

use crate::error::{AtlasError, Result};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Transport-level metadata of a completed exchange
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: String,
}

/// HTTP client wrapper shared by every resource service
#[derive(Clone, Debug)]
pub struct AtlasHttpClient {
    client: Client,
}

impl AtlasHttpClient {
    /// Create a new HTTP client
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("matlas/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<(T, ResponseMeta)> {
        tracing::debug!("GET {}", url);
        let (body, meta) = self.execute(self.client.get(url), token).await?;
        decode(&body, meta)
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post<B, T>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(T, ResponseMeta)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", url);
        let (body, meta) = self.execute(self.client.post(url).json(body), token).await?;
        decode(&body, meta)
    }

    /// Make a PATCH request with a JSON body and decode the JSON response
    pub async fn patch<B, T>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(T, ResponseMeta)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("PATCH {}", url);
        let (body, meta) = self.execute(self.client.patch(url).json(body), token).await?;
        decode(&body, meta)
    }

    /// Make a DELETE request; any response body is discarded
    pub async fn delete(&self, url: &str, token: Option<&str>) -> Result<ResponseMeta> {
        tracing::debug!("DELETE {}", url);
        let (_, meta) = self.execute(self.client.delete(url), token).await?;
        Ok(meta)
    }

    /// Send a request and return its body, mapping non-success statuses to errors
    async fn execute(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<(String, ResponseMeta)> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let meta = ResponseMeta {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().to_string(),
        };
        let body = response.text().await?;

        if !meta.status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", meta.status, sanitize_for_log(&body));
            return Err(AtlasError::from_status(meta, body));
        }

        Ok((body, meta))
    }
}

/// Decode a JSON body, treating an empty body as `null`
fn decode<T: DeserializeOwned>(body: &str, meta: ResponseMeta) -> Result<(T, ResponseMeta)> {
    let body = if body.trim().is_empty() { "null" } else { body };
    match serde_json::from_str(body) {
        Ok(value) => Ok((value, meta)),
        Err(source) => {
            tracing::error!("Failed to parse response JSON from {}: {}", meta.url, source);
            Err(AtlasError::Decode { meta, source })
        }
    }
}
