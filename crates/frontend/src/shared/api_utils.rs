//! API utilities for frontend-backend communication
//!
//! `FetchClient` is the only place that touches the network. It settles every
//! request into an `HttpReply` (status plus raw body) or a `TransportError`;
//! interpreting the body is left to the page controllers.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::FormData;

use super::config::ClientConfig;
use super::request_cycle::{HttpReply, TransportError};

/// Get the base URL for API requests
///
/// # Returns
/// - The page origin, like "https://example.com"
/// - Empty string if window is not available (URLs stay relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct FetchClient {
    config: ClientConfig,
}

impl FetchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a JSON body
    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpReply, TransportError> {
        let url = self.config.endpoint_url(path);
        log::debug!("POST {} (json)", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        settle(response).await
    }

    /// POST a multipart body
    pub async fn post_form(&self, path: &str, form: FormData) -> Result<HttpReply, TransportError> {
        let url = self.config.endpoint_url(path);
        log::debug!("POST {} (multipart)", url);

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        settle(response).await
    }

    /// POST without a body
    pub async fn post_empty(&self, path: &str) -> Result<HttpReply, TransportError> {
        let url = self.config.endpoint_url(path);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        settle(response).await
    }
}

async fn settle(response: Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
    Ok(HttpReply::new(status, body))
}
