//! Public address lookup through an HTTP address-echo service.
//!
//! One GET request, one attempt. The configured timeout bounds the whole
//! exchange (connect, headers and body).

use std::time::Duration;

use reqwest::StatusCode;

use crate::app_info::{APP_NAME, APP_VERSION};
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult, LookupError};
use crate::types::AddressResult;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP client bound to a single echo endpoint.
#[derive(Debug, Clone)]
pub struct PublicIpClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl PublicIpClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("{APP_NAME}/{APP_VERSION}"))
            .build()
            .map_err(|e| CoreError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the endpoint for our public address.
    pub async fn fetch(&self) -> AddressResult {
        log::debug!("GET {} (timeout {:?})", self.endpoint, self.timeout);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response.bytes().await.map_err(|e| classify(&e))?;
        interpret_response(status, &body)
    }
}

/// Map a transport error onto a lookup failure cause.
fn classify(e: &reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout(e.to_string())
    } else if e.is_redirect() || e.is_decode() {
        LookupError::Upstream(e.to_string())
    } else {
        LookupError::Network(e.to_string())
    }
}

/// Turn a status and raw body into an address.
///
/// Any non-2xx status, a body that is not UTF-8 text, a body with control
/// characters, or a blank body is an upstream failure.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> AddressResult {
    let text = String::from_utf8_lossy(body);

    if !status.is_success() {
        log::warn!("Address service returned HTTP {status}: {}", truncate_for_log(&text));
        return Err(LookupError::Upstream(format!("HTTP {status}")));
    }

    let Ok(text) = std::str::from_utf8(body) else {
        return Err(LookupError::Upstream(
            "Response body is not UTF-8 text".to_string(),
        ));
    };

    let address = text.trim();
    if address.is_empty() {
        return Err(LookupError::Upstream("Empty response body".to_string()));
    }
    if address.chars().any(char::is_control) {
        log::warn!("Address service returned binary data: {}", truncate_for_log(text));
        return Err(LookupError::Upstream(
            "Response body contains control characters".to_string(),
        ));
    }

    Ok(address.to_string())
}
