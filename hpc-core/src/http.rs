//! Native transport over `reqwest`, used by the CLI.

use crate::client::{RawReply, Transport};
use crate::error::InvokeError;
use crate::route::{join_url, Route};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InvokeError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InvokeError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, route: Route, body: String) -> Result<RawReply, InvokeError> {
        let response = self
            .client
            .post(join_url(&self.base_url, route))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| InvokeError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| InvokeError::Transport(e.to_string()))?;
        Ok(RawReply { status, body })
    }
}
