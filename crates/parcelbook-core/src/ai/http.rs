//! `POST /ai/describe` over HTTP

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, warn};
use ureq::Agent;

use super::{DescribeBackend, DescribeError, DescribeRequest};
use crate::http;

#[derive(Debug, Deserialize)]
struct DescribeReply {
    #[serde(default)]
    text: Option<String>,
}

pub struct HttpDescribeClient {
    url: String,
    agent: Agent,
}

impl HttpDescribeClient {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.trim().to_string(),
            agent: http::build_agent(timeout),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Map a non-2xx reply to an error; 503 and "not configured" bodies
/// mean no backend is available
fn rejection(status: u16, body: &str) -> DescribeError {
    let message = body.trim();
    if status == 503 || message.to_lowercase().contains("not configured") {
        return DescribeError::NotConfigured;
    }
    let message = if message.is_empty() {
        format!("HTTP {}", status)
    } else {
        message.to_string()
    };
    DescribeError::Rejected { status, message }
}

impl DescribeBackend for HttpDescribeClient {
    fn describe(&self, request: &DescribeRequest<'_>) -> Result<String, DescribeError> {
        let payload = serde_json::to_string(request)
            .map_err(|e| DescribeError::InvalidResponse(e.to_string()))?;

        let reply = http::post_json(&self.agent, &self.url, payload).map_err(|e| {
            error!(url = %self.url, error = %e, "describe request failed");
            DescribeError::Transport(e.to_string())
        })?;

        if !reply.is_success() {
            let err = rejection(reply.status, &reply.body);
            warn!(url = %self.url, status = reply.status, error = %err, "describe rejected");
            return Err(err);
        }

        let parsed: DescribeReply = serde_json::from_str(&reply.body)
            .map_err(|e| DescribeError::InvalidResponse(e.to_string()))?;
        let text = parsed.text.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(DescribeError::EmptyResponse);
        }

        debug!(chars = text.chars().count(), "describe");
        Ok(text)
    }
}
