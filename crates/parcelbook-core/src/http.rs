//! Shared blocking HTTP plumbing for the notes and AI clients

use std::time::Duration;

use ureq::Agent;

/// Default request timeout for the notes service
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Response reduced to what the clients inspect
#[derive(Debug, Clone)]
pub(crate) struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Agent with a global timeout that reports HTTP error statuses as responses
pub(crate) fn build_agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build();
    Agent::new_with_config(config)
}

/// Minimal User-Agent: name, version, and platform only
pub(crate) fn user_agent() -> String {
    format!(
        "parcelbook/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) fn get(agent: &Agent, url: &str) -> Result<HttpReply, ureq::Error> {
    let mut response = agent
        .get(url)
        .header("User-Agent", user_agent())
        .header("Accept", "application/json")
        .call()?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpReply { status, body })
}

pub(crate) fn post_json(agent: &Agent, url: &str, payload: String) -> Result<HttpReply, ureq::Error> {
    let mut response = agent
        .post(url)
        .header("User-Agent", user_agent())
        .header("Content-Type", "application/json; charset=utf-8")
        .send(payload)?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpReply { status, body })
}
