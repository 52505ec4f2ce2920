use async_trait::async_trait;
use charforge_core::Payload;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Fixed path the agents API listens on, relative to the base URL.
pub const AGENTS_PATH: &str = "/api/agents";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("server rejected the configuration (HTTP {status}){}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Rejected { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub status: u16,
    /// Server-provided message, when the response body carried one.
    pub message: Option<String>,
}

/// The HTTP collaborator behind the submission flow. Kept as a trait so
/// the session can be exercised without a live server.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, payload: &Payload) -> Result<SubmitReceipt, TransportError>;
}

/// reqwest-backed client for the agents API.
pub struct AgentApi {
    http: Client,
    base_url: String,
}

impl AgentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Bring your own `Client` to control timeouts, proxies, etc.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn agents_url(&self) -> String {
        format!("{}{AGENTS_PATH}", self.base_url)
    }

    fn agent_url(&self, name: &str) -> String {
        format!("{}/{name}", self.agents_url())
    }

    /// List stored agent configurations.
    pub async fn list(&self) -> Result<Vec<Value>, TransportError> {
        let resp = self.http.get(self.agents_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let detail = read_detail(resp).await;
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp.json().await?)
    }

    /// Fetch one stored agent configuration by name.
    pub async fn fetch(&self, name: &str) -> Result<Value, TransportError> {
        let resp = self.http.get(self.agent_url(name)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let detail = read_detail(resp).await;
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp.json().await?)
    }

    /// Replace a stored agent configuration.
    pub async fn update(
        &self,
        name: &str,
        payload: &Payload,
    ) -> Result<SubmitReceipt, TransportError> {
        let url = self.agent_url(name);
        debug!(%url, "updating agent configuration");
        let resp = self.http.put(url).json(payload).send().await?;
        receipt(resp).await
    }
}

#[async_trait]
impl Transport for AgentApi {
    async fn submit(&self, payload: &Payload) -> Result<SubmitReceipt, TransportError> {
        let url = self.agents_url();
        debug!(%url, agent = %payload.name, "submitting agent configuration");
        let resp = self.http.post(url).json(payload).send().await?;
        receipt(resp).await
    }
}

async fn receipt(resp: reqwest::Response) -> Result<SubmitReceipt, TransportError> {
    let status = resp.status();
    if status.is_success() {
        let message = read_detail(resp).await;
        Ok(SubmitReceipt {
            status: status.as_u16(),
            message,
        })
    } else {
        let detail = read_detail(resp).await;
        warn!(status = status.as_u16(), detail = detail.as_deref(), "submission rejected");
        Err(TransportError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Pull the human-readable message out of a response body, tolerating
/// both `{"detail": ...}` and `{"message": ...}` shapes and non-JSON
/// bodies.
async fn read_detail(resp: reqwest::Response) -> Option<String> {
    let body: Value = resp.json().await.ok()?;
    body.get("detail")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
