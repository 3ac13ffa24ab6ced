use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

/// Top-level chat client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub agents: Vec<AgentEndpoint>,
    pub default_agent: String,
    pub stale_replies: StaleReplyPolicy,
    pub ordering: SubmitOrdering,
    /// How long an error toast stays on screen
    pub toast_seconds: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            agents: vec![
                AgentEndpoint::new("salud", "Salud", DEFAULT_SALUD_URL),
                AgentEndpoint::new("comida", "Comida", DEFAULT_COMIDA_URL),
            ],
            default_agent: "salud".to_string(),
            stale_replies: StaleReplyPolicy::default(),
            ordering: SubmitOrdering::default(),
            toast_seconds: 4.0,
        }
    }
}

impl ChatConfig {
    pub fn agent(&self, id: &str) -> Option<&AgentEndpoint> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Webhook URL for the given agent identifier
    pub fn endpoint_for(&self, agent: &str) -> Result<&str> {
        self.agent(agent)
            .map(|a| a.url.as_str())
            .ok_or_else(|| ChatError::UnknownAgent(agent.to_string()))
    }

    /// Check that the default agent exists and every endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.agent(&self.default_agent).is_none() {
            return Err(ChatError::Config(format!(
                "default agent '{}' has no endpoint",
                self.default_agent
            )));
        }
        for agent in &self.agents {
            if agent.id.trim().is_empty() {
                return Err(ChatError::Config("agent id must not be empty".to_string()));
            }
            if !(agent.url.starts_with("https://") || agent.url.starts_with("http://")) {
                return Err(ChatError::Config(format!(
                    "endpoint for '{}' is not an absolute URL: {}",
                    agent.id, agent.url
                )));
            }
        }
        if self.toast_seconds <= 0.0 {
            return Err(ChatError::Config("toast_seconds must be positive".to_string()));
        }
        Ok(())
    }
}

/// One conversational persona and the webhook that serves it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndpoint {
    pub id: String,
    pub label: String,
    pub url: String,
}

impl AgentEndpoint {
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// What to do with a reply whose request was issued before the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaleReplyPolicy {
    /// Drop the reply; the fresh conversation never sees it
    #[default]
    Discard,
    /// Append it to whatever log exists when it arrives
    Append,
}

impl StaleReplyPolicy {
    pub fn all() -> &'static [StaleReplyPolicy] {
        &[StaleReplyPolicy::Discard, StaleReplyPolicy::Append]
    }

    pub fn label(&self) -> &str {
        match self {
            StaleReplyPolicy::Discard => "Descartar",
            StaleReplyPolicy::Append => "Añadir",
        }
    }
}

/// How overlapping submissions are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOrdering {
    /// Each submit runs its own request; replies land in arrival order
    #[default]
    Concurrent,
    /// Requests go through a single slot; replies land in submission order
    Serialized,
}

impl SubmitOrdering {
    pub fn all() -> &'static [SubmitOrdering] {
        &[SubmitOrdering::Concurrent, SubmitOrdering::Serialized]
    }

    pub fn label(&self) -> &str {
        match self {
            SubmitOrdering::Concurrent => "Concurrente",
            SubmitOrdering::Serialized => "En serie",
        }
    }
}

const DEFAULT_SALUD_URL: &str = "https://n8n.example.com/webhook/salud";
const DEFAULT_COMIDA_URL: &str = "https://n8n.example.com/webhook/comida";
