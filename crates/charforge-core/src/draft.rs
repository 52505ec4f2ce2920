use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client_config::ClientConfigDraft;
use crate::payload::Payload;
use crate::types::{ClientKind, ModelProvider};

/// The mutable, in-progress configuration record held by an editing
/// session. Free-text fields stay raw here; splitting into structured
/// lists happens at normalization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub system: String,
    /// Newline-delimited.
    pub lore: String,
    /// Comma-delimited.
    pub topics: String,
    /// Comma-delimited.
    pub adjectives: String,
    /// Newline-delimited.
    pub post_examples: String,
    /// Raw JSON text, parsed lazily at normalization time.
    pub message_examples: String,
    pub model_provider: Option<ModelProvider>,
    pub image_model_provider: Option<ModelProvider>,
    pub clients: Vec<ClientKind>,
    pub plugins: Vec<String>,
    pub style: StyleDraft,
    pub templates: TemplateDrafts,
    pub client_config: ClientConfigDraft,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            bio: String::new(),
            system: String::new(),
            lore: String::new(),
            topics: String::new(),
            adjectives: String::new(),
            post_examples: String::new(),
            message_examples: "[]".to_string(),
            model_provider: None,
            image_model_provider: None,
            clients: Vec::new(),
            plugins: Vec::new(),
            style: StyleDraft::default(),
            templates: TemplateDrafts::default(),
            client_config: ClientConfigDraft::default(),
        }
    }
}

/// Style guidelines as free text, one guideline per line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDraft {
    pub all: String,
    pub chat: String,
    pub post: String,
}

/// Prompt-template slots. Empty slots are dropped at normalization time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateDrafts {
    pub goals_template: String,
    pub facts_template: String,
    pub message_handler_template: String,
    pub should_respond_template: String,
    pub continue_message_handler_template: String,
    pub evaluation_template: String,
}

impl Draft {
    /// Reconstruct the draft equivalent of a payload for re-editing:
    /// structured lists join back into delimited text. Normalizing the
    /// result reproduces the payload exactly.
    pub fn from_payload(payload: &Payload) -> Self {
        let message_examples = Value::Array(
            payload
                .message_examples
                .iter()
                .map(|turn| {
                    Value::Array(turn.iter().map(|m| Value::Object(m.clone())).collect())
                })
                .collect(),
        );

        Self {
            name: payload.name.clone(),
            username: payload.username.clone().unwrap_or_default(),
            bio: payload.bio.clone(),
            system: payload.system.clone().unwrap_or_default(),
            lore: payload.lore.join("\n"),
            topics: payload.topics.join(", "),
            adjectives: payload.adjectives.join(", "),
            post_examples: payload.post_examples.join("\n"),
            message_examples: message_examples.to_string(),
            model_provider: Some(payload.model_provider),
            image_model_provider: payload.image_model_provider,
            clients: payload.clients.clone(),
            plugins: payload.plugins.clone(),
            style: StyleDraft {
                all: payload.style.all.join("\n"),
                chat: payload.style.chat.join("\n"),
                post: payload.style.post.join("\n"),
            },
            templates: payload
                .templates
                .as_ref()
                .map(|t| t.to_drafts())
                .unwrap_or_default(),
            client_config: payload
                .client_config
                .as_ref()
                .map(|c| ClientConfigDraft {
                    discord: c.discord.clone().unwrap_or_default(),
                    telegram: c.telegram.clone().unwrap_or_default(),
                    slack: c.slack.clone().unwrap_or_default(),
                })
                .unwrap_or_default(),
        }
    }
}
