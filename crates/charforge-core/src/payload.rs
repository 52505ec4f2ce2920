use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client_config::ClientConfig;
use crate::draft::TemplateDrafts;
use crate::types::{ClientKind, ModelProvider};

/// One conversational turn in a message example: an open record keyed by
/// the runtime (`user`, `content`, ...). Carried verbatim from the draft's
/// raw JSON into the payload.
pub type MessageExample = Map<String, Value>;

/// The minimal validated record sent to the server. Optional fields and
/// sections exist on the wire only when customized; an empty `templates`
/// or `clientConfig` map never appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub lore: Vec<String>,
    pub topics: Vec<String>,
    pub adjectives: Vec<String>,
    pub model_provider: ModelProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_model_provider: Option<ModelProvider>,
    pub message_examples: Vec<Vec<MessageExample>>,
    pub post_examples: Vec<String>,
    pub clients: Vec<ClientKind>,
    pub plugins: Vec<String>,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Templates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_config: Option<ClientConfig>,
}

/// Normalized style guidelines, grouped by context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub all: Vec<String>,
    pub chat: Vec<String>,
    pub post: Vec<String>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.chat.is_empty() && self.post.is_empty()
    }
}

/// Prompt-template overrides. Each slot is present only when its draft
/// value trims non-empty; the untrimmed text is what goes on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Templates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_handler_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_respond_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_message_handler_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_template: Option<String>,
}

fn slot(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

impl Templates {
    /// `None` when every slot is blank.
    pub fn from_drafts(drafts: &TemplateDrafts) -> Option<Self> {
        let templates = Self {
            goals_template: slot(&drafts.goals_template),
            facts_template: slot(&drafts.facts_template),
            message_handler_template: slot(&drafts.message_handler_template),
            should_respond_template: slot(&drafts.should_respond_template),
            continue_message_handler_template: slot(&drafts.continue_message_handler_template),
            evaluation_template: slot(&drafts.evaluation_template),
        };
        let any = templates.goals_template.is_some()
            || templates.facts_template.is_some()
            || templates.message_handler_template.is_some()
            || templates.should_respond_template.is_some()
            || templates.continue_message_handler_template.is_some()
            || templates.evaluation_template.is_some();
        any.then_some(templates)
    }

    pub fn to_drafts(&self) -> TemplateDrafts {
        TemplateDrafts {
            goals_template: self.goals_template.clone().unwrap_or_default(),
            facts_template: self.facts_template.clone().unwrap_or_default(),
            message_handler_template: self.message_handler_template.clone().unwrap_or_default(),
            should_respond_template: self.should_respond_template.clone().unwrap_or_default(),
            continue_message_handler_template: self
                .continue_message_handler_template
                .clone()
                .unwrap_or_default(),
            evaluation_template: self.evaluation_template.clone().unwrap_or_default(),
        }
    }
}
