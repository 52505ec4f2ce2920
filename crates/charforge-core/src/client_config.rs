use serde::{Deserialize, Serialize};

/// Discord integration toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscordConfig {
    pub should_ignore_bot_messages: bool,
    pub should_ignore_direct_messages: bool,
    pub should_respond_only_to_mentions: bool,
    pub message_similarity_threshold: f64,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            should_ignore_bot_messages: false,
            should_ignore_direct_messages: false,
            should_respond_only_to_mentions: false,
            message_similarity_threshold: 0.8,
        }
    }
}

/// Telegram integration toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TelegramConfig {
    pub should_ignore_bot_messages: bool,
    pub should_ignore_direct_messages: bool,
    pub should_respond_only_to_mentions: bool,
    pub should_only_join_in_allowed_groups: bool,
    pub allowed_group_ids: Vec<String>,
    pub message_similarity_threshold: f64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            should_ignore_bot_messages: false,
            should_ignore_direct_messages: false,
            should_respond_only_to_mentions: false,
            should_only_join_in_allowed_groups: false,
            allowed_group_ids: Vec::new(),
            message_similarity_threshold: 0.8,
        }
    }
}

/// Slack integration toggles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackConfig {
    pub should_ignore_bot_messages: bool,
    pub should_ignore_direct_messages: bool,
}

/// All per-client sections as the editing session holds them: every
/// section present, pre-populated with catalog defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigDraft {
    pub discord: DiscordConfig,
    pub telegram: TelegramConfig,
    pub slack: SlackConfig,
}

/// Per-client sections as the wire payload carries them: only customized
/// sections, and no map at all when nothing is customized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<DiscordConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackConfig>,
}

impl ClientConfig {
    /// A section counts as customized when any field differs from its
    /// declared catalog default (0.8 for similarity thresholds, not 0).
    /// Customized sections are carried whole; `None` when no section
    /// differs.
    pub fn from_draft(draft: &ClientConfigDraft) -> Option<Self> {
        let discord = (draft.discord != DiscordConfig::default()).then(|| draft.discord.clone());
        let telegram =
            (draft.telegram != TelegramConfig::default()).then(|| draft.telegram.clone());
        let slack = (draft.slack != SlackConfig::default()).then(|| draft.slack.clone());

        if discord.is_none() && telegram.is_none() && slack.is_none() {
            return None;
        }
        Some(Self {
            discord,
            telegram,
            slack,
        })
    }
}
