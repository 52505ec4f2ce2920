use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model provider catalog. Wire names match the agents API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelProvider {
    OpenAi,
    EternalAi,
    Anthropic,
    Grok,
    Groq,
    LlamaCloud,
    Together,
    LlamaLocal,
    Google,
    ClaudeVertex,
    Redpill,
    OpenRouter,
    Ollama,
    Heurist,
    Galadriel,
    FalAi,
    GaiaNet,
    AliBailian,
    Volengine,
    NanoGpt,
    Hyperbolic,
    Venice,
    AkashChatApi,
}

impl ModelProvider {
    pub const ALL: [ModelProvider; 23] = [
        Self::OpenAi,
        Self::EternalAi,
        Self::Anthropic,
        Self::Grok,
        Self::Groq,
        Self::LlamaCloud,
        Self::Together,
        Self::LlamaLocal,
        Self::Google,
        Self::ClaudeVertex,
        Self::Redpill,
        Self::OpenRouter,
        Self::Ollama,
        Self::Heurist,
        Self::Galadriel,
        Self::FalAi,
        Self::GaiaNet,
        Self::AliBailian,
        Self::Volengine,
        Self::NanoGpt,
        Self::Hyperbolic,
        Self::Venice,
        Self::AkashChatApi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::EternalAi => "eternalai",
            Self::Anthropic => "anthropic",
            Self::Grok => "grok",
            Self::Groq => "groq",
            Self::LlamaCloud => "llama_cloud",
            Self::Together => "together",
            Self::LlamaLocal => "llama_local",
            Self::Google => "google",
            Self::ClaudeVertex => "claude_vertex",
            Self::Redpill => "redpill",
            Self::OpenRouter => "openrouter",
            Self::Ollama => "ollama",
            Self::Heurist => "heurist",
            Self::Galadriel => "galadriel",
            Self::FalAi => "falai",
            Self::GaiaNet => "gaianet",
            Self::AliBailian => "ali_bailian",
            Self::Volengine => "volengine",
            Self::NanoGpt => "nanogpt",
            Self::Hyperbolic => "hyperbolic",
            Self::Venice => "venice",
            Self::AkashChatApi => "akash_chat_api",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "openai" => Some(Self::OpenAi),
            "eternalai" => Some(Self::EternalAi),
            "anthropic" => Some(Self::Anthropic),
            "grok" => Some(Self::Grok),
            "groq" => Some(Self::Groq),
            "llama_cloud" => Some(Self::LlamaCloud),
            "together" => Some(Self::Together),
            "llama_local" => Some(Self::LlamaLocal),
            "google" => Some(Self::Google),
            "claude_vertex" => Some(Self::ClaudeVertex),
            "redpill" => Some(Self::Redpill),
            "openrouter" => Some(Self::OpenRouter),
            "ollama" => Some(Self::Ollama),
            "heurist" => Some(Self::Heurist),
            "galadriel" => Some(Self::Galadriel),
            "falai" => Some(Self::FalAi),
            "gaianet" => Some(Self::GaiaNet),
            "ali_bailian" => Some(Self::AliBailian),
            "volengine" => Some(Self::Volengine),
            "nanogpt" => Some(Self::NanoGpt),
            "hyperbolic" => Some(Self::Hyperbolic),
            "venice" => Some(Self::Venice),
            "akash_chat_api" => Some(Self::AkashChatApi),
            _ => None,
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s).ok_or_else(|| CatalogParseError::UnknownProvider(s.to_string()))
    }
}

impl Serialize for ModelProvider {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelProvider {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str_opt(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown model provider: {s}")))
    }
}

/// Messaging integration channels an agent can be enabled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Discord,
    Telegram,
    Twitter,
    Farcaster,
    Lens,
    Slack,
}

impl ClientKind {
    pub const ALL: [ClientKind; 6] = [
        Self::Discord,
        Self::Telegram,
        Self::Twitter,
        Self::Farcaster,
        Self::Lens,
        Self::Slack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Farcaster => "farcaster",
            Self::Lens => "lens",
            Self::Slack => "slack",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "discord" => Some(Self::Discord),
            "telegram" => Some(Self::Telegram),
            "twitter" => Some(Self::Twitter),
            "farcaster" => Some(Self::Farcaster),
            "lens" => Some(Self::Lens),
            "slack" => Some(Self::Slack),
            _ => None,
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientKind {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s).ok_or_else(|| CatalogParseError::UnknownClient(s.to_string()))
    }
}

impl Serialize for ClientKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClientKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str_opt(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown client: {s}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogParseError {
    #[error("unknown model provider: {0}")]
    UnknownProvider(String),
    #[error("unknown client: {0}")]
    UnknownClient(String),
}
