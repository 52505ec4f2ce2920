use crate::client_config::ClientConfig;
use crate::draft::Draft;
use crate::errors::ValidationError;
use crate::payload::{MessageExample, Payload, Style, Templates};

/// Split comma-delimited free text: trim each segment, drop empties,
/// preserve order, keep duplicates.
pub fn split_commas(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split newline-delimited free text: drop empty lines, preserve order.
/// Lines are not trimmed.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_message_examples(raw: &str) -> Result<Vec<Vec<MessageExample>>, ValidationError> {
    serde_json::from_str(raw).map_err(|_| ValidationError::InvalidMessageExamplesFormat)
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Coerce a draft into the minimal wire payload, or report the first
/// failing validation rule.
///
/// Rule order: required fields (name, bio, modelProvider), message
/// examples parse, at least one style guideline after splitting, at least
/// one client. Splitting runs up front since the style rule inspects its
/// result.
pub fn normalize(draft: &Draft) -> Result<Payload, ValidationError> {
    let style = Style {
        all: split_lines(&draft.style.all),
        chat: split_lines(&draft.style.chat),
        post: split_lines(&draft.style.post),
    };

    if draft.name.is_empty() {
        return Err(ValidationError::MissingRequiredField("name"));
    }
    if draft.bio.is_empty() {
        return Err(ValidationError::MissingRequiredField("bio"));
    }
    let model_provider = draft
        .model_provider
        .ok_or(ValidationError::MissingRequiredField("modelProvider"))?;

    let message_examples = parse_message_examples(&draft.message_examples)?;

    if style.is_empty() {
        return Err(ValidationError::MissingStyleGuidelines);
    }
    if draft.clients.is_empty() {
        return Err(ValidationError::MissingClientSelection);
    }

    Ok(Payload {
        name: draft.name.clone(),
        username: optional(&draft.username),
        bio: draft.bio.clone(),
        system: optional(&draft.system),
        lore: split_lines(&draft.lore),
        topics: split_commas(&draft.topics),
        adjectives: split_commas(&draft.adjectives),
        model_provider,
        image_model_provider: draft.image_model_provider,
        message_examples,
        post_examples: split_lines(&draft.post_examples),
        clients: draft.clients.clone(),
        plugins: draft.plugins.clone(),
        style,
        templates: Templates::from_drafts(&draft.templates),
        client_config: ClientConfig::from_draft(&draft.client_config),
    })
}
