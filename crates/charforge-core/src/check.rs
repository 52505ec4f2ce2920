use crate::client_config::{DiscordConfig, SlackConfig, TelegramConfig};
use crate::draft::Draft;
use crate::errors::{CheckIssue, CheckReport};
use crate::normalize::{normalize, split_commas};
use crate::types::ClientKind;

/// Full draft check producing a structured report: the first validation
/// failure as a coded error, plus lint warnings that never block a save
/// unless `strict` is set.
pub fn check(draft: &Draft, file: &str, strict: bool) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = normalize(draft) {
        errors.push(CheckIssue {
            code: e.code().to_string(),
            check: "validation".to_string(),
            message: e.to_string(),
            path: Some(e.path()),
        });
    }

    lint_checks(draft, &mut warnings);

    let pass = errors.is_empty() && (!strict || warnings.is_empty());
    CheckReport {
        file: file.to_string(),
        pass,
        errors,
        warnings,
    }
}

fn lint_checks(draft: &Draft, warnings: &mut Vec<CheckIssue>) {
    // W001: no topics after splitting
    if split_commas(&draft.topics).is_empty() {
        warnings.push(CheckIssue {
            code: "W001".to_string(),
            check: "lint".to_string(),
            message: "no topics listed".to_string(),
            path: Some("$.topics".to_string()),
        });
    }

    // W002: message examples present but empty
    if draft.message_examples.trim() == "[]" {
        warnings.push(CheckIssue {
            code: "W002".to_string(),
            check: "lint".to_string(),
            message: "no message examples".to_string(),
            path: Some("$.messageExamples".to_string()),
        });
    }

    // W003: customized section for a client that is not selected
    let sections = [
        (
            ClientKind::Discord,
            draft.client_config.discord != DiscordConfig::default(),
        ),
        (
            ClientKind::Telegram,
            draft.client_config.telegram != TelegramConfig::default(),
        ),
        (
            ClientKind::Slack,
            draft.client_config.slack != SlackConfig::default(),
        ),
    ];
    for (client, customized) in sections {
        if customized && !draft.clients.contains(&client) {
            warnings.push(CheckIssue {
                code: "W003".to_string(),
                check: "lint".to_string(),
                message: format!("{client} is configured but not selected"),
                path: Some(format!("$.clientConfig.{client}")),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::StyleDraft;
    use crate::types::ModelProvider;

    fn valid_draft() -> Draft {
        Draft {
            name: "Ada".to_string(),
            bio: "Analytical engine operator".to_string(),
            topics: "math".to_string(),
            message_examples: r#"[[{"user": "x"}]]"#.to_string(),
            model_provider: Some(ModelProvider::OpenAi),
            clients: vec![ClientKind::Discord],
            style: StyleDraft {
                all: "be precise".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn clean_draft_passes_strict() {
        let report = check(&valid_draft(), "draft.json", true);
        assert!(report.pass, "unexpected issues: {report:?}");
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn validation_failure_is_coded() {
        let draft = Draft {
            name: String::new(),
            ..valid_draft()
        };
        let report = check(&draft, "draft.json", false);
        assert!(!report.pass);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, "E001");
        assert_eq!(report.errors[0].path.as_deref(), Some("$.name"));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let draft = Draft {
            topics: String::new(),
            message_examples: "[]".to_string(),
            ..valid_draft()
        };
        let lax = check(&draft, "draft.json", false);
        assert!(lax.pass);
        assert_eq!(lax.warnings.len(), 2);

        let strict = check(&draft, "draft.json", true);
        assert!(!strict.pass);
    }

    #[test]
    fn unselected_configured_client_warns() {
        let mut draft = valid_draft();
        draft.client_config.telegram.should_ignore_bot_messages = true;
        let report = check(&draft, "draft.json", false);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == "W003" && w.message.contains("telegram")));
    }

    #[test]
    fn selected_configured_client_does_not_warn() {
        let mut draft = valid_draft();
        draft.client_config.discord.should_ignore_bot_messages = true;
        let report = check(&draft, "draft.json", false);
        assert!(!report.warnings.iter().any(|w| w.code == "W003"));
    }
}
