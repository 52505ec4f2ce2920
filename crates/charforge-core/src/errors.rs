/// Why a draft failed normalization. Rules apply in order; the first
/// failure wins, so a draft maps to at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequiredField(&'static str),
    #[error("invalid message examples JSON format")]
    InvalidMessageExamplesFormat,
    #[error("at least one style guideline is required")]
    MissingStyleGuidelines,
    #[error("at least one client must be selected")]
    MissingClientSelection,
}

impl ValidationError {
    /// Stable issue code for structured reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(_) => "E001",
            Self::InvalidMessageExamplesFormat => "E002",
            Self::MissingStyleGuidelines => "E003",
            Self::MissingClientSelection => "E004",
        }
    }

    /// Location of the offending field, as a `$`-path.
    pub fn path(&self) -> String {
        match self {
            Self::MissingRequiredField(field) => format!("$.{field}"),
            Self::InvalidMessageExamplesFormat => "$.messageExamples".to_string(),
            Self::MissingStyleGuidelines => "$.style".to_string(),
            Self::MissingClientSelection => "$.clients".to_string(),
        }
    }
}

/// Structured check result for `chf check --json`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckReport {
    pub file: String,
    pub pass: bool,
    pub errors: Vec<CheckIssue>,
    pub warnings: Vec<CheckIssue>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckIssue {
    pub code: String,
    pub check: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
