//! Submission payloads and validation.
//!
//! Tutorials enter the catalog through a community submission form and
//! prompts through a create/edit form. Both payloads validate before
//! anything reaches the store; the checks mirror the required fields of
//! the original forms.

use crate::prompts::{ModelProvider, StructureType, Visibility};
use crate::tutorials::Difficulty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationLevel {
    /// Must be fixed before the payload can be submitted
    Error,
    /// Should be addressed but doesn't block submission
    Warning,
}

impl ValidationLevel {
    /// Check if this is an error level
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationLevel::Error)
    }
}

/// A problem found while validating a submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity of the issue
    pub level: ValidationLevel,
    /// The form field the issue concerns
    pub field: String,
    /// Description of the issue
    pub message: String,
}

impl ValidationIssue {
    /// Create an error-level issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a warning-level issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

fn require(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::error(
            field,
            format!("{} is required", field),
        ));
    }
}

/// Normalize a tag list the way the submission form does: trim each tag,
/// drop blanks, collapse duplicates, keep first-seen order.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

/// Payload of the tutorial submission form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorialSubmission {
    /// Display title
    pub title: String,
    /// Short free-text description
    pub description: String,
    /// Full markdown body
    pub content: String,
    /// Single category label
    pub category: String,
    /// Difficulty level; `None` when the form selection is missing
    pub difficulty: Option<Difficulty>,
    /// Optional link to companion source code
    pub github_url: Option<String>,
    /// Tag set as entered
    pub tags: Vec<String>,
}

impl TutorialSubmission {
    /// Validate the payload and return any issues found
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require(&mut issues, "description", &self.description);
        require(&mut issues, "content", &self.content);
        require(&mut issues, "category", &self.category);
        if self.difficulty.is_none() {
            issues.push(ValidationIssue::error("difficulty", "difficulty is required"));
        }
        issues
    }

    /// Check if the payload has no error-level issues
    pub fn is_valid(&self) -> bool {
        !self.validate().iter().any(|issue| issue.level.is_error())
    }

    /// The tag set after trimming, de-blanking, and de-duplication
    pub fn normalized_tags(&self) -> Vec<String> {
        normalize_tags(&self.tags)
    }
}

/// Payload of the prompt create/edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDraft {
    /// Display title
    pub title: String,
    /// Short free-text description
    pub description: String,
    /// Template text
    pub content: String,
    /// Single category label
    pub category: String,
    /// The model provider the prompt targets
    pub provider: ModelProvider,
    /// Free-text model identifier
    pub model: String,
    /// Generation parameters, opaque to the catalog
    pub parameters: Map<String, Value>,
    /// Access-control attribute
    pub visibility: Visibility,
    /// Optional template structure classification
    pub structure_type: Option<StructureType>,
    /// Tag set as entered
    pub tags: Vec<String>,
}

impl Default for PromptDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            content: String::new(),
            category: String::new(),
            provider: ModelProvider::OpenAi,
            model: String::new(),
            parameters: Map::new(),
            visibility: Visibility::Public,
            structure_type: None,
            tags: Vec::new(),
        }
    }
}

impl PromptDraft {
    /// Validate the payload and return any issues found
    ///
    /// A template without `{{variable}}` placeholders is flagged as a
    /// warning only; fixed-text prompts are allowed.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "title", &self.title);
        require(&mut issues, "description", &self.description);
        require(&mut issues, "content", &self.content);
        require(&mut issues, "category", &self.category);
        require(&mut issues, "model", &self.model);
        if !self.content.trim().is_empty() && !self.content.contains("{{") {
            issues.push(ValidationIssue::warning(
                "content",
                "template has no {{variable}} placeholders",
            ));
        }
        issues
    }

    /// Check if the payload has no error-level issues
    pub fn is_valid(&self) -> bool {
        !self.validate().iter().any(|issue| issue.level.is_error())
    }

    /// The tag set after trimming, de-blanking, and de-duplication
    pub fn normalized_tags(&self) -> Vec<String> {
        normalize_tags(&self.tags)
    }
}
