//! Prompt records for the PromptCraft catalog.
//!
//! Prompts are reusable template texts, optionally containing
//! `{{variable}}` placeholders, addressed to a specific model provider.
//! Unlike tutorials they carry a visibility attribute: private prompts are
//! listable only by their author.

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use promptcraft_common::{RecordId, UserId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static TEMPLATE_VARIABLE: Lazy<Regex> = Lazy::new(|| {
    // Same placeholder shape the original templates use: {{snake_case_name}}
    Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9_]*)\s*\}\}").expect("template variable pattern")
});

/// The model provider a prompt is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// OpenAI models (gpt-*)
    OpenAi,
    /// Google Gemini models
    Gemini,
    /// Anthropic Claude models
    Anthropic,
    /// Locally hosted models (e.g. ollama)
    Local,
}

impl ModelProvider {
    /// Get the wire spelling of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "openai",
            ModelProvider::Gemini => "gemini",
            ModelProvider::Anthropic => "anthropic",
            ModelProvider::Local => "local",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ModelProvider::OpenAi),
            "gemini" => Ok(ModelProvider::Gemini),
            "anthropic" => Ok(ModelProvider::Anthropic),
            "local" => Ok(ModelProvider::Local),
            other => Err(CatalogError::UnknownVariant {
                kind: "provider",
                value: other.to_string(),
            }),
        }
    }
}

/// Access-control attribute of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Listable by anyone
    Public,
    /// Listable only by the author
    Private,
}

impl Visibility {
    /// Get the wire spelling of the visibility
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(CatalogError::UnknownVariant {
                kind: "visibility",
                value: other.to_string(),
            }),
        }
    }
}

/// How a prompt's template is structured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureType {
    /// Unstructured instruction text
    FreeForm,
    /// "You are a ..." persona prompts
    RoleBased,
    /// Step-by-step reasoning scaffolds
    ChainOfThought,
    /// Example/explanation pairs
    FewShot,
}

impl StructureType {
    /// Get the wire spelling of the structure type
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::FreeForm => "free-form",
            StructureType::RoleBased => "role-based",
            StructureType::ChainOfThought => "chain-of-thought",
            StructureType::FewShot => "few-shot",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free-form" => Ok(StructureType::FreeForm),
            "role-based" => Ok(StructureType::RoleBased),
            "chain-of-thought" => Ok(StructureType::ChainOfThought),
            "few-shot" => Ok(StructureType::FewShot),
            other => Err(CatalogError::UnknownVariant {
                kind: "structure type",
                value: other.to_string(),
            }),
        }
    }
}

/// A reusable prompt in the content library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier within the collection
    pub id: RecordId,
    /// Display title
    pub title: String,
    /// Short free-text description
    pub description: String,
    /// Template text, optionally containing `{{variable}}` placeholders
    pub content: String,
    /// Single category label
    pub category: String,
    /// Tag set (insertion order preserved for display)
    pub tags: Vec<String>,
    /// Identifier of the author
    pub author_id: UserId,
    /// Display name of the author
    pub author_name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// The model provider the prompt targets
    pub provider: ModelProvider,
    /// Free-text model identifier (e.g. "gpt-4o")
    pub model: String,
    /// Generation parameters, opaque to the catalog
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
    /// Edit counter, starts at 1 and increments on every update
    pub version: u32,
    /// Access-control attribute
    pub visibility: Visibility,
    /// Optional template structure classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_type: Option<StructureType>,
}

impl Prompt {
    /// Create a new public prompt with a fresh identifier, version 1, and
    /// current timestamps
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<UserId>,
        author_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::generate(),
            title: title.into(),
            description: String::new(),
            content: content.into(),
            category: String::new(),
            tags: Vec::new(),
            author_id: author_id.into(),
            author_name: author_name.into(),
            created_at: now,
            updated_at: now,
            provider: ModelProvider::OpenAi,
            model: String::new(),
            parameters: serde_json::Map::new(),
            version: 1,
            visibility: Visibility::Public,
            structure_type: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the provider and model
    pub fn with_model(mut self, provider: ModelProvider, model: impl Into<String>) -> Self {
        self.provider = provider;
        self.model = model.into();
        self
    }

    /// Set the generation parameters
    pub fn with_parameters(
        mut self,
        parameters: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the structure type
    pub fn with_structure_type(mut self, structure_type: StructureType) -> Self {
        self.structure_type = Some(structure_type);
        self
    }

    /// Whether this prompt may be listed for the given viewer
    ///
    /// Public prompts are visible to everyone; private prompts only to
    /// their author. This is the single source of truth for the access
    /// rule, used by the filter and the operations layer.
    pub fn is_visible_to(&self, viewer: Option<&UserId>) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Private => viewer == Some(&self.author_id),
        }
    }

    /// Whether the template contains any `{{variable}}` placeholders
    pub fn has_variables(&self) -> bool {
        TEMPLATE_VARIABLE.is_match(&self.content)
    }

    /// Distinct placeholder names in the template, first-seen order
    pub fn template_variables(&self) -> Vec<String> {
        let mut seen = indexmap::IndexSet::new();
        for capture in TEMPLATE_VARIABLE.captures_iter(&self.content) {
            seen.insert(capture[1].to_string());
        }
        seen.into_iter().collect()
    }
}

impl CatalogEntry for Prompt {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_builder() {
        let prompt = Prompt::new("Email Writer", "Write to {{recipient}}", "1", "Alex Johnson")
            .with_category("Business")
            .with_model(ModelProvider::OpenAi, "gpt-4o")
            .with_visibility(Visibility::Private)
            .with_structure_type(StructureType::RoleBased);

        assert_eq!(prompt.version, 1);
        assert_eq!(prompt.provider, ModelProvider::OpenAi);
        assert_eq!(prompt.visibility, Visibility::Private);
        assert_eq!(prompt.structure_type, Some(StructureType::RoleBased));
    }

    #[test]
    fn test_visibility_gate() {
        let prompt = Prompt::new("p", "c", "4", "Emma Davis").with_visibility(Visibility::Private);

        assert!(!prompt.is_visible_to(None));
        assert!(!prompt.is_visible_to(Some(&UserId::new("1"))));
        assert!(prompt.is_visible_to(Some(&UserId::new("4"))));

        let public = Prompt::new("p", "c", "4", "Emma Davis");
        assert!(public.is_visible_to(None));
    }

    #[test]
    fn test_template_variables_first_seen_order() {
        let prompt = Prompt::new(
            "p",
            "Write to {{recipient}} about {{subject}} with a {{ tone }} tone, {{recipient}}.",
            "1",
            "Alex Johnson",
        );

        assert!(prompt.has_variables());
        assert_eq!(
            prompt.template_variables(),
            vec!["recipient", "subject", "tone"]
        );
    }

    #[test]
    fn test_plain_content_has_no_variables() {
        let prompt = Prompt::new("p", "No placeholders here.", "1", "Alex Johnson");
        assert!(!prompt.has_variables());
        assert!(prompt.template_variables().is_empty());
    }

    #[test]
    fn test_enum_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&ModelProvider::OpenAi).unwrap(),
            "\"openai\""
        );
        assert_eq!(
            serde_json::to_string(&StructureType::ChainOfThought).unwrap(),
            "\"chain-of-thought\""
        );
        assert_eq!(
            serde_json::to_string(&Visibility::Private).unwrap(),
            "\"private\""
        );
        assert_eq!(
            "chain-of-thought".parse::<StructureType>().unwrap(),
            StructureType::ChainOfThought
        );
    }
}
