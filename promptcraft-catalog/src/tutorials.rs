//! Tutorial records for the PromptCraft catalog.

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use promptcraft_common::{RecordId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of a tutorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for newcomers to prompt engineering
    Beginner,
    /// Assumes familiarity with basic prompting techniques
    Intermediate,
    /// Covers specialized or research-grade techniques
    Advanced,
}

impl Difficulty {
    /// Get the wire spelling of the difficulty level
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(CatalogError::UnknownVariant {
                kind: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

/// A tutorial in the content library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    /// Unique identifier within the collection
    pub id: RecordId,
    /// Display title
    pub title: String,
    /// Short free-text description
    pub description: String,
    /// Full markdown body
    pub content: String,
    /// Single category label
    pub category: String,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Optional link to companion source code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Identifier of the author
    pub author_id: UserId,
    /// Display name of the author
    pub author_name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Moderation flag. Submissions start unapproved; listing does not
    /// currently consult this flag (see DESIGN.md).
    pub is_approved: bool,
    /// Tag set (insertion order preserved for display)
    pub tags: Vec<String>,
}

impl Tutorial {
    /// Create a new tutorial with a fresh identifier and current timestamps
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
            difficulty: Difficulty::Beginner,
            github_url: None,
            author_id: author_id.into(),
            author_name: author_name.into(),
            created_at: now,
            updated_at: now,
            is_approved: false,
            tags: Vec::new(),
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

    /// Set the difficulty level
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the companion source link
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl CatalogEntry for Tutorial {
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
