//! Catalog filtering functionality
//!
//! This module provides the pure predicates used by the catalog pages to
//! compute the visible subset of a record collection. All criteria for one
//! evaluation live in a single immutable filter value; applying a filter
//! never mutates the input and preserves the original relative order.

use crate::entry::CatalogEntry;
use crate::prompts::{ModelProvider, Prompt, StructureType, Visibility};
use crate::tutorials::{Difficulty, Tutorial};
use promptcraft_common::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One categorical filter dimension
///
/// `Any` is the "all" sentinel meaning no constraint. `Unrecognized`
/// captures a non-"all" selection string that named no known value; it
/// matches nothing, so malformed criteria degrade to an empty result
/// instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet<T> {
    /// No constraint on this dimension
    Any,
    /// Exact match against this value
    Is(T),
    /// A selection that named no known value; admits nothing
    Unrecognized,
}

// Manual impl: the derive would needlessly require `T: Default`.
impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::Any
    }
}

impl<T: FromStr> Facet<T> {
    /// Parse a selection string from the presentation layer
    ///
    /// `"all"` means no constraint; anything else is parsed as a value of
    /// the facet's type, falling back to [`Facet::Unrecognized`] rather
    /// than failing.
    pub fn parse(selection: &str) -> Self {
        if selection == "all" {
            Facet::Any
        } else {
            selection
                .parse()
                .map(Facet::Is)
                .unwrap_or(Facet::Unrecognized)
        }
    }
}

impl<T: PartialEq> Facet<T> {
    /// Whether a record's field satisfies this selection
    fn admits(&self, value: &T) -> bool {
        match self {
            Facet::Any => true,
            Facet::Is(want) => want == value,
            Facet::Unrecognized => false,
        }
    }

    /// Whether a record's optional field satisfies this selection
    ///
    /// An absent field passes `Any` and fails any specific selection.
    fn admits_optional(&self, value: Option<&T>) -> bool {
        match self {
            Facet::Any => true,
            Facet::Is(want) => value == Some(want),
            Facet::Unrecognized => false,
        }
    }
}

/// Case-insensitive substring match over title, description, and author
/// name. An empty query matches everything.
fn matches_query<E: CatalogEntry>(entry: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    entry.title().to_lowercase().contains(&query)
        || entry.description().to_lowercase().contains(&query)
        || entry.author_name().to_lowercase().contains(&query)
}

/// At-least-one-of tag intersection. An empty selection matches everything.
fn matches_tags<E: CatalogEntry>(entry: &E, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|tag| entry.tags().contains(tag))
}

/// Filter criteria for the tutorial catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorialFilter {
    /// Case-insensitive substring to match against title, description, or
    /// author name (empty = no constraint)
    pub search_query: String,
    /// Category selection (exact, case-sensitive)
    pub category: Facet<String>,
    /// Difficulty selection
    pub difficulty: Facet<Difficulty>,
    /// Selected tags; a tutorial matches if it carries at least one
    pub tags: Vec<String>,
}

impl TutorialFilter {
    /// Create a new empty filter (matches every tutorial)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Constrain to a specific category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Facet::Is(category.into());
        self
    }

    /// Constrain to a specific difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Facet::Is(difficulty);
        self
    }

    /// Set the selected tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Check if a tutorial matches the filter criteria
    pub fn matches(&self, tutorial: &Tutorial) -> bool {
        matches_query(tutorial, &self.search_query)
            && self.category.admits(&tutorial.category)
            && self.difficulty.admits(&tutorial.difficulty)
            && matches_tags(tutorial, &self.tags)
    }

    /// Apply the filter to a collection, preserving relative order
    pub fn apply(&self, tutorials: &[Tutorial]) -> Vec<Tutorial> {
        tutorials
            .iter()
            .filter(|tutorial| self.matches(tutorial))
            .cloned()
            .collect()
    }

    /// Check if the filter is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.category == Facet::Any
            && self.difficulty == Facet::Any
            && self.tags.is_empty()
    }
}

/// Filter criteria for the prompt catalog
///
/// In addition to the search and facet clauses, prompt filtering always
/// enforces the access rule: a private prompt is only ever returned to its
/// author, regardless of any other criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptFilter {
    /// Case-insensitive substring to match against title, description, or
    /// author name (empty = no constraint)
    pub search_query: String,
    /// Category selection (exact, case-sensitive)
    pub category: Facet<String>,
    /// Provider selection
    pub provider: Facet<ModelProvider>,
    /// Visibility selection
    pub visibility: Facet<Visibility>,
    /// Structure type selection; prompts without a structure type fail any
    /// specific selection
    pub structure_type: Facet<StructureType>,
    /// Selected tags; a prompt matches if it carries at least one
    pub tags: Vec<String>,
    /// Identity of the current viewer, used for the private-visibility gate
    pub viewer: Option<UserId>,
}

impl PromptFilter {
    /// Create a new empty filter (matches every publicly visible prompt)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Constrain to a specific category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Facet::Is(category.into());
        self
    }

    /// Constrain to a specific provider
    pub fn with_provider(mut self, provider: ModelProvider) -> Self {
        self.provider = Facet::Is(provider);
        self
    }

    /// Constrain to a specific visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Facet::Is(visibility);
        self
    }

    /// Constrain to a specific structure type
    pub fn with_structure_type(mut self, structure_type: StructureType) -> Self {
        self.structure_type = Facet::Is(structure_type);
        self
    }

    /// Set the selected tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the viewing identity for the private-visibility gate
    pub fn with_viewer(mut self, viewer: impl Into<UserId>) -> Self {
        self.viewer = Some(viewer.into());
        self
    }

    /// Check if a prompt matches the filter criteria and is visible to the
    /// viewer
    pub fn matches(&self, prompt: &Prompt) -> bool {
        matches_query(prompt, &self.search_query)
            && self.category.admits(&prompt.category)
            && self.provider.admits(&prompt.provider)
            && self.visibility.admits(&prompt.visibility)
            && self
                .structure_type
                .admits_optional(prompt.structure_type.as_ref())
            && matches_tags(prompt, &self.tags)
            && prompt.is_visible_to(self.viewer.as_ref())
    }

    /// Apply the filter to a collection, preserving relative order
    pub fn apply(&self, prompts: &[Prompt]) -> Vec<Prompt> {
        prompts
            .iter()
            .filter(|prompt| self.matches(prompt))
            .cloned()
            .collect()
    }

    /// Check if the filter applies no criteria beyond the access rule
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.category == Facet::Any
            && self.provider == Facet::Any
            && self.visibility == Facet::Any
            && self.structure_type == Facet::Any
            && self.tags.is_empty()
    }
}
