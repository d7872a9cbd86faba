//! Facet enumeration for populating filter option lists.
//!
//! Given a record collection, these helpers produce the distinct values
//! seen for each filter dimension. Duplicates collapse by exact string
//! equality and results come back in first-seen order, so the output is
//! deterministic for a fixed input.

use crate::entry::CatalogEntry;
use crate::prompts::{ModelProvider, Prompt, StructureType};
use crate::tutorials::Tutorial;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Distinct category values across a collection, first-seen order
pub fn available_categories<E: CatalogEntry>(entries: &[E]) -> Vec<String> {
    let mut seen = IndexSet::new();
    for entry in entries {
        seen.insert(entry.category().to_string());
    }
    seen.into_iter().collect()
}

/// Distinct tags across a collection, first-seen order
pub fn available_tags<E: CatalogEntry>(entries: &[E]) -> Vec<String> {
    let mut seen = IndexSet::new();
    for entry in entries {
        for tag in entry.tags() {
            seen.insert(tag.clone());
        }
    }
    seen.into_iter().collect()
}

/// Distinct providers across a prompt collection, first-seen order
pub fn available_providers(prompts: &[Prompt]) -> Vec<ModelProvider> {
    let mut seen = IndexSet::new();
    for prompt in prompts {
        seen.insert(prompt.provider);
    }
    seen.into_iter().collect()
}

/// Distinct structure types across a prompt collection, first-seen order,
/// skipping prompts without one
pub fn available_structure_types(prompts: &[Prompt]) -> Vec<StructureType> {
    let mut seen = IndexSet::new();
    for prompt in prompts {
        if let Some(structure_type) = prompt.structure_type {
            seen.insert(structure_type);
        }
    }
    seen.into_iter().collect()
}

/// Filter options for the tutorial catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialFacets {
    /// Distinct categories, first-seen order
    pub categories: Vec<String>,
    /// Distinct tags, first-seen order
    pub tags: Vec<String>,
}

impl TutorialFacets {
    /// Enumerate the options present in a tutorial collection
    pub fn from_tutorials(tutorials: &[Tutorial]) -> Self {
        Self {
            categories: available_categories(tutorials),
            tags: available_tags(tutorials),
        }
    }
}

/// Filter options for the prompt catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFacets {
    /// Distinct categories, first-seen order
    pub categories: Vec<String>,
    /// Distinct tags, first-seen order
    pub tags: Vec<String>,
    /// Distinct providers, first-seen order
    pub providers: Vec<ModelProvider>,
    /// Distinct structure types, first-seen order
    pub structure_types: Vec<StructureType>,
}

impl PromptFacets {
    /// Enumerate the options present in a prompt collection
    pub fn from_prompts(prompts: &[Prompt]) -> Self {
        Self {
            categories: available_categories(prompts),
            tags: available_tags(prompts),
            providers: available_providers(prompts),
            structure_types: available_structure_types(prompts),
        }
    }
}
