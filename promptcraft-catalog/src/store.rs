//! Storage abstraction for the catalog.
//!
//! Pages fetch a whole-collection snapshot once and filter it in memory;
//! the store is the only asynchronous boundary. Production code swaps in a
//! backend-driven implementation without touching the filter.

use crate::error::{CatalogError, Result};
use crate::prompts::Prompt;
use crate::tutorials::Tutorial;
use async_trait::async_trait;
use promptcraft_common::RecordId;

/// Storage abstraction supplying catalog record collections
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List all tutorials in insertion order
    async fn list_tutorials(&self) -> Result<Vec<Tutorial>>;

    /// List all prompts in insertion order
    async fn list_prompts(&self) -> Result<Vec<Prompt>>;

    /// Get a tutorial by id
    async fn get_tutorial(&self, id: &RecordId) -> Result<Option<Tutorial>> {
        Ok(self
            .list_tutorials()
            .await?
            .into_iter()
            .find(|tutorial| &tutorial.id == id))
    }

    /// Get a prompt by id
    async fn get_prompt(&self, id: &RecordId) -> Result<Option<Prompt>> {
        Ok(self
            .list_prompts()
            .await?
            .into_iter()
            .find(|prompt| &prompt.id == id))
    }

    /// Insert a new tutorial; the id must not already exist
    async fn insert_tutorial(&mut self, tutorial: Tutorial) -> Result<Tutorial>;

    /// Insert a new prompt; the id must not already exist
    async fn insert_prompt(&mut self, prompt: Prompt) -> Result<Prompt>;

    /// Replace an existing prompt, matched by id
    async fn update_prompt(&mut self, prompt: Prompt) -> Result<Prompt>;

    /// Total number of tutorials
    async fn tutorial_count(&self) -> Result<usize> {
        Ok(self.list_tutorials().await?.len())
    }

    /// Total number of prompts
    async fn prompt_count(&self) -> Result<usize> {
        Ok(self.list_prompts().await?.len())
    }
}

/// In-memory catalog store
///
/// The default store: collections live in insertion order and are lost
/// when the application exits. Lookups are linear, which is fine at
/// catalog-page scale.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tutorials: Vec<Tutorial>,
    prompts: Vec<Prompt>,
}

impl MemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the sample catalog
    pub fn with_samples() -> Self {
        Self {
            tutorials: crate::fixtures::sample_tutorials(),
            prompts: crate::fixtures::sample_prompts(),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_tutorials(&self) -> Result<Vec<Tutorial>> {
        Ok(self.tutorials.clone())
    }

    async fn list_prompts(&self) -> Result<Vec<Prompt>> {
        Ok(self.prompts.clone())
    }

    async fn insert_tutorial(&mut self, tutorial: Tutorial) -> Result<Tutorial> {
        if self.tutorials.iter().any(|t| t.id == tutorial.id) {
            return Err(CatalogError::DuplicateId {
                id: tutorial.id.clone(),
            });
        }
        self.tutorials.push(tutorial.clone());
        Ok(tutorial)
    }

    async fn insert_prompt(&mut self, prompt: Prompt) -> Result<Prompt> {
        if self.prompts.iter().any(|p| p.id == prompt.id) {
            return Err(CatalogError::DuplicateId {
                id: prompt.id.clone(),
            });
        }
        self.prompts.push(prompt.clone());
        Ok(prompt)
    }

    async fn update_prompt(&mut self, prompt: Prompt) -> Result<Prompt> {
        match self.prompts.iter_mut().find(|p| p.id == prompt.id) {
            Some(existing) => {
                *existing = prompt.clone();
                Ok(prompt)
            }
            None => Err(CatalogError::NotFound {
                id: prompt.id.clone(),
            }),
        }
    }
}
