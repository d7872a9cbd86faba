//! # PromptCraft Catalog Domain Crate
//!
//! This crate provides the content-catalog core of PromptCraft: tutorials
//! and reusable AI prompts with search, faceted filtering, submission
//! validation, and visibility-based access control.
//!
//! ## Features
//!
//! - **Records**: [`Tutorial`] and [`Prompt`] entities with typed facets
//! - **Filtering**: pure, order-preserving criteria applied over immutable
//!   snapshots ([`TutorialFilter`], [`PromptFilter`])
//! - **Facet enumeration**: distinct categories, tags, providers, and
//!   structure types for populating filter option lists
//! - **Storage**: the [`CatalogStore`] abstraction with an in-memory
//!   default, so production code can swap in a real backend without
//!   touching the filter
//! - **Operations**: the high-level [`CatalogService`] used by a
//!   presentation layer

#![warn(missing_docs)]

// Declare modules
mod entry;
mod error;
mod facets;
mod filter;
pub mod fixtures;
mod operations;
mod prompts;
mod store;
mod submission;
mod tutorials;

// Re-export record types
pub use prompts::{ModelProvider, Prompt, StructureType, Visibility};
pub use tutorials::{Difficulty, Tutorial};

// Re-export the shared accessor seam
pub use entry::CatalogEntry;

// Re-export filter types
pub use filter::{Facet, PromptFilter, TutorialFilter};

// Re-export facet enumeration
pub use facets::{
    available_categories, available_providers, available_structure_types, available_tags,
    PromptFacets, TutorialFacets,
};

// Re-export storage types
pub use store::{CatalogStore, MemoryCatalogStore};

// Re-export submission types
pub use submission::{PromptDraft, TutorialSubmission, ValidationIssue, ValidationLevel};

// Re-export the operations layer
pub use operations::CatalogService;

// Re-export error types
pub use error::{CatalogError, Result};
