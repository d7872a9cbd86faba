//! # PromptCraft Common
//!
//! This crate provides foundational types shared across the PromptCraft
//! ecosystem. It serves as the base dependency for the domain crates,
//! establishing common patterns and abstractions.
//!
//! ## Modules
//!
//! - [`auth`] - The viewer identity abstraction used for visibility gating
//! - [`error`] - Error severity classification shared by domain error types
//! - [`logging`] - Log formatting helpers
//! - [`types`] - Strongly-typed identifier newtypes
//!
//! ## Design Principles
//!
//! - Type safety through newtypes and strong typing
//! - Serialization support for all public types
//! - Structured error handling with severity classification

pub mod auth;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types for convenience
pub use auth::AuthContext;
pub use error::{ErrorSeverity, Severity};
pub use logging::Pretty;
pub use types::{RecordId, UserId};
