//! Viewer identity for visibility gating.
//!
//! This module provides the single source of truth for "who is looking at
//! the catalog". The real authentication flow (sessions, sign-in dialogs)
//! lives in the surrounding application; the catalog only ever needs to
//! know the current user's identifier, if any.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// The identity of the current viewer, as supplied by the auth provider
///
/// An anonymous context sees only public content. A signed-in context
/// additionally sees private records it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// The signed-in user, or `None` for anonymous viewers
    pub current_user: Option<UserId>,
    /// The signed-in user's display name, when the auth provider supplies
    /// one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AuthContext {
    /// Create an anonymous context
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a context for a signed-in user without a display name
    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self {
            current_user: Some(user.into()),
            display_name: None,
        }
    }

    /// Create a context for a signed-in user with a display name
    pub fn signed_in_as(user: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            current_user: Some(user.into()),
            display_name: Some(name.into()),
        }
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// The current user's identifier, if signed in
    pub fn current_user(&self) -> Option<&UserId> {
        self.current_user.as_ref()
    }

    /// The name to attribute the current user's content to
    ///
    /// Falls back to the identifier when the auth provider supplied no
    /// display name, so attribution is always possible for a signed-in
    /// user.
    pub fn attribution_name(&self) -> Option<String> {
        match (&self.display_name, &self.current_user) {
            (Some(name), _) => Some(name.clone()),
            (None, Some(user)) => Some(user.to_string()),
            (None, None) => None,
        }
    }
}

impl From<UserId> for AuthContext {
    fn from(user: UserId) -> Self {
        Self::signed_in(user)
    }
}
