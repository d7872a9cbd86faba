//! High-level operations for the catalog
//!
//! [`CatalogService`] is the surface a presentation layer talks to: it
//! fetches a snapshot from the store, applies the pure filters, and runs
//! the submission flows with authentication and ownership checks.

use crate::error::{CatalogError, Result};
use crate::facets::{PromptFacets, TutorialFacets};
use crate::filter::{PromptFilter, TutorialFilter};
use crate::prompts::Prompt;
use crate::store::{CatalogStore, MemoryCatalogStore};
use crate::submission::{PromptDraft, TutorialSubmission};
use crate::tutorials::Tutorial;
use chrono::Utc;
use promptcraft_common::{AuthContext, Pretty, RecordId};
use tracing::debug;

/// High-level service for catalog operations
pub struct CatalogService {
    store: Box<dyn CatalogStore + Send + Sync>,
}

impl CatalogService {
    /// Create a new catalog service with custom storage
    pub fn new(store: Box<dyn CatalogStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Create a catalog service preloaded with the sample catalog
    pub fn with_samples() -> Self {
        Self::new(Box::new(MemoryCatalogStore::with_samples()))
    }

    /// List tutorials matching the filter, in store order
    pub async fn list_tutorials(&self, filter: &TutorialFilter) -> Result<Vec<Tutorial>> {
        let tutorials = self.store.list_tutorials().await?;
        let visible = filter.apply(&tutorials);
        debug!(
            "showing {} of {} tutorials",
            visible.len(),
            tutorials.len()
        );
        Ok(visible)
    }

    /// List prompts matching the filter and visible to the current viewer,
    /// in store order
    ///
    /// The viewer on the filter is always taken from `auth`, so a caller
    /// cannot widen the access rule by pre-setting it.
    pub async fn list_prompts(
        &self,
        filter: &PromptFilter,
        auth: &AuthContext,
    ) -> Result<Vec<Prompt>> {
        let mut filter = filter.clone();
        filter.viewer = auth.current_user().cloned();
        debug!("prompt criteria:\n{}", Pretty(&filter));

        let prompts = self.store.list_prompts().await?;
        let visible = filter.apply(&prompts);
        debug!("showing {} of {} prompts", visible.len(), prompts.len());
        Ok(visible)
    }

    /// Get a tutorial by id
    pub async fn get_tutorial(&self, id: &RecordId) -> Result<Option<Tutorial>> {
        self.store.get_tutorial(id).await
    }

    /// Get a prompt by id, respecting the visibility rule
    ///
    /// A private prompt fetched by anyone but its author comes back as
    /// `None`, indistinguishable from a missing record.
    pub async fn get_prompt(&self, id: &RecordId, auth: &AuthContext) -> Result<Option<Prompt>> {
        Ok(self
            .store
            .get_prompt(id)
            .await?
            .filter(|prompt| prompt.is_visible_to(auth.current_user())))
    }

    /// Submit a tutorial for review
    ///
    /// Requires a signed-in user. The stored tutorial gets a fresh id,
    /// current timestamps, and starts unapproved; it is published once a
    /// moderator approves it.
    pub async fn submit_tutorial(
        &mut self,
        submission: TutorialSubmission,
        auth: &AuthContext,
    ) -> Result<Tutorial> {
        let author = auth
            .current_user()
            .cloned()
            .ok_or(CatalogError::Unauthenticated)?;
        let author_name = auth
            .attribution_name()
            .ok_or(CatalogError::Unauthenticated)?;

        let issues = submission.validate();
        if issues.iter().any(|issue| issue.level.is_error()) {
            return Err(CatalogError::Invalid(issues));
        }
        // validate() guarantees the difficulty is present
        let difficulty = submission
            .difficulty
            .ok_or_else(|| CatalogError::Invalid(Vec::new()))?;

        let tags = submission.normalized_tags();
        let mut tutorial =
            Tutorial::new(submission.title, submission.content, author, author_name)
                .with_description(submission.description)
                .with_category(submission.category)
                .with_difficulty(difficulty)
                .with_tags(tags);
        if let Some(url) = submission.github_url {
            tutorial = tutorial.with_github_url(url);
        }

        debug!("submitting tutorial {} for review", tutorial.id);
        self.store.insert_tutorial(tutorial).await
    }

    /// Create a new prompt
    ///
    /// Requires a signed-in user. The stored prompt gets a fresh id,
    /// current timestamps, and version 1.
    pub async fn create_prompt(
        &mut self,
        draft: PromptDraft,
        auth: &AuthContext,
    ) -> Result<Prompt> {
        let author = auth
            .current_user()
            .cloned()
            .ok_or(CatalogError::Unauthenticated)?;
        let author_name = auth
            .attribution_name()
            .ok_or(CatalogError::Unauthenticated)?;

        let issues = draft.validate();
        if issues.iter().any(|issue| issue.level.is_error()) {
            return Err(CatalogError::Invalid(issues));
        }

        let tags = draft.normalized_tags();
        let mut prompt =
            Prompt::new(draft.title, draft.content, author, author_name)
                .with_description(draft.description)
                .with_category(draft.category)
                .with_model(draft.provider, draft.model)
                .with_parameters(draft.parameters)
                .with_visibility(draft.visibility)
                .with_tags(tags);
        prompt.structure_type = draft.structure_type;

        debug!("creating prompt {}", prompt.id);
        self.store.insert_prompt(prompt).await
    }

    /// Update an existing prompt
    ///
    /// Requires the signed-in author; the version counter increments and
    /// `updated_at` advances, while `created_at` and provenance stay put.
    pub async fn update_prompt(
        &mut self,
        id: &RecordId,
        draft: PromptDraft,
        auth: &AuthContext,
    ) -> Result<Prompt> {
        let user = auth
            .current_user()
            .ok_or(CatalogError::Unauthenticated)?;

        let existing = self
            .store
            .get_prompt(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound { id: id.clone() })?;
        if &existing.author_id != user {
            return Err(CatalogError::NotOwner);
        }

        let issues = draft.validate();
        if issues.iter().any(|issue| issue.level.is_error()) {
            return Err(CatalogError::Invalid(issues));
        }

        let tags = draft.normalized_tags();
        let updated = Prompt {
            title: draft.title,
            description: draft.description,
            content: draft.content,
            category: draft.category,
            tags,
            provider: draft.provider,
            model: draft.model,
            parameters: draft.parameters,
            visibility: draft.visibility,
            structure_type: draft.structure_type,
            version: existing.version + 1,
            updated_at: Utc::now(),
            ..existing
        };

        debug!("updating prompt {} to version {}", id, updated.version);
        self.store.update_prompt(updated).await
    }

    /// Filter options for the tutorial catalog page
    pub async fn tutorial_facets(&self) -> Result<TutorialFacets> {
        let tutorials = self.store.list_tutorials().await?;
        Ok(TutorialFacets::from_tutorials(&tutorials))
    }

    /// Filter options for the prompt catalog page
    ///
    /// Options are enumerated over the full snapshot, matching the page
    /// behavior: the option lists reflect what is loaded, not what the
    /// current viewer may open.
    pub async fn prompt_facets(&self) -> Result<PromptFacets> {
        let prompts = self.store.list_prompts().await?;
        Ok(PromptFacets::from_prompts(&prompts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{ModelProvider, Visibility};
    use crate::tutorials::Difficulty;

    fn submission() -> TutorialSubmission {
        TutorialSubmission {
            title: "Prompt Chaining Basics".to_string(),
            description: "Link prompts together".to_string(),
            content: "# Chaining\n\n...".to_string(),
            category: "Chain-of-Thought".to_string(),
            difficulty: Some(Difficulty::Beginner),
            github_url: None,
            tags: vec!["chaining".to_string()],
        }
    }

    fn draft(title: &str) -> PromptDraft {
        PromptDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            content: "Explain {{topic}}".to_string(),
            category: "Education".to_string(),
            provider: ModelProvider::Anthropic,
            model: "claude-3".to_string(),
            ..PromptDraft::default()
        }
    }

    #[tokio::test]
    async fn test_submit_requires_sign_in() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let err = service
            .submit_tutorial(submission(), &AuthContext::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_submit_starts_unapproved() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let tutorial = service
            .submit_tutorial(submission(), &AuthContext::signed_in("7"))
            .await
            .unwrap();

        assert!(!tutorial.is_approved);
        assert_eq!(tutorial.author_id.as_str(), "7");
        // unapproved submissions still list (moderation is not enforced here)
        let listed = service.list_tutorials(&TutorialFilter::new()).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_submission_attributed_to_display_name() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let auth = AuthContext::signed_in_as("7", "Priya Natarajan");

        let tutorial = service.submit_tutorial(submission(), &auth).await.unwrap();
        assert_eq!(tutorial.author_id.as_str(), "7");
        assert_eq!(tutorial.author_name, "Priya Natarajan");

        let prompt = service.create_prompt(draft("attributed"), &auth).await.unwrap();
        assert_eq!(prompt.author_name, "Priya Natarajan");

        // without a display name the id stands in
        let unnamed = service
            .create_prompt(draft("unnamed"), &AuthContext::signed_in("8"))
            .await
            .unwrap();
        assert_eq!(unnamed.author_name, "8");
    }

    #[tokio::test]
    async fn test_submit_rejects_incomplete_form() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let incomplete = TutorialSubmission {
            title: String::new(),
            ..submission()
        };
        let err = service
            .submit_tutorial(incomplete, &AuthContext::signed_in("7"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_create_and_update_prompt_bumps_version() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let auth = AuthContext::signed_in("2");

        let created = service.create_prompt(draft("v1"), &auth).await.unwrap();
        assert_eq!(created.version, 1);

        let updated = service
            .update_prompt(&created.id, draft("v2"), &auth)
            .await
            .unwrap();
        assert_eq!(updated.version, 2);
        assert_eq!(updated.title, "v2");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.author_id, created.author_id);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_rejected() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let created = service
            .create_prompt(draft("theirs"), &AuthContext::signed_in("2"))
            .await
            .unwrap();

        let err = service
            .update_prompt(&created.id, draft("mine now"), &AuthContext::signed_in("3"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotOwner));
    }

    #[tokio::test]
    async fn test_get_prompt_hides_private_from_others() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let mut secret = draft("secret");
        secret.visibility = Visibility::Private;
        let created = service
            .create_prompt(secret, &AuthContext::signed_in("2"))
            .await
            .unwrap();

        assert!(service
            .get_prompt(&created.id, &AuthContext::signed_in("2"))
            .await
            .unwrap()
            .is_some());
        assert!(service
            .get_prompt(&created.id, &AuthContext::signed_in("3"))
            .await
            .unwrap()
            .is_none());
        assert!(service
            .get_prompt(&created.id, &AuthContext::anonymous())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_prompts_uses_auth_not_caller_viewer() {
        let mut service = CatalogService::new(Box::new(MemoryCatalogStore::new()));
        let mut secret = draft("secret");
        secret.visibility = Visibility::Private;
        service
            .create_prompt(secret, &AuthContext::signed_in("2"))
            .await
            .unwrap();

        // a filter pre-set with the author's viewer must not leak to others
        let forged = PromptFilter::new().with_viewer("2");
        let listed = service
            .list_prompts(&forged, &AuthContext::signed_in("3"))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
