//! Auto-upload policy implementation — deterministic retry decisions.
//!
//! The policy is pure: identical snapshots produce identical decisions.
//! No IO, no clocks, no global state.

use super::types::{AttemptState, AutoUploadAction};
use crate::constants::{DISALLOWED_STATUSES, MAX_AUTO_UPLOAD_ATTEMPTS};
use crate::post::{PostKind, PostSnapshot, PostStatus};

/// Decides what should happen to a post when it is auto-uploaded.
///
/// Configuration is injected at construction; [`AutoUploadPolicy::default`]
/// uses the canonical values from [`crate::constants`].
#[derive(Debug, Clone)]
pub struct AutoUploadPolicy {
    disallowed_statuses: Vec<PostStatus>,
    max_attempts: u32,
}

impl Default for AutoUploadPolicy {
    fn default() -> Self {
        Self::new(DISALLOWED_STATUSES.to_vec(), MAX_AUTO_UPLOAD_ATTEMPTS)
    }
}

impl AutoUploadPolicy {
    /// Build a policy with an explicit blocked-status list and attempt
    /// ceiling.
    pub fn new(disallowed_statuses: Vec<PostStatus>, max_attempts: u32) -> Self {
        Self {
            disallowed_statuses,
            max_attempts,
        }
    }

    /// Returns the action to execute when we retry a failed upload.
    ///
    /// # Contract
    ///
    /// - **Deterministic**: identical snapshots always produce identical
    ///   actions.
    /// - **Total**: every snapshot maps to a defined action; there are no
    ///   failure paths.
    /// - Posts that did not fail, pages, posts in a disallowed status, and
    ///   posts at or beyond the attempt ceiling always map to
    ///   [`AutoUploadAction::Nothing`].
    ///
    /// Users confirm automatic uploads by pressing Publish or Update in
    /// the editor. Without that confirmation (for example, the editor
    /// crashed) we upload a revision instead of the post itself — and only
    /// for remotely hosted posts, because an autosave call on a
    /// self-hosted site ends up publishing the post.
    pub fn decide(&self, post: &PostSnapshot) -> AutoUploadAction {
        if !post.upload_failed
            || self.disallowed_statuses.contains(&post.status)
            || post.kind == PostKind::Page
            || post.attempts >= self.max_attempts
        {
            return AutoUploadAction::Nothing;
        }

        if post.local_draft || post.confirmed_auto_upload {
            return AutoUploadAction::Upload;
        }

        if post.hosted_remotely {
            AutoUploadAction::AutoSave
        } else {
            AutoUploadAction::Nothing
        }
    }

    /// Returns true if the post will be automatically uploaded later and
    /// that upload can be canceled.
    ///
    /// Drives the Cancel button in the post list. Local drafts are always
    /// automatically uploaded and cannot be canceled.
    pub fn can_cancel(&self, post: &PostSnapshot) -> bool {
        self.decide(post) == AutoUploadAction::Upload && !post.local_draft
    }

    /// Temporary predicate backing the old manual Retry flow.
    ///
    /// True only for failed posts whose status blocks auto-upload — the
    /// narrow complement of [`Self::decide`], not its opposite. Slated for
    /// removal once the manual Retry flow is gone.
    pub fn can_retry(&self, post: &PostSnapshot) -> bool {
        post.upload_failed && self.disallowed_statuses.contains(&post.status)
    }

    /// Classifies the post against the attempt ceiling.
    pub fn attempt_state(&self, post: &PostSnapshot) -> AttemptState {
        if post.attempts >= self.max_attempts {
            AttemptState::ReachedLimit
        } else if post.attempts > 0 {
            AttemptState::Attempted
        } else {
            AttemptState::NotAttempted
        }
    }
}
