//! Scribe Core — offline-posting decision logic.
//!
//! This crate is the canonical source of truth for the auto-upload policy
//! shared by the Scribe mobile clients. A client feeds the policy a
//! read-only snapshot of a post whose upload failed and acts on the
//! returned decision; the policy itself performs no IO, reads no clocks,
//! and owns no state.
//!
//! # Module Map
//!
//! | Module | Owns |
//! |--------|------|
//! | [`constants`] | Canonical policy values (attempt ceiling, blocked statuses) |
//! | [`errors`] | Error types for snapshot/wire parsing |
//! | [`post`] | Post snapshot model (status, kind, sync flags) |
//! | [`auto_upload`] | The policy component and its decision types |
//!
//! # Consumers
//!
//! Two subsystems consume the policy, neither of which lives here: the
//! post list UI (Cancel affordance, attempt badges) and the upload
//! scheduler (which action to enqueue). Both act on the same decision for
//! the same snapshot, so decisions must be deterministic.

/// Canonical policy constants shared with the mobile clients.
pub mod constants;

/// Error types for scribe-core operations.
pub mod errors;

/// Post snapshot model — status, kind, and sync flags.
pub mod post;

/// Auto-upload policy — pure decisions for failed posts.
pub mod auto_upload;
