//! Auto-upload policy — pure decisions for failed posts.
//!
//! The policy core decides whether a failed post should be re-uploaded,
//! autosaved as a revision, or left alone, without IO, clocks, or global
//! state. The post list UI and the upload scheduler both consume
//! [`AutoUploadPolicy`]; neither lives in this crate.

pub mod policy;
pub mod types;

// Re-export the policy and its decision types.
pub use policy::AutoUploadPolicy;
pub use types::{AttemptState, AutoUploadAction};
