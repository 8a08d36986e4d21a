//! Policy constants — canonical values shared with the mobile clients.
//!
//! These back [`AutoUploadPolicy::default`](crate::auto_upload::AutoUploadPolicy).
//! The values are injected at policy construction rather than read from
//! global state, so tests can vary them freely.

use crate::post::PostStatus;

/// Statuses that block auto-upload entirely. A trashed or deleted post is
/// never retried, whatever its other flags say.
pub const DISALLOWED_STATUSES: [PostStatus; 2] = [PostStatus::Trashed, PostStatus::Deleted];

/// Hard ceiling on auto-upload attempts for a single post. At or beyond
/// this count the post is left alone until the user intervenes.
pub const MAX_AUTO_UPLOAD_ATTEMPTS: u32 = 3;
