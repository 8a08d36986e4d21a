//! Post snapshot model — status, kind, and sync flags.
//!
//! A [`PostSnapshot`] carries exactly the fields the auto-upload policy
//! reads from the client's post store, nothing more. The snapshot is
//! read-only: the policy never mutates the post and does not own its
//! lifecycle. Wire strings for [`PostStatus`] match the values the
//! clients persist, so snapshots decode directly from store JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScribeError;

/// Publication status of a post.
///
/// Closed enumeration replacing the original object-relational status
/// field. Unknown strings are rejected at the parsing boundary rather
/// than carried into the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "publish")]
    Published,
    #[serde(rename = "future")]
    Scheduled,
    #[serde(rename = "trash")]
    Trashed,
    #[serde(rename = "deleted")]
    Deleted,
}

impl PostStatus {
    /// Every status, for exhaustive sweeps in tests and UI pickers.
    pub const ALL: [PostStatus; 7] = [
        PostStatus::Draft,
        PostStatus::Pending,
        PostStatus::Private,
        PostStatus::Published,
        PostStatus::Scheduled,
        PostStatus::Trashed,
        PostStatus::Deleted,
    ];

    /// The wire string persisted by the clients.
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
            PostStatus::Published => "publish",
            PostStatus::Scheduled => "future",
            PostStatus::Trashed => "trash",
            PostStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "private" => Ok(PostStatus::Private),
            "publish" => Ok(PostStatus::Published),
            "future" => Ok(PostStatus::Scheduled),
            "trash" => Ok(PostStatus::Trashed),
            "deleted" => Ok(PostStatus::Deleted),
            _ => Err(ScribeError::UnknownStatus(s.to_string())),
        }
    }
}

/// Whether the entry is an ordinary post or a page.
///
/// Pages share the post storage model but are excluded from auto-retry.
/// Kind is a tagged variant here; the original used subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Post,
    Page,
}

/// Read-only snapshot of a post at decision time.
///
/// All fields are point-in-time observations from the post store. The
/// store enforces that `attempts` is non-negative and never decreases
/// across retries; this crate only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSnapshot {
    pub status: PostStatus,
    pub kind: PostKind,

    /// The last upload of this post ended in failure.
    pub upload_failed: bool,

    /// Never yet synchronized to any remote server.
    pub local_draft: bool,

    /// Hosted on the managed remote service rather than self-hosted.
    pub hosted_remotely: bool,

    /// The user confirmed upload intent by pressing Publish or Update in
    /// the editor. Absent when the editor crashed before confirmation.
    pub confirmed_auto_upload: bool,

    /// Auto-upload attempts made so far, maintained by the post store.
    pub attempts: u32,
}
