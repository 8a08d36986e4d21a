//! Auto-upload decision types.
//!
//! Like the snapshot model these are deliberately plain: no references,
//! no lifetimes, simple enums, so decisions can cross the FFI boundary
//! to the mobile shells unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScribeError;

/// Action to execute when retrying a failed upload.
///
/// Wire strings match the raw values the clients log to analytics, so a
/// decision can be recorded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoUploadAction {
    /// Upload the post as is. A post that was published locally will be
    /// published when the server receives it.
    #[serde(rename = "upload")]
    Upload,

    /// Upload a revision. Stores content server-side without publishing.
    #[serde(rename = "autoSave")]
    AutoSave,

    /// Leave the post alone.
    #[serde(rename = "nothing")]
    Nothing,
}

impl AutoUploadAction {
    /// The analytics wire string for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            AutoUploadAction::Upload => "upload",
            AutoUploadAction::AutoSave => "autoSave",
            AutoUploadAction::Nothing => "nothing",
        }
    }
}

impl fmt::Display for AutoUploadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutoUploadAction {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(AutoUploadAction::Upload),
            "autoSave" => Ok(AutoUploadAction::AutoSave),
            "nothing" => Ok(AutoUploadAction::Nothing),
            _ => Err(ScribeError::UnknownAction(s.to_string())),
        }
    }
}

/// Where a post stands against the attempt ceiling.
///
/// Drives the retry badge in the post list: nothing for
/// `NotAttempted`, a spinner for `Attempted`, a terminal failure notice
/// for `ReachedLimit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// No auto-upload has been tried yet.
    NotAttempted,
    /// At least one attempt was made, ceiling not yet reached.
    Attempted,
    /// The attempt ceiling is reached; the post is left alone.
    ReachedLimit,
}
