//! Error types for scribe-core.
//!
//! Parsing snapshot wire strings is the only fallible surface in this
//! crate. The policy operations themselves are total functions: every
//! snapshot maps to a defined decision, with no failure paths.

/// Unified error type for all scribe-core operations.
#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
    /// A status string outside the closed status enumeration.
    #[error("Unknown post status: {0}")]
    UnknownStatus(String),

    /// An action string outside the auto-upload action registry.
    #[error("Unknown auto-upload action: {0}")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_offending_string() {
        let err = ScribeError::UnknownStatus("limbo".into());
        assert_eq!(err.to_string(), "Unknown post status: limbo");

        let err = ScribeError::UnknownAction("republish".into());
        assert_eq!(err.to_string(), "Unknown auto-upload action: republish");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScribeError>();
    }
}
