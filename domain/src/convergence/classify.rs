//! Backend-error classification.
//!
//! Re-initiating an active replica set is rejected by the backend with a
//! recognizable signal. The stable form of that signal is the server error
//! code; the error message wording varies across backend versions, so the
//! substring check is a fallback for drivers that surface no code.

/// Server error code for "replica set already initialized".
pub const ALREADY_INITIALIZED_CODE: i32 = 23;

/// Message fragment identifying the same condition when no structured code
/// is available. Case-sensitive, exact phrase.
pub const ALREADY_INITIALIZED_PHRASE: &str = "already initialized";

/// Classify a raised backend error as the benign "already initialized"
/// signal.
///
/// Prefers the structured code when present; falls back to substring search
/// on the message.
pub fn is_already_initialized(code: Option<i32>, message: &str) -> bool {
    if code == Some(ALREADY_INITIALIZED_CODE) {
        return true;
    }
    message.contains(ALREADY_INITIALIZED_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_code_wins() {
        assert!(is_already_initialized(Some(23), "some unrelated wording"));
    }

    #[test]
    fn test_message_fallback() {
        assert!(is_already_initialized(
            None,
            "replica set already initialized"
        ));
    }

    #[test]
    fn test_phrase_is_case_sensitive() {
        assert!(!is_already_initialized(None, "Already Initialized"));
    }

    #[test]
    fn test_other_errors_not_classified() {
        assert!(!is_already_initialized(None, "connection refused"));
        assert!(!is_already_initialized(Some(74), "NodeNotFound"));
    }

    #[test]
    fn test_phrase_anywhere_in_message() {
        assert!(is_already_initialized(
            None,
            "command failed: rs0 was already initialized by another node"
        ));
    }
}
