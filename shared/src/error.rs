use thiserror::Error;

/// Errors raised by the dialog primitives
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialogError {
    /// A ref sink refused the assignment (a holder that is currently borrowed)
    #[error("Cannot assign value \"{value}\" to ref \"{target}\"")]
    RefAssign { value: String, target: String },

    /// A DOM operation failed
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration could not be parsed
    #[error("Invalid dialog configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_assign_message_names_value_and_target() {
        let err = DialogError::RefAssign {
            value: "Some(3)".to_string(),
            target: "Holder(RefCell { value: <borrowed> })".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot assign value \"Some(3)\" to ref \"Holder(RefCell { value: <borrowed> })\""
        );
    }

    #[test]
    fn test_dom_error_message() {
        let err = DialogError::Dom("createElement failed".to_string());
        assert_eq!(err.to_string(), "DOM operation failed: createElement failed");
    }
}
