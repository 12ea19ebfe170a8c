use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MortgageError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the form field that was rejected.
    pub fn field(&self) -> &str {
        match self {
            MortgageError::InvalidInput { field, .. } => field,
        }
    }
}
