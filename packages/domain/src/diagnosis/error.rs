use crate::ports::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosisError {
    #[error("Select at least one symptom")]
    InvalidInput,

    #[error("No diagnosis matches the selected symptoms")]
    NoMatch,

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl DiagnosisError {
    /// Whether the message is meant for the person who submitted the form.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DiagnosisError::InvalidInput | DiagnosisError::NoMatch)
    }
}
