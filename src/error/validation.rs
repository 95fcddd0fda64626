use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Response check failed for '{name}': expected data {expected}, got {actual}.")]
    DataMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("Response check failed for '{name}': expected status_code {expected}, got {actual}.")]
    StatusMismatch {
        name: String,
        expected: u16,
        actual: u16,
    },
}
