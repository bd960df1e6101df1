use thiserror::Error;

/// Rejections raised while constructing value objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone should have exactly 10 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Invalid date '{0}', use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Input is not valid UTF-8")]
    InvalidEncoding,
}

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("{name} has no phone number {phone}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl RolodexError {
    /// Errors a session can report and continue past.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RolodexError::Validation(_)
                | RolodexError::ContactNotFound(_)
                | RolodexError::PhoneNotFound { .. }
                | RolodexError::Usage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
