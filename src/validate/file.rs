//! File upload validation.

use thiserror::Error;

use super::form::FormValue;

/// Why a file upload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    #[error("value is not a file")]
    NotAFile,
    #[error("file is {actual} bytes, over the {limit} byte limit")]
    TooLarge { actual: u64, limit: u64 },
    #[error("file type {actual:?} is not allowed (allowed: {allowed:?})")]
    InvalidType {
        actual: String,
        allowed: Vec<String>,
    },
}

/// Validates uploaded files against a size limit and an allowed MIME type
/// list. Leaving a field `None` disables that check.
#[derive(Debug, Clone, Default)]
pub struct FileValidator {
    pub size_limit: Option<u64>,
    pub allowed_types: Option<Vec<String>>,
}

impl FileValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a candidate value. First failing check wins.
    pub fn validate(&self, value: &FormValue) -> Result<(), FileValidationError> {
        let FormValue::File(file) = value else {
            return Err(FileValidationError::NotAFile);
        };

        if let Some(limit) = self.size_limit {
            if file.size > limit {
                return Err(FileValidationError::TooLarge {
                    actual: file.size,
                    limit,
                });
            }
        }

        if let Some(allowed) = &self.allowed_types {
            if !allowed.iter().any(|t| t == &file.mime) {
                return Err(FileValidationError::InvalidType {
                    actual: file.mime.clone(),
                    allowed: allowed.clone(),
                });
            }
        }

        Ok(())
    }
}
