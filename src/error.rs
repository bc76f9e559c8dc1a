use thiserror::Error;

/// Failures raised while turning raw form input into a feature vector.
///
/// Every variant names the offending field or value so the caller can show
/// a specific message. A failed encode must never reach the model.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("unrecognized value {value:?} for field {field:?}")]
    UnknownCategory { field: String, value: String },

    #[error("location {0:?} is not in the historical tier table")]
    LocationNotFound(String),

    #[error("field {field:?} expects \"Yes\" or \"No\", got {value:?}")]
    InvalidBooleanEncoding { field: String, value: String },

    #[error("feature vector has {got} columns, model expects {expected}")]
    FeatureOrderMismatch { expected: usize, got: usize },
}

impl EncodeError {
    pub fn unknown_category(field: &str, value: &str) -> Self {
        Self::UnknownCategory {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_boolean(field: &str, value: &str) -> Self {
        Self::InvalidBooleanEncoding {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
