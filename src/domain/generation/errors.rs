//! Generation Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field `{field}` must not be blank")]
    BlankField { field: &'static str },

    #[error("field `{field}` exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("num must be an integer between 1 and {max}, got {got}")]
    SentenceCountOutOfRange { got: String, max: u32 },
}
