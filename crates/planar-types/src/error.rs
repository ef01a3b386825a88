use thiserror::Error;

/// Errors produced when parsing foundation types from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid color {0:?}: please use hexadecimal RRGGBB")]
    InvalidColor(String),

    #[error("invalid boolean {0:?}: please use true/false")]
    InvalidBool(String),

    #[error("unknown object type {0:?}: please use point/line/ray/seg/circle")]
    UnknownKind(String),

    #[error("object name must not be empty")]
    EmptyName,
}
