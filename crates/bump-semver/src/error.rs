//! Error type shared by the parser and the constraint engine

use thiserror::Error;

/// Reasons a version or constraint string can be rejected.
///
/// Parsing stops at the first violation, so exactly one kind is reported per
/// failed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("version string empty")]
    Empty,
    #[error("core version must be major.minor.patch")]
    MalformedCore,
    #[error("version component cannot be empty")]
    EmptyComponent,

    #[error("version component must contain only digits")]
    NonDigitComponent,
    #[error("version component cannot have leading zeros")]
    LeadingZeros,
    #[error("version component must be non-negative")]
    NegativeComponent,
    #[error("version component \"{0}\" is too large")]
    ComponentOverflow(String),

    #[error("identifier cannot be empty")]
    EmptyIdentifier,
    #[error("numeric identifier cannot have leading zeros")]
    LeadingZeroIdentifier,
    #[error("identifier can only contain alphanumeric characters and hyphens")]
    InvalidIdentifierChars,

    #[error("invalid constraint \"{0}\"")]
    InvalidConstraint(String),
    #[error("unknown constraint operator \"{0}\"")]
    UnknownOperator(String),
}

impl ParseError {
    /// Whether this error came from constraint syntax rather than the embedded version.
    pub fn is_constraint_error(&self) -> bool {
        matches!(self, ParseError::InvalidConstraint(_) | ParseError::UnknownOperator(_))
    }
}
