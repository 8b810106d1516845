//! Operator types for version constraints

use std::fmt;

use crate::ParseError;

/// Operators a constraint can apply to its target version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Tilde (~): patch updates, or minor updates when one or two components are given
    Tilde,
    /// Caret (^): updates that keep the left-most non-zero component
    Caret,
}

impl Operator {
    /// Parse an operator token such as `>=` or `~`
    pub fn from_token(s: &str) -> Result<Self, ParseError> {
        match s {
            "=" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<=" => Ok(Operator::LessThanOrEqual),
            "~" => Ok(Operator::Tilde),
            "^" => Ok(Operator::Caret),
            _ => Err(ParseError::UnknownOperator(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }

    /// All supported tokens, two-character operators first
    pub fn supported_operators() -> &'static [&'static str] {
        &["!=", ">=", "<=", "=", ">", "<", "~", "^"]
    }
}

impl std::str::FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_token(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
