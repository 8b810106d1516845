//! Single version constraint implementation

use std::fmt;

use super::Operator;
use crate::{ParseError, Version, VersionParser};

/// A single version constraint (e.g. `>=1.0.0` or `~1.2`)
///
/// Besides the expanded target version the constraint remembers the text the
/// user wrote, because tilde ranges depend on how many components were given:
/// `~1` and `~1.0` allow any later minor release, `~1.0.0` only later patches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    operator: Operator,
    version: Version,
    original: String,
    components: usize,
}

impl Constraint {
    /// Create a constraint from an already parsed version.
    ///
    /// The rendered version acts as the written text, so a tilde constraint built
    /// this way always bounds by the next minor release.
    pub fn new(operator: Operator, version: Version) -> Self {
        let original = version.to_string();
        let components = original.split('.').count();
        Constraint {
            operator,
            version,
            original,
            components,
        }
    }

    pub(crate) fn from_parts(operator: Operator, version: Version, original: String, components: usize) -> Self {
        Constraint {
            operator,
            version,
            original,
            components,
        }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the target version after partial expansion
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the version text as written, before expansion
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Check if a version satisfies this constraint
    pub fn check(&self, version: &Version) -> bool {
        let target = &self.version;
        match self.operator {
            Operator::Equal => version.equal_to(target),
            Operator::NotEqual => version.not_equal_to(target),
            Operator::GreaterThan => version.greater_than(target),
            Operator::LessThan => version.less_than(target),
            Operator::GreaterThanOrEqual => version.greater_than_or_equal_to(target),
            Operator::LessThanOrEqual => version.less_than_or_equal_to(target),
            Operator::Tilde => {
                // ~1 and ~1.0 both stay below the next major
                let upper = if self.components < 3 {
                    target.increment_major()
                } else {
                    target.increment_minor()
                };
                self.in_range(version, upper)
            }
            Operator::Caret => {
                let upper = if target.major() > 0 {
                    target.increment_major()
                } else if target.minor() > 0 {
                    target.increment_minor()
                } else {
                    target.increment_patch()
                };
                self.in_range(version, upper)
            }
        }
    }

    /// `[target, upper)`, or `[target, ..)` when the bound overflowed
    fn in_range(&self, version: &Version, upper: Result<Version, ParseError>) -> bool {
        version.greater_than_or_equal_to(&self.version)
            && upper.map_or(true, |upper| version.less_than(&upper))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl std::str::FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse_constraint(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Constraint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Constraint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
