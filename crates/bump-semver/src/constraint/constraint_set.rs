//! ConstraintSet - constraints combined with AND

use std::fmt;

use super::Constraint;
use crate::{ParseError, Version, VersionParser};

/// An ordered list of constraints that must all hold (`>=1.2, <2`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create a set from individual constraints
    pub fn new(constraints: Vec<Constraint>) -> Self {
        ConstraintSet { constraints }
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check if a version satisfies every constraint in the set.
    ///
    /// An empty set places no restriction on the version.
    pub fn check(&self, version: &Version) -> bool {
        self.constraints.iter().all(|c| c.check(version))
    }
}

impl From<Constraint> for ConstraintSet {
    fn from(constraint: Constraint) -> Self {
        ConstraintSet::new(vec![constraint])
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        ConstraintSet::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", constraints_str.join(", "))
    }
}

impl std::str::FromStr for ConstraintSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse_constraint_set(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConstraintSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConstraintSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
