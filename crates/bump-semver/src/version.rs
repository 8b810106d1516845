//! Immutable semantic version value

use std::fmt;

use indexmap::IndexMap;

use crate::version_parser::{validate_identifier, IdentifierKind, VersionParser};
use crate::ParseError;

/// A parsed semantic version (`major.minor.patch[-prerelease][+metadata]`).
///
/// Values are never changed in place: every operation that "modifies" a version
/// returns a new one. Equality is structural and includes build metadata; use the
/// precedence methods (see [`crate::Comparator`]) to order versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<String>,
    metadata: Vec<String>,
}

impl Version {
    /// Create a release version without prerelease or metadata identifiers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Create a version from signed components, rejecting negative values.
    pub fn try_from_parts(major: i64, minor: i64, patch: i64) -> Result<Self, ParseError> {
        let component = |value: i64| u64::try_from(value).map_err(|_| ParseError::NegativeComponent);
        Ok(Version::new(component(major)?, component(minor)?, component(patch)?))
    }

    /// Parse a version string without accepting a tag prefix.
    pub fn parse(version: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse(version)
    }

    pub(crate) fn from_parsed(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<String>,
        metadata: Vec<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            metadata,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers, empty for a release version
    pub fn prerelease(&self) -> &[String] {
        &self.prerelease
    }

    /// Build metadata identifiers
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Next major version; minor and patch reset, identifiers dropped.
    ///
    /// Fails with [`ParseError::ComponentOverflow`] when the major is already `u64::MAX`.
    pub fn increment_major(&self) -> Result<Version, ParseError> {
        Ok(Version::new(next_component(self.major)?, 0, 0))
    }

    /// Next minor version; patch reset, identifiers dropped.
    pub fn increment_minor(&self) -> Result<Version, ParseError> {
        Ok(Version::new(self.major, next_component(self.minor)?, 0))
    }

    /// Next patch version; identifiers dropped.
    pub fn increment_patch(&self) -> Result<Version, ParseError> {
        Ok(Version::new(self.major, self.minor, next_component(self.patch)?))
    }

    /// Copy of this version with the given prerelease identifiers.
    ///
    /// Identifiers are validated with the same rules the parser applies, so a
    /// numeric identifier such as `"01"` is rejected.
    pub fn with_prerelease<I, S>(&self, identifiers: I) -> Result<Version, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prerelease = collect_identifiers(identifiers, IdentifierKind::Prerelease)?;
        Ok(Version {
            prerelease,
            ..self.clone()
        })
    }

    /// Copy of this version with the given build metadata identifiers.
    pub fn with_metadata<I, S>(&self, identifiers: I) -> Result<Version, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metadata = collect_identifiers(identifiers, IdentifierKind::Metadata)?;
        Ok(Version {
            metadata,
            ..self.clone()
        })
    }

    /// Copy of this version whose prerelease is the given pairs flattened in order,
    /// e.g. `[("feature", "x")]` becomes `-feature.x`.
    ///
    /// Pairs with an empty value contribute only their key, so the map returned by
    /// [`Version::prerelease_map`] for an odd trailing key can be passed back in.
    pub fn with_prerelease_map<I, K, V>(&self, pairs: I) -> Result<Version, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_prerelease(flatten_pairs(pairs))
    }

    /// Copy of this version whose metadata is the given pairs flattened in order.
    ///
    /// As with [`Version::with_prerelease_map`], empty values are skipped.
    pub fn with_metadata_map<I, K, V>(&self, pairs: I) -> Result<Version, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_metadata(flatten_pairs(pairs))
    }

    /// Prerelease identifiers read as alternating key/value pairs.
    ///
    /// A trailing key without a value maps to an empty string.
    pub fn prerelease_map(&self) -> IndexMap<String, String> {
        pairs_to_map(&self.prerelease)
    }

    /// Metadata identifiers read as alternating key/value pairs.
    pub fn metadata_map(&self) -> IndexMap<String, String> {
        pairs_to_map(&self.metadata)
    }

    /// Render with a leading tag prefix, e.g. `v1.2.3`.
    pub fn to_prefixed_string(&self, prefix: char) -> String {
        format!("{}{}", prefix, self)
    }
}

fn next_component(value: u64) -> Result<u64, ParseError> {
    value
        .checked_add(1)
        .ok_or_else(|| ParseError::ComponentOverflow(format!("{}+1", value)))
}

fn collect_identifiers<I, S>(identifiers: I, kind: IdentifierKind) -> Result<Vec<String>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers
        .into_iter()
        .map(|id| {
            let id = id.into();
            validate_identifier(&id, kind)?;
            Ok(id)
        })
        .collect()
}

fn flatten_pairs<I, K, V>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .flat_map(|(k, v)| {
            let (key, value): (String, String) = (k.into(), v.into());
            if value.is_empty() {
                vec![key]
            } else {
                vec![key, value]
            }
        })
        .collect()
}

fn pairs_to_map(identifiers: &[String]) -> IndexMap<String, String> {
    identifiers
        .chunks(2)
        .map(|pair| {
            let value = pair.get(1).cloned().unwrap_or_default();
            (pair[0].clone(), value)
        })
        .collect()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata.join("."))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}
