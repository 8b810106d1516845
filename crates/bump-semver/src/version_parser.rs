//! Version and constraint string parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{Constraint, ConstraintSet, Operator};
use crate::{ParseError, Version};

lazy_static! {
    // Identifiers may only use ASCII alphanumerics and hyphens
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();

    static ref NUMERIC_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();

    // Leading run of operator characters, then the version text
    static ref OPERATOR_RE: Regex = Regex::new(r"(?s)^([=<>!~^]*)\s*(.*)$").unwrap();
}

/// Characters that may start an operator token
const OPERATOR_CHARS: &[char] = &['=', '<', '>', '!', '~', '^'];

/// Where an identifier appears, which decides whether numeric leading zeros are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierKind {
    Prerelease,
    Metadata,
}

/// Parser configuration and entry points for versions and constraints.
///
/// The default parser is strict: `v1.2.3` is rejected. Tag-style input is accepted
/// once a prefix is allowed:
///
/// ```
/// use bump_semver::VersionParser;
///
/// let parser = VersionParser::new().allow_prefix(true);
/// let version = parser.parse("v1.2.3").unwrap();
/// assert_eq!(version.to_string(), "1.2.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionParser {
    allow_prefix: bool,
    prefix: char,
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser {
    /// Conventional tag prefix character
    pub const DEFAULT_PREFIX: char = 'v';

    /// Create a strict parser that rejects prefixed input
    pub fn new() -> Self {
        VersionParser {
            allow_prefix: false,
            prefix: Self::DEFAULT_PREFIX,
        }
    }

    /// Create a parser for tag names, accepting an optional leading `v`
    pub fn for_tags() -> Self {
        Self::new().allow_prefix(true)
    }

    /// Toggle acceptance of a single leading prefix character
    pub fn allow_prefix(mut self, allow: bool) -> Self {
        self.allow_prefix = allow;
        self
    }

    /// Replace the prefix character (defaults to `v`)
    pub fn prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn allows_prefix(&self) -> bool {
        self.allow_prefix
    }

    pub fn prefix_char(&self) -> char {
        self.prefix
    }

    /// Parse a version string, failing on the first rule it violates.
    pub fn parse(&self, version: &str) -> Result<Version, ParseError> {
        self.parse_version(version).inspect_err(|err| {
            log::trace!("Rejected version \"{}\": {}", version, err);
        })
    }

    /// Check whether a version string parses
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    fn parse_version(&self, version: &str) -> Result<Version, ParseError> {
        if version.is_empty() {
            return Err(ParseError::Empty);
        }

        let version = self.strip_prefix(version);

        let (version_part, meta_part) = match version.split_once('+') {
            Some((_, "")) => return Err(ParseError::EmptyIdentifier),
            Some((version, meta)) => (version, Some(meta)),
            None => (version, None),
        };

        let (core_part, prerelease_part) = match version_part.split_once('-') {
            Some((_, "")) => return Err(ParseError::EmptyIdentifier),
            Some((core, prerelease)) => (core, Some(prerelease)),
            None => (version_part, None),
        };

        let core: Vec<&str> = core_part.split('.').collect();
        let [major, minor, patch] = core.as_slice() else {
            return Err(ParseError::MalformedCore);
        };

        let major = parse_version_number(major)?;
        let minor = parse_version_number(minor)?;
        let patch = parse_version_number(patch)?;

        let prerelease = match prerelease_part {
            Some(text) => split_identifiers(text, IdentifierKind::Prerelease)?,
            None => Vec::new(),
        };

        let metadata = match meta_part {
            Some(text) => split_identifiers(text, IdentifierKind::Metadata)?,
            None => Vec::new(),
        };

        Ok(Version::from_parsed(major, minor, patch, prerelease, metadata))
    }

    fn strip_prefix<'a>(&self, version: &'a str) -> &'a str {
        if self.allow_prefix {
            version.strip_prefix(self.prefix).unwrap_or(version)
        } else {
            version
        }
    }

    /// Expand a partial version to a full triple: `1` becomes `1.0.0` and `1.2`
    /// becomes `1.2.0`. Anything with three or more parts is returned unchanged.
    /// A leading prefix character is kept in front of the expanded text.
    pub fn expand_partial(&self, version: &str) -> String {
        let (prefix, bare) = match version.strip_prefix(self.prefix) {
            Some(bare) => (version[..version.len() - bare.len()].to_string(), bare),
            None => (String::new(), version),
        };

        match bare.split('.').count() {
            1 => format!("{}{}.0.0", prefix, bare),
            2 => format!("{}{}.0", prefix, bare),
            _ => version.to_string(),
        }
    }

    /// Number of dot-separated components the user wrote, ignoring a prefix
    pub(crate) fn written_components(&self, version: &str) -> usize {
        version
            .strip_prefix(self.prefix)
            .unwrap_or(version)
            .split('.')
            .count()
    }

    /// Parse a single constraint such as `>=1.2`, `~1.0.0` or `^0.3`.
    ///
    /// Without an operator the constraint is an exact match. Errors from the
    /// embedded version are returned as-is.
    pub fn parse_constraint(&self, constraint: &str) -> Result<Constraint, ParseError> {
        self.parse_single_constraint(constraint).inspect_err(|err| {
            log::trace!("Rejected constraint \"{}\": {}", constraint, err);
        })
    }

    fn parse_single_constraint(&self, constraint: &str) -> Result<Constraint, ParseError> {
        let constraint = constraint.trim();
        if constraint.is_empty() {
            return Err(ParseError::InvalidConstraint(constraint.to_string()));
        }

        let captures = OPERATOR_RE
            .captures(constraint)
            .ok_or_else(|| ParseError::InvalidConstraint(constraint.to_string()))?;
        let token = captures.get(1).map_or("", |m| m.as_str());
        let version_str = captures.get(2).map_or("", |m| m.as_str()).trim_end();

        let operator = if token.is_empty() {
            Operator::Equal
        } else {
            Operator::from_token(token)?
        };

        // A second operator after whitespace, e.g. "> =1.0"
        if version_str.is_empty() || version_str.starts_with(OPERATOR_CHARS) {
            return Err(ParseError::InvalidConstraint(constraint.to_string()));
        }

        let expanded = self.expand_partial(version_str);
        let version = self.parse(&expanded)?;

        Ok(Constraint::from_parts(
            operator,
            version,
            version_str.to_string(),
            self.written_components(version_str),
        ))
    }

    /// Parse a comma-separated list of constraints that must all hold.
    ///
    /// Empty entries are skipped; the first invalid entry aborts the parse.
    pub fn parse_constraint_set(&self, constraints: &str) -> Result<ConstraintSet, ParseError> {
        let parsed = constraints
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| self.parse_constraint(c))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("Parsed {} constraint(s) from \"{}\"", parsed.len(), constraints);

        Ok(ConstraintSet::new(parsed))
    }
}

/// Parse a core version number: digits only, no leading zeros
fn parse_version_number(s: &str) -> Result<u64, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyComponent);
    }

    if s.len() > 1 && s.starts_with('0') {
        return Err(ParseError::LeadingZeros);
    }

    if !NUMERIC_RE.is_match(s) {
        return Err(ParseError::NonDigitComponent);
    }

    s.parse::<u64>()
        .map_err(|_| ParseError::ComponentOverflow(s.to_string()))
}

fn split_identifiers(text: &str, kind: IdentifierKind) -> Result<Vec<String>, ParseError> {
    text.split('.')
        .map(|id| {
            validate_identifier(id, kind)?;
            Ok(id.to_string())
        })
        .collect()
}

/// Validate one prerelease or metadata identifier
pub(crate) fn validate_identifier(id: &str, kind: IdentifierKind) -> Result<(), ParseError> {
    if id.is_empty() {
        return Err(ParseError::EmptyIdentifier);
    }

    if kind == IdentifierKind::Prerelease && id.len() > 1 && id.starts_with('0') && NUMERIC_RE.is_match(id) {
        return Err(ParseError::LeadingZeroIdentifier);
    }

    if !IDENTIFIER_RE.is_match(id) {
        return Err(ParseError::InvalidIdentifierChars);
    }

    Ok(())
}
