//! Semantic versioning engine for release tagging
//!
//! This crate parses SemVer 2.0 version strings (optionally prefixed, as in git
//! tags like `v1.2.3`), orders them by precedence and evaluates range constraints
//! such as `>=1.2, <2` or `^0.3.1`.
//!
//! ```
//! use bump_semver::{parse, parse_constraint_set};
//!
//! let version = parse("v1.4.2", true).unwrap();
//! let next = version.increment_minor().unwrap();
//! assert_eq!(next.to_prefixed_string('v'), "v1.5.0");
//!
//! let set = parse_constraint_set("^1.2, !=1.5.0", false).unwrap();
//! assert!(set.check(&version));
//! assert!(!set.check(&next));
//! ```

mod comparator;
pub mod constraint;
mod error;
mod semver;
mod version;
mod version_parser;

pub use comparator::{compare, Comparator};
pub use constraint::{Constraint, ConstraintSet, Operator};
pub use error::ParseError;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::VersionParser;

fn parser(allow_prefix: bool) -> VersionParser {
    VersionParser::new().allow_prefix(allow_prefix)
}

/// Parse a version, optionally accepting a leading `v`
pub fn parse(version: &str, allow_prefix: bool) -> Result<Version, ParseError> {
    parser(allow_prefix).parse(version)
}

/// Check whether a version string is valid SemVer
pub fn is_valid(version: &str, allow_prefix: bool) -> bool {
    parser(allow_prefix).is_valid(version)
}

/// Parse a single constraint such as `~1.2`
pub fn parse_constraint(constraint: &str, allow_prefix: bool) -> Result<Constraint, ParseError> {
    parser(allow_prefix).parse_constraint(constraint)
}

/// Parse a comma-separated constraint set such as `>=1.0, <2`
pub fn parse_constraint_set(constraints: &str, allow_prefix: bool) -> Result<ConstraintSet, ParseError> {
    parser(allow_prefix).parse_constraint_set(constraints)
}
