//! Semver facade providing high-level operations on raw tag strings

use crate::{Comparator, Version, VersionParser};

/// Convenience entry points for callers holding tag names rather than parsed
/// versions. Every input may carry the conventional `v` prefix.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a comma-separated constraint set.
    ///
    /// Returns false when either side fails to parse.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let parser = VersionParser::for_tags();

        let version = match parser.parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match parser.parse_constraint_set(constraints) {
            Ok(set) => set.check(&version),
            Err(err) => {
                log::debug!("Ignoring invalid constraints \"{}\": {}", constraints, err);
                false
            }
        }
    }

    /// Return all versions that satisfy the given constraints, in input order
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parser = VersionParser::for_tags();
        let set = match parser.parse_constraint_set(constraints) {
            Ok(set) => set,
            Err(err) => {
                log::debug!("Ignoring invalid constraints \"{}\": {}", constraints, err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter(|v| parser.parse(v).is_ok_and(|version| set.check(&version)))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order, dropping anything that does not parse
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::for_tags();

        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .filter_map(|v| match parser.parse(v) {
                Ok(version) => Some((version, *v)),
                Err(err) => {
                    log::debug!("Skipping unparsable version \"{}\": {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|(_, original)| original.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        assert!(Semver::satisfies("1.0.0", "1.0.0"));
        assert!(Semver::satisfies("v1.2.3", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=  1.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));
        assert!(Semver::satisfies("v0.1.97", ">=0.1.97"));
        assert!(Semver::satisfies("1.2.3", "~1"));
        assert!(Semver::satisfies("1.4.7", "~1.0"));
        assert!(Semver::satisfies("2.9.0", "~2.4"));
        assert!(Semver::satisfies("1.8.1", "^1.2.3"));
        assert!(Semver::satisfies("0.1.2", "^0.1"));
        assert!(Semver::satisfies("1.4.2", "^1.2, ^1"));
        assert!(Semver::satisfies("1.2.3", "~1.2.1, >=1.2.3"));
        assert!(Semver::satisfies("1.2.3", "~v1.2.1, 1.2.3"));
        assert!(Semver::satisfies("0.0.1-beta", "^0.0.1-alpha"));
        assert!(Semver::satisfies("1.0.0", ""));
    }

    #[test]
    fn test_satisfies_negative() {
        assert!(!Semver::satisfies("0.0.0", ">=1.0.0"));
        assert!(!Semver::satisfies("2.2.9", "<=2.0.0"));
        assert!(!Semver::satisfies("v0.1.93", ">=0.1.97"));
        assert!(!Semver::satisfies("3.0.0", "~2.4"));
        assert!(!Semver::satisfies("2.3.9", "~2.4"));
        assert!(!Semver::satisfies("0.2.3", "~1"));
        assert!(!Semver::satisfies("1.2.2", "^1.2.3"));
        assert!(!Semver::satisfies("1.1.9", "^1.2"));
        assert!(!Semver::satisfies("2.0.0-alpha", "^2.0.0"));
        assert!(!Semver::satisfies("1.2.3-beta", "<1.2.3-alpha"));

        // Unparsable input never satisfies anything
        assert!(!Semver::satisfies("1.0", ">=0.1"));
        assert!(!Semver::satisfies("1.0.0", "=>1"));
        assert!(!Semver::satisfies("1.0.0", "1.2.x"));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = ["1.0.0", "1.2.0", "v1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999", "bogus"];
        let result = Semver::satisfied_by(&versions, "~1.0");
        assert_eq!(result, ["1.0.0", "1.2.0", "v1.9999.9999"]);

        let versions = ["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0"];
        let result = Semver::satisfied_by(&versions, "^0.2.0");
        assert_eq!(result, ["0.2.0", "0.2.1"]);

        assert!(Semver::satisfied_by(&versions, ">=").is_empty());
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0.0", "v0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0", "latest"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, ["v0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, ["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]);
    }
}
