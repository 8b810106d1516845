//! Version precedence

use std::cmp::Ordering;

use crate::Version;

/// Compare two versions by SemVer precedence.
///
/// Build metadata is ignored, so versions that differ only in metadata compare
/// equal.
pub fn compare(v1: &Version, v2: &Version) -> Ordering {
    v1.major()
        .cmp(&v2.major())
        .then_with(|| v1.minor().cmp(&v2.minor()))
        .then_with(|| v1.patch().cmp(&v2.patch()))
        .then_with(|| match (v1.is_prerelease(), v2.is_prerelease()) {
            (false, false) => Ordering::Equal,
            // A release outranks any prerelease of the same core
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => compare_prerelease(v1.prerelease(), v2.prerelease()),
        })
}

fn compare_prerelease(pre1: &[String], pre2: &[String]) -> Ordering {
    for (id1, id2) in pre1.iter().zip(pre2) {
        let ordering = compare_identifier(id1, id2);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    // One is a prefix of the other
    pre1.len().cmp(&pre2.len())
}

fn compare_identifier(id1: &str, id2: &str) -> Ordering {
    match (is_numeric(id1), is_numeric(id2)) {
        // No leading zeros, so a longer digit run is a larger number
        (true, true) => id1.len().cmp(&id2.len()).then_with(|| id1.cmp(id2)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => id1.cmp(id2),
    }
}

fn is_numeric(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Comparator for ordering versions
pub struct Comparator;

impl Comparator {
    /// Three-way precedence comparison
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        compare(version1, version2)
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2, ignoring metadata
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2, ignoring metadata
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Equal
    }

    /// Sort versions in ascending precedence. The sort is stable, so versions
    /// differing only in metadata keep their relative order.
    pub fn sort(versions: &mut [Version]) {
        versions.sort_by(compare);
    }

    /// Sort versions in descending precedence
    pub fn rsort(versions: &mut [Version]) {
        versions.sort_by(|a, b| compare(b, a));
    }

    /// Highest version by precedence; the first one wins among equals
    pub fn max<'a, I>(versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().reduce(|best, v| if Self::greater_than(v, best) { v } else { best })
    }
}

impl Version {
    /// Precedence comparison with another version, ignoring metadata
    pub fn compare(&self, other: &Version) -> Ordering {
        compare(self, other)
    }

    pub fn equal_to(&self, other: &Version) -> bool {
        Comparator::equal_to(self, other)
    }

    pub fn not_equal_to(&self, other: &Version) -> bool {
        Comparator::not_equal_to(self, other)
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        Comparator::greater_than(self, other)
    }

    pub fn greater_than_or_equal_to(&self, other: &Version) -> bool {
        Comparator::greater_than_or_equal_to(self, other)
    }

    pub fn less_than(&self, other: &Version) -> bool {
        Comparator::less_than(self, other)
    }

    pub fn less_than_or_equal_to(&self, other: &Version) -> bool {
        Comparator::less_than_or_equal_to(self, other)
    }
}
