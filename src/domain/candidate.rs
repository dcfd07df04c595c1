//! Release-candidate tag derivation
//!
//! Candidate tags have the form `<identifier>.<n>`. The next candidate is a
//! running counter: one more than the highest existing `n`, never a gap fill.

use std::fmt;

use crate::boundary::BoundaryWarning;
use crate::domain::release::ReleaseIdentifier;

/// A release-candidate tag, e.g. `2508.3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTag {
    pub identifier: ReleaseIdentifier,
    pub number: u64,
}

impl CandidateTag {
    pub fn new(identifier: ReleaseIdentifier, number: u64) -> Self {
        CandidateTag { identifier, number }
    }

    /// Tag name as it is written to the repository
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CandidateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.identifier, self.number)
    }
}

/// Result of scanning a tag set for one release identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateScan {
    /// Candidate numbers found, in input order
    pub numbers: Vec<u64>,
    /// Tags carrying the identifier prefix that were not counted
    pub ignored: Vec<BoundaryWarning>,
}

impl CandidateScan {
    /// The number following the highest one found, or 1 if none were found.
    pub fn next_number(&self) -> u64 {
        successor(self.numbers.iter().copied().max())
    }
}

/// How a single tag relates to a release identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagClass {
    /// `<identifier>.<n>` with a usable `n`
    Candidate(u64),
    /// Carries the identifier prefix but is not counted; holds the reason
    Skipped(String),
    /// Belongs to another identifier or is not dotted at all
    Foreign,
}

/// Classify `tag` against `identifier`.
///
/// Only tags with exactly two dot-separated segments whose first segment is
/// the identifier and whose second parses as an integer are candidates. A
/// number with no successor in `u64` is skipped as out of range.
pub fn classify_tag(identifier: &str, tag: &str) -> TagClass {
    let Some((prefix, suffix)) = tag.split_once('.') else {
        return TagClass::Foreign;
    };
    if prefix != identifier {
        return TagClass::Foreign;
    }
    if suffix.contains('.') {
        return TagClass::Skipped("has more than two segments".to_string());
    }

    match suffix.parse::<u64>() {
        Ok(number) if number.checked_add(1).is_some() => TagClass::Candidate(number),
        Ok(_) => TagClass::Skipped(format!("candidate number '{}' is out of range", suffix)),
        Err(_) => TagClass::Skipped(format!("suffix '{}' is not a candidate number", suffix)),
    }
}

/// Parses the candidate number out of a tag if it belongs to `identifier`.
pub fn candidate_number(identifier: &str, tag: &str) -> Option<u64> {
    match classify_tag(identifier, tag) {
        TagClass::Candidate(number) => Some(number),
        TagClass::Skipped(_) | TagClass::Foreign => None,
    }
}

// Candidates are always below u64::MAX, so the increment cannot overflow.
fn successor(max: Option<u64>) -> u64 {
    max.and_then(|max| max.checked_add(1)).unwrap_or(1)
}

/// Scans `tags` for candidates of `identifier`, recording prefix-matching tags
/// that were skipped.
pub fn scan_candidates<I, S>(identifier: &str, tags: I) -> CandidateScan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = CandidateScan::default();

    for tag in tags {
        let tag = tag.as_ref();
        match classify_tag(identifier, tag) {
            TagClass::Candidate(number) => scan.numbers.push(number),
            TagClass::Skipped(reason) => scan.ignored.push(BoundaryWarning::IgnoredTag {
                tag: tag.to_string(),
                reason,
            }),
            TagClass::Foreign => {}
        }
    }

    scan
}

/// Computes the next candidate number for `identifier` given the existing tags.
///
/// Never fails: malformed and foreign tags are excluded.
pub fn next_candidate_number<I, S>(identifier: &str, tags: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    successor(
        tags.into_iter()
            .filter_map(|tag| candidate_number(identifier, tag.as_ref()))
            .max(),
    )
}

/// Computes the next candidate tag for `identifier`.
pub fn next_candidate<I, S>(identifier: &ReleaseIdentifier, tags: I) -> CandidateTag
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let number = next_candidate_number(identifier.as_str(), tags);
    CandidateTag::new(identifier.clone(), number)
}
