//! Domain logic - pure rules independent of git and HTTP

pub mod candidate;
pub mod release;
pub mod repo;
pub mod status;

pub use candidate::{
    classify_tag, next_candidate, next_candidate_number, scan_candidates, CandidateScan,
    CandidateTag, TagClass,
};
pub use release::{ReleaseBranch, ReleaseIdentifier};
pub use repo::RepoSlug;
pub use status::{RunStatus, StatusStyle};
