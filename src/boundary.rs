use std::fmt;

/// Non-fatal conditions met while deriving or publishing a candidate.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag carries the release prefix but is not counted as a candidate
    IgnoredTag { tag: String, reason: String },
    /// `GITHUB_OUTPUT` is not set, so step outputs are only printed
    OutputSinkMissing,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::IgnoredTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::OutputSinkMissing => {
                write!(f, "GITHUB_OUTPUT is not set; step outputs were not written")
            }
        }
    }
}
