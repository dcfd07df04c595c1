use std::fmt;

/// Outcome of a pipeline run reported by the notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RunStatus {
    #[default]
    #[value(name = "SUCCESS")]
    Success,
    #[value(name = "FAILED")]
    Failed,
    #[value(name = "CANCELLED")]
    Cancelled,
}

/// Adaptive card styling for a status: text colour and container style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub color: &'static str,
    pub style: &'static str,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Failed => "FAILED",
            RunStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            RunStatus::Success => StatusStyle {
                color: "good",
                style: "Good",
            },
            RunStatus::Cancelled => StatusStyle {
                color: "warning",
                style: "Warning",
            },
            RunStatus::Failed => StatusStyle {
                color: "attention",
                style: "Attention",
            },
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
