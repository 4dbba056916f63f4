//! Job status as reported by `GET /status/{job_id}`.
//!
//! The server keeps one record per job with an overall status and one status
//! per stage. Tokens are free-form strings; [`Phase::of`] folds them into the
//! few cases the ingesting page reacts to.

use serde::Deserialize;

/// Token shown and assumed for a stage the server has not reported yet.
pub const PENDING: &str = "pending";
pub const COMPLETED: &str = "completed";
pub const ERROR: &str = "error";

/// Snapshot of a job returned by the status endpoint.
///
/// Every field may be absent. The server also sends bookkeeping fields
/// (output paths, unit counts) which are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assignment_status: Option<String>,
    #[serde(default)]
    pub mark_scheme_status: Option<String>,
    #[serde(default)]
    pub matching_status: Option<String>,
}

impl StatusRecord {
    pub fn assignment(&self) -> &str {
        or_pending(&self.assignment_status)
    }

    pub fn mark_scheme(&self) -> &str {
        or_pending(&self.mark_scheme_status)
    }

    pub fn matching(&self) -> &str {
        or_pending(&self.matching_status)
    }

    /// Status of one of the two animated stages.
    pub fn of(&self, process: TrackedProcess) -> &str {
        match process {
            TrackedProcess::Assignment => self.assignment(),
            TrackedProcess::MarkScheme => self.mark_scheme(),
        }
    }

    /// The overall job finished successfully.
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(COMPLETED)
    }

    /// The overall job is `error`, or any stage reports an error-family token.
    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some(ERROR)
            || [
                &self.assignment_status,
                &self.mark_scheme_status,
                &self.matching_status,
            ]
            .into_iter()
            .any(|token| token.as_deref().is_some_and(is_error))
    }
}

fn or_pending(token: &Option<String>) -> &str {
    token.as_deref().unwrap_or(PENDING)
}

/// `error`, `error_timeout`, `error: file missing`, ...
pub fn is_error(token: &str) -> bool {
    token.starts_with(ERROR)
}

/// What a status token means for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Work is queued or underway; fake progress may advance.
    Running,
    Succeeded,
    Failed,
    /// Anything else (`not_found`, new server tokens); progress holds still.
    Unknown,
}

impl Phase {
    pub fn of(token: &str) -> Self {
        match token {
            "processing" | "pending" | "queued" | "starting" => Phase::Running,
            COMPLETED => Phase::Succeeded,
            t if is_error(t) => Phase::Failed,
            _ => Phase::Unknown,
        }
    }
}

/// The two stages that get an animated progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedProcess {
    Assignment,
    MarkScheme,
}

impl TrackedProcess {
    pub const ALL: [TrackedProcess; 2] = [TrackedProcess::Assignment, TrackedProcess::MarkScheme];
}
