//! State behind the ingesting page.
//!
//! An [`IngestSession`] is created once per page and shared by the two
//! animation timers and the status poller. The poller is the only writer of
//! the latest status; the timers only read it. Methods return what the page
//! has to change, and the caller applies that to whichever elements exist.

use crate::config::Timing;
use crate::error::FetchError;
use crate::jobs::{PENDING, StatusRecord, TrackedProcess};
use crate::model::page::IngestPageData;
use crate::progress::{BarEffect, ProgressTrack, TickOutcome};
use crate::requests::{assessment_path, status_path};

/// Text and CSS class of the overall status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallMessage {
    pub text: &'static str,
    pub class: &'static str,
}

impl OverallMessage {
    pub const PROCESSING: Self = Self {
        text: "Processing... Please wait.",
        class: "status-message",
    };
    pub const COMPLETED: Self = Self {
        text: "All processes completed! Redirecting...",
        class: "status-message completed",
    };
    pub const FAILED: Self = Self {
        text: "An error occurred during processing. Please check server logs or try again.",
        class: "status-message error",
    };
    pub const DISCONNECTED: Self = Self {
        text: "Error connecting to server for status updates.",
        class: "status-message error",
    };
}

/// The three per-stage status lines, e.g. `"Status: processing"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLines {
    pub assignment: String,
    pub mark_scheme: String,
    pub matching: String,
}

impl StatusLines {
    fn from_record(record: &StatusRecord) -> Self {
        Self {
            assignment: format!("Status: {}", record.assignment()),
            mark_scheme: format!("Status: {}", record.mark_scheme()),
            matching: format!("Status: {}", record.matching()),
        }
    }
}

/// Delayed full-page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
    pub delay_ms: u32,
}

/// Page changes for a successfully decoded status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub lines: StatusLines,
    /// Bars whose stage turned terminal; their timers must be cancelled.
    pub bars: Vec<(TrackedProcess, BarEffect)>,
    pub message: OverallMessage,
    pub stop_polling: bool,
    pub redirect: Option<Redirect>,
}

/// Page changes for one poll result.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Updated(StatusUpdate),
    /// Transport failure. Polling continues on the next tick.
    Failed {
        error: FetchError,
        consecutive_failures: u32,
        message: OverallMessage,
    },
    /// The poller had already stopped; nothing changes.
    Ignored,
}

pub struct IngestSession {
    page: IngestPageData,
    timing: Timing,
    latest: Option<StatusRecord>,
    assignment: ProgressTrack,
    mark_scheme: ProgressTrack,
    polling: bool,
    consecutive_failures: u32,
}

impl IngestSession {
    pub fn new(page: IngestPageData, timing: Timing) -> Self {
        let track = |units| ProgressTrack::new(timing.estimate_duration_ms(units), timing.tick_ms);
        Self {
            assignment: track(page.assignment_units),
            mark_scheme: track(page.mark_scheme_units),
            page,
            timing,
            latest: None,
            polling: true,
            consecutive_failures: 0,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.page.job_id
    }

    pub fn status_path(&self) -> String {
        status_path(&self.page.job_id)
    }

    /// Last successfully polled status, if any. Read-only inspection; the
    /// animation ticks consult it internally.
    pub fn latest(&self) -> Option<&StatusRecord> {
        self.latest.as_ref()
    }

    pub fn track(&self, process: TrackedProcess) -> &ProgressTrack {
        match process {
            TrackedProcess::Assignment => &self.assignment,
            TrackedProcess::MarkScheme => &self.mark_scheme,
        }
    }

    fn track_mut(&mut self, process: TrackedProcess) -> &mut ProgressTrack {
        match process {
            TrackedProcess::Assignment => &mut self.assignment,
            TrackedProcess::MarkScheme => &mut self.mark_scheme,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Transport failures since the last successful poll. Read-only
    /// inspection; each failure also reports its count in [`PollOutcome::Failed`].
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// One animation tick for `process`, driven by the latest known status
    /// (`pending` before the first successful poll).
    pub fn tick(&mut self, process: TrackedProcess) -> Option<TickOutcome> {
        let status = self
            .latest
            .as_ref()
            .map_or(PENDING, |record| record.of(process))
            .to_owned();
        self.track_mut(process).tick(&status)
    }

    /// Folds one poll result into the session.
    pub fn handle_poll(&mut self, result: Result<StatusRecord, FetchError>) -> PollOutcome {
        if !self.polling {
            return PollOutcome::Ignored;
        }
        match result {
            Ok(record) => PollOutcome::Updated(self.apply_status(record)),
            Err(error) => {
                self.consecutive_failures += 1;
                PollOutcome::Failed {
                    error,
                    consecutive_failures: self.consecutive_failures,
                    message: OverallMessage::DISCONNECTED,
                }
            }
        }
    }

    fn apply_status(&mut self, record: StatusRecord) -> StatusUpdate {
        self.consecutive_failures = 0;

        let lines = StatusLines::from_record(&record);
        let bars = TrackedProcess::ALL
            .into_iter()
            .filter_map(|process| {
                let status = record.of(process);
                self.track_mut(process)
                    .apply_poll(status)
                    .map(|effect| (process, effect))
            })
            .collect();

        let (message, stop_polling, redirect) = if record.is_completed() {
            let redirect = Redirect {
                url: assessment_path(&self.page.job_id),
                delay_ms: self.timing.redirect_delay_ms,
            };
            (OverallMessage::COMPLETED, true, Some(redirect))
        } else if record.is_failed() {
            (OverallMessage::FAILED, true, None)
        } else {
            (OverallMessage::PROCESSING, false, None)
        };

        self.polling = !stop_polling;
        self.latest = Some(record);

        StatusUpdate {
            lines,
            bars,
            message,
            stop_polling,
            redirect,
        }
    }
}
