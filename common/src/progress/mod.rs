//! Simulated progress for one processing stage.
//!
//! The server only reports coarse tokens, so the page animates a bar towards
//! an estimate and holds it at [`CAP`] until the stage really completes.

use crate::jobs::Phase;

/// Highest value fake progress can reach before the stage completes.
pub const CAP: f64 = 95.0;
pub const FULL: f64 = 100.0;
/// Fill colour of a bar whose stage failed.
pub const ERROR_FILL: &str = "#dc3545";

/// Percentage added per tick so a bar reaches 100% after `duration_ms`.
pub fn step_percent(duration_ms: i64, tick_ms: u32) -> f64 {
    FULL / (duration_ms as f64 / f64::from(tick_ms))
}

/// Next progress value for a stage currently reporting `status`.
///
/// Running stages advance by `step` up to [`CAP`], a completed stage jumps to
/// 100, and any other token (errors included) leaves the value alone.
pub fn advance(current: f64, step: f64, status: &str) -> f64 {
    match Phase::of(status) {
        Phase::Running if current < CAP => (current + step).min(CAP),
        Phase::Succeeded => FULL,
        _ => current,
    }
}

/// What a bar should display.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    /// Unrounded fill width in percent.
    pub width_percent: f64,
    /// Rounded percentage text, e.g. `"42%"`.
    pub label: String,
}

impl BarFrame {
    pub fn at(value: f64) -> Self {
        Self {
            width_percent: value,
            label: format!("{}%", value.round()),
        }
    }

    /// CSS `width` value.
    pub fn width(&self) -> String {
        format!("{}%", self.width_percent)
    }
}

/// Reconciliation of a bar against a polled status.
#[derive(Debug, Clone, PartialEq)]
pub enum BarEffect {
    /// Stop the animation and show a full bar.
    Complete(BarFrame),
    /// Stop the animation and paint the bar with [`ERROR_FILL`].
    MarkError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    Running,
    Succeeded,
    Failed,
}

/// Result of one animation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub frame: BarFrame,
    /// The stage reached a terminal status; its timer must be cancelled.
    pub finished: bool,
}

/// Animated progress of one stage: running until its status becomes
/// `completed` (success) or an error token (failure), then frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrack {
    value: f64,
    step: f64,
    state: TrackState,
}

impl ProgressTrack {
    pub fn new(duration_ms: i64, tick_ms: u32) -> Self {
        Self {
            value: 0.0,
            step: step_percent(duration_ms, tick_ms),
            state: TrackState::Running,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn state(&self) -> TrackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TrackState::Running
    }

    /// Advances the animation by one tick. Returns `None` once the track is
    /// terminal, since a cancelled timer may still deliver a queued tick.
    pub fn tick(&mut self, status: &str) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        self.value = advance(self.value, self.step, status);
        let finished = self.settle(Phase::of(status));
        Some(TickOutcome {
            frame: BarFrame::at(self.value),
            finished,
        })
    }

    /// Applies a freshly polled status. Terminal tokens stop the track and
    /// yield the bar change; anything else leaves the animation to the timer.
    pub fn apply_poll(&mut self, status: &str) -> Option<BarEffect> {
        match Phase::of(status) {
            Phase::Succeeded => {
                self.value = FULL;
                self.state = TrackState::Succeeded;
                Some(BarEffect::Complete(BarFrame::at(FULL)))
            }
            Phase::Failed => {
                self.state = TrackState::Failed;
                Some(BarEffect::MarkError)
            }
            Phase::Running | Phase::Unknown => None,
        }
    }

    fn settle(&mut self, phase: Phase) -> bool {
        self.state = match phase {
            Phase::Succeeded => TrackState::Succeeded,
            Phase::Failed => TrackState::Failed,
            Phase::Running | Phase::Unknown => return false,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING: [&str; 4] = ["processing", "pending", "queued", "starting"];

    #[test]
    fn step_reaches_full_over_the_estimate() {
        // 2500 ms at 100 ms per tick is 25 ticks of 4%.
        assert_eq!(step_percent(2500, 100), 4.0);
        assert_eq!(step_percent(1000, 100), 10.0);
    }

    #[test]
    fn running_progress_is_monotonic_and_capped() {
        let step = step_percent(1000, 100);
        let mut value = 0.0;
        for i in 0..200 {
            let next = advance(value, step, RUNNING[i % RUNNING.len()]);
            assert!(next >= value, "progress went backwards at tick {i}");
            assert!(next <= CAP, "progress exceeded cap at tick {i}: {next}");
            value = next;
        }
        assert_eq!(value, CAP);
    }

    #[test]
    fn completed_is_exactly_full_from_anywhere() {
        for current in [0.0, 12.5, 94.99, 95.0, 100.0] {
            assert_eq!(advance(current, 4.0, "completed"), FULL);
        }
        assert_eq!(advance(FULL, 4.0, "completed"), FULL);
    }

    #[test]
    fn error_family_leaves_progress_unchanged() {
        for status in ["error", "error_timeout", "error: bad pdf"] {
            for current in [0.0, 33.3, 95.0] {
                assert_eq!(advance(current, 4.0, status), current, "{status}");
            }
        }
    }

    #[test]
    fn unknown_status_holds() {
        assert_eq!(advance(40.0, 4.0, "not_found"), 40.0);
    }

    #[test]
    fn frame_label_is_rounded_width_is_not() {
        let frame = BarFrame::at(100.0 / 7.0);
        assert_eq!(frame.label, "14%");
        assert!(frame.width().starts_with("14.28"));
        assert_eq!(BarFrame::at(95.0).width(), "95%");
        assert_eq!(BarFrame::at(2.5).label, "3%");
    }

    #[test]
    fn track_finishes_on_completed_tick() {
        let mut track = ProgressTrack::new(5000, 100);
        let first = track.tick("processing").unwrap();
        assert_eq!(first.frame.label, "2%");
        assert!(!first.finished);

        let done = track.tick("completed").unwrap();
        assert!(done.finished);
        assert_eq!(done.frame, BarFrame::at(FULL));
        assert_eq!(track.state(), TrackState::Succeeded);
        assert!(track.tick("completed").is_none());
    }

    #[test]
    fn track_freezes_on_error_tick() {
        let mut track = ProgressTrack::new(1000, 100);
        track.tick("processing");
        let failed = track.tick("error: timeout").unwrap();
        assert!(failed.finished);
        assert_eq!(failed.frame.label, "10%");
        assert_eq!(track.state(), TrackState::Failed);
        assert!(track.tick("processing").is_none());
    }

    #[test]
    fn track_pauses_at_cap_without_finishing() {
        let mut track = ProgressTrack::new(1000, 100);
        for _ in 0..30 {
            let outcome = track.tick("processing").unwrap();
            assert!(!outcome.finished);
        }
        assert_eq!(track.value(), CAP);
        assert!(track.is_running());
    }

    #[test]
    fn poll_completion_forces_full_bar() {
        let mut track = ProgressTrack::new(10_000, 100);
        track.tick("processing");
        assert_eq!(
            track.apply_poll("completed"),
            Some(BarEffect::Complete(BarFrame::at(FULL)))
        );
        assert_eq!(track.value(), FULL);
        assert!(!track.is_running());
    }

    #[test]
    fn poll_error_marks_bar() {
        let mut track = ProgressTrack::new(10_000, 100);
        assert_eq!(track.apply_poll("error_timeout"), Some(BarEffect::MarkError));
        assert_eq!(track.state(), TrackState::Failed);
        assert_eq!(track.apply_poll("processing"), None);
    }
}
