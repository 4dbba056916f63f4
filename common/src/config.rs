//! Timing constants shared by the ingest session and the page timers.

/// Timer periods and duration estimates for the ingesting page.
///
/// `Timing::default()` matches the values the server-rendered pages expect;
/// tests build tighter variants to keep assertions readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Period of each progress-bar animation timer.
    pub tick_ms: u32,
    /// Period of the status poller.
    pub poll_ms: u32,
    /// Delay between the completion message and the redirect.
    pub redirect_delay_ms: u32,
    /// Unit count used when the page attribute is missing, zero or not a number.
    pub default_units: i64,
    /// Estimated processing time per unit.
    pub unit_duration_ms: i64,
    /// Lower bound on any duration estimate.
    pub min_duration_ms: i64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            poll_ms: 2000,
            redirect_delay_ms: 1500,
            default_units: 5,
            unit_duration_ms: 500,
            min_duration_ms: 1000,
        }
    }
}

impl Timing {
    /// Estimated total animation time for a process with `units` units of work.
    pub fn estimate_duration_ms(&self, units: i64) -> i64 {
        units
            .saturating_mul(self.unit_duration_ms)
            .max(self.min_duration_ms)
    }
}
