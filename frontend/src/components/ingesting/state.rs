//! Runtime state of the ingesting page controller.
//!
//! [`IngestController`] bundles the pure [`IngestSession`] with the element
//! handles it paints and the three interval timers that drive it. The timers
//! are plain `Option<Interval>` slots: `Some` while scheduled, `None` once
//! cancelled, which is how `update.rs` stops a bar or the poller.

use gloo_timers::callback::Interval;

use common::ingest::IngestSession;
use common::jobs::TrackedProcess;

use super::page::IngestingPage;

/// Everything the ingesting page's timers share: the session, the element
/// handles and the timers themselves. Lives behind an `Rc<RefCell<_>>` that
/// each timer callback holds.
pub struct IngestController {
    pub session: IngestSession,
    pub page: IngestingPage,
    pub timers: Timers,
}

#[derive(Default)]
pub struct Timers {
    pub assignment: Option<Interval>,
    pub mark_scheme: Option<Interval>,
    pub poller: Option<Interval>,
}

impl Timers {
    pub fn animation_mut(&mut self, process: TrackedProcess) -> &mut Option<Interval> {
        match process {
            TrackedProcess::Assignment => &mut self.assignment,
            TrackedProcess::MarkScheme => &mut self.mark_scheme,
        }
    }

    pub fn cancel_animation(&mut self, process: TrackedProcess) {
        cancel(self.animation_mut(process).take());
    }

    pub fn cancel_poller(&mut self) {
        cancel(self.poller.take());
    }
}

/// Cancels an interval. The drop is deferred to a microtask because the
/// caller may be running inside that interval's own callback.
fn cancel(interval: Option<Interval>) {
    if let Some(interval) = interval {
        wasm_bindgen_futures::spawn_local(async move {
            drop(interval);
        });
    }
}
