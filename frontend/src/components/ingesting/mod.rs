//! Ingesting page: simulated progress bars plus status polling.
//!
//! Activates only when the `#ingesting-page` container carries a job id.
//! Two animation timers (one per bar that exists) tick every 100 ms and the
//! poller fetches `/status/{job_id}` every 2 s. All three share one
//! [`IngestController`]; each timer cancels itself once its part of the job
//! is finished, and a completed job redirects to its assessment page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Interval;

use common::config::Timing;
use common::ingest::IngestSession;
use common::jobs::TrackedProcess;
use common::model::page::IngestPageData;

use crate::components::dom::{document, html_element};
use crate::config::{
    ASSIGNMENT_UNITS_ATTR, INGESTING_PAGE_ID, JOB_ID_ATTR, MARK_SCHEME_UNITS_ATTR,
};

mod helpers;
mod messages;
mod page;
mod state;
mod update;

pub use helpers::fetch_status;
pub use messages::Msg;
pub use page::{paint_frame, IngestingPage};
pub use state::{IngestController, Timers};
pub use update::{dispatch, SharedController};

/// Binds the ingesting page controller if this is the ingesting page.
pub fn mount() -> Option<SharedController> {
    let document = document()?;
    let container = html_element(&document, INGESTING_PAGE_ID)?;

    let timing = Timing::default();
    let data = IngestPageData::from_attributes(
        container.get_attribute(JOB_ID_ATTR),
        container.get_attribute(ASSIGNMENT_UNITS_ATTR).as_deref(),
        container.get_attribute(MARK_SCHEME_UNITS_ATTR).as_deref(),
        &timing,
    )?;
    log!(format!(
        "Tracking ingestion of job {} ({} assignment units, {} mark scheme units)",
        data.job_id, data.assignment_units, data.mark_scheme_units
    ));

    let controller = Rc::new(RefCell::new(IngestController {
        session: IngestSession::new(data, timing),
        page: IngestingPage::lookup(&document),
        timers: Timers::default(),
    }));
    start_timers(&controller, &timing);
    Some(controller)
}

/// Each timer callback owns a handle to the controller, so the controller
/// stays alive while any of its timers is still scheduled.
fn start_timers(controller: &SharedController, timing: &Timing) {
    let mut state = controller.borrow_mut();

    for process in TrackedProcess::ALL {
        if state.page.bar(process).is_none() {
            continue;
        }
        let handle = controller.clone();
        let interval = Interval::new(timing.tick_ms, move || {
            dispatch(&handle, Msg::Tick(process));
        });
        *state.timers.animation_mut(process) = Some(interval);
    }

    let handle = controller.clone();
    state.timers.poller = Some(Interval::new(timing.poll_ms, move || {
        dispatch(&handle, Msg::Poll);
    }));
}
