//! Message handling for the ingesting page.
//!
//! Every timer and fetch continuation funnels into [`update`], which asks the
//! [`IngestSession`](common::ingest::IngestSession) what changed and applies
//! the answer to the page and the timers.
//!
//! Key behaviors
//! - `Tick`: advances one progress bar and cancels its timer once the stage
//!   is completed or failed.
//! - `Poll`: spawns a status request unless the poller has already stopped.
//! - `StatusFetched`: repaints status lines, bars and the overall message;
//!   stops the poller on a terminal job and schedules the redirect on success.
//! - Transport failures are logged with `gloo_console::error!` and shown as
//!   the connectivity message; the poller keeps running.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::{error, log};

use common::ingest::{PollOutcome, StatusUpdate};
use common::jobs::TrackedProcess;

use super::helpers::{fetch_status, redirect_after};
use super::messages::Msg;
use super::state::IngestController;

pub type SharedController = Rc<RefCell<IngestController>>;

/// Routes `msg` to the controller.
///
/// A message is dropped only when it is dispatched re-entrantly, from inside
/// an `update` that already holds the controller. Timer callbacks and fetch
/// continuations each run as their own task on the single-threaded event
/// loop, after the previous `update` has returned, so poll results and ticks
/// are never lost this way.
pub fn dispatch(controller: &SharedController, msg: Msg) {
    let Ok(mut state) = controller.try_borrow_mut() else {
        return;
    };
    update(&mut state, controller, msg);
}

fn update(state: &mut IngestController, controller: &SharedController, msg: Msg) {
    match msg {
        Msg::Tick(process) => tick(state, process),
        Msg::Poll => {
            if !state.session.is_polling() {
                return;
            }
            let path = state.session.status_path();
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_status(&path).await;
                dispatch(&controller, Msg::StatusFetched(result));
            });
        }
        Msg::StatusFetched(result) => match state.session.handle_poll(result) {
            PollOutcome::Updated(update) => apply_status(state, update),
            PollOutcome::Failed {
                error: err,
                consecutive_failures,
                message,
            } => {
                error!(format!(
                    "Error fetching status for job {} ({} in a row): {}",
                    state.session.job_id(),
                    consecutive_failures,
                    err
                ));
                state.page.show_message(&message);
            }
            PollOutcome::Ignored => {}
        },
    }
}

fn tick(state: &mut IngestController, process: TrackedProcess) {
    let Some(outcome) = state.session.tick(process) else {
        state.timers.cancel_animation(process);
        return;
    };
    state.page.paint_bar(process, &outcome.frame);
    if outcome.finished {
        state.timers.cancel_animation(process);
    }
}

fn apply_status(state: &mut IngestController, update: StatusUpdate) {
    state.page.show_status_lines(&update.lines);

    for (process, effect) in &update.bars {
        state.timers.cancel_animation(*process);
        state.page.apply_bar_effect(*process, effect);
    }

    state.page.show_message(&update.message);
    if update.stop_polling {
        state.timers.cancel_poller();
    }
    if let Some(redirect) = update.redirect {
        log!(format!(
            "Job {} completed, redirecting to {}",
            state.session.job_id(),
            redirect.url
        ));
        redirect_after(redirect.url, redirect.delay_ms);
    }
}
