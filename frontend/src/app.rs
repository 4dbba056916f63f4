use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{ingesting, upload};

/// Binds every page controller once the document structure is available.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(mount_controllers);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .ok();
    } else {
        mount_controllers();
    }
}

fn mount_controllers() {
    ingesting::mount();
    upload::mount();
}
