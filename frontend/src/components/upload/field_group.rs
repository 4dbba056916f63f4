use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use common::model::upload::{FieldGroupIds, FieldGroupLayout, FieldState};

use crate::components::dom::{html_element, input_element};

/// The six elements of one PDF-or-images choice on the upload form.
pub struct FieldGroup {
    pub pdf_radio: HtmlInputElement,
    pub images_radio: HtmlInputElement,
    pub pdf_container: HtmlElement,
    pub images_container: HtmlElement,
    pub pdf_input: HtmlInputElement,
    pub images_input: HtmlInputElement,
}

impl FieldGroup {
    /// `None` unless all six elements are present.
    pub fn lookup(document: &Document, ids: &FieldGroupIds) -> Option<Self> {
        Some(Self {
            pdf_radio: input_element(document, &ids.pdf_radio)?,
            images_radio: input_element(document, &ids.images_radio)?,
            pdf_container: html_element(document, &ids.pdf_container)?,
            images_container: html_element(document, &ids.images_container)?,
            pdf_input: input_element(document, &ids.pdf_input)?,
            images_input: input_element(document, &ids.images_input)?,
        })
    }

    /// Shows and requires the selected side, hides and clears the other.
    pub fn refresh(&self) {
        let layout = FieldGroupLayout::from_selection(
            self.pdf_radio.checked(),
            self.images_radio.checked(),
        );
        apply(&self.pdf_container, &self.pdf_input, &layout.pdf);
        apply(&self.images_container, &self.images_input, &layout.images);
    }

    /// Applies the current selection and keeps it applied.
    ///
    /// Registers a `change` listener on both radios that calls [`refresh`],
    /// then refreshes once so the form starts consistent with whichever radio
    /// the template pre-checked. The listener closures are leaked with
    /// `forget`: they live as long as the page.
    ///
    /// # Returns
    /// The shared group, for callers (and tests) that want to inspect the
    /// elements afterwards.
    ///
    /// [`refresh`]: FieldGroup::refresh
    pub fn bind(self) -> Rc<Self> {
        let group = Rc::new(self);
        for radio in [&group.pdf_radio, &group.images_radio] {
            let handle = group.clone();
            let on_change = Closure::<dyn Fn()>::new(move || handle.refresh());
            radio
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .ok();
            on_change.forget();
        }
        group.refresh();
        group
    }
}

fn apply(container: &HtmlElement, input: &HtmlInputElement, state: &FieldState) {
    container.style().set_property("display", state.display()).ok();
    input.set_required(state.required);
    if state.clear {
        input.set_value("");
    }
}
