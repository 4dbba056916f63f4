//! Upload form: PDF-or-images toggles for the assignment and the mark scheme.
//!
//! The two groups are bound independently. A group with any element missing
//! is skipped.

use std::rc::Rc;

use gloo_console::log;

use common::model::upload::FieldGroupIds;

use crate::components::dom::document;

mod field_group;

pub use field_group::FieldGroup;

/// Binds every field group found on the page.
pub fn mount() -> Vec<Rc<FieldGroup>> {
    let Some(document) = document() else {
        return Vec::new();
    };
    [FieldGroupIds::assignment(), FieldGroupIds::mark_scheme()]
        .iter()
        .filter_map(|ids| {
            let group = FieldGroup::lookup(&document, ids)?;
            log!(format!("Binding upload choice {}", ids.pdf_radio));
            Some(group.bind())
        })
        .collect()
}
