//! Handles to the optional elements of the ingesting page.
//!
//! The template decides which elements exist. Every handle is an `Option`
//! and a missing element silently skips its updates.

use web_sys::{Document, HtmlElement};

use common::ingest::{OverallMessage, StatusLines};
use common::jobs::TrackedProcess;
use common::progress::{BarEffect, BarFrame, ERROR_FILL};

use crate::components::dom::{html_element, set_text};
use crate::config::{
    ASSIGNMENT_BAR_ID, ASSIGNMENT_STATUS_ID, MARK_SCHEME_BAR_ID, MARK_SCHEME_STATUS_ID,
    MATCHING_STATUS_ID, OVERALL_STATUS_ID,
};

pub struct IngestingPage {
    pub assignment_bar: Option<HtmlElement>,
    pub mark_scheme_bar: Option<HtmlElement>,
    pub overall_status: Option<HtmlElement>,
    pub assignment_status: Option<HtmlElement>,
    pub mark_scheme_status: Option<HtmlElement>,
    pub matching_status: Option<HtmlElement>,
}

impl IngestingPage {
    pub fn lookup(document: &Document) -> Self {
        Self {
            assignment_bar: html_element(document, ASSIGNMENT_BAR_ID),
            mark_scheme_bar: html_element(document, MARK_SCHEME_BAR_ID),
            overall_status: html_element(document, OVERALL_STATUS_ID),
            assignment_status: html_element(document, ASSIGNMENT_STATUS_ID),
            mark_scheme_status: html_element(document, MARK_SCHEME_STATUS_ID),
            matching_status: html_element(document, MATCHING_STATUS_ID),
        }
    }

    pub fn bar(&self, process: TrackedProcess) -> Option<&HtmlElement> {
        match process {
            TrackedProcess::Assignment => self.assignment_bar.as_ref(),
            TrackedProcess::MarkScheme => self.mark_scheme_bar.as_ref(),
        }
    }

    pub fn paint_bar(&self, process: TrackedProcess, frame: &BarFrame) {
        if let Some(bar) = self.bar(process) {
            paint_frame(bar, frame);
        }
    }

    pub fn apply_bar_effect(&self, process: TrackedProcess, effect: &BarEffect) {
        let Some(bar) = self.bar(process) else {
            return;
        };
        match effect {
            BarEffect::Complete(frame) => paint_frame(bar, frame),
            BarEffect::MarkError => {
                bar.style().set_property("background-color", ERROR_FILL).ok();
            }
        }
    }

    pub fn show_status_lines(&self, lines: &StatusLines) {
        set_text(self.assignment_status.as_ref(), &lines.assignment);
        set_text(self.mark_scheme_status.as_ref(), &lines.mark_scheme);
        set_text(self.matching_status.as_ref(), &lines.matching);
    }

    pub fn show_message(&self, message: &OverallMessage) {
        if let Some(overall) = &self.overall_status {
            overall.set_text_content(Some(message.text));
            overall.set_class_name(message.class);
        }
    }
}

/// Fill width follows the exact value, the label the rounded one.
pub fn paint_frame(bar: &HtmlElement, frame: &BarFrame) {
    bar.style().set_property("width", &frame.width()).ok();
    bar.set_text_content(Some(&frame.label));
}
