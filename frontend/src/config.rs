//! Element ids and attribute names of the server-rendered ingesting page.

pub const INGESTING_PAGE_ID: &str = "ingesting-page";

pub const JOB_ID_ATTR: &str = "data-job-id";
pub const ASSIGNMENT_UNITS_ATTR: &str = "data-assignment-units";
pub const MARK_SCHEME_UNITS_ATTR: &str = "data-mark-scheme-units";

pub const ASSIGNMENT_BAR_ID: &str = "assignment-progress-fill";
pub const MARK_SCHEME_BAR_ID: &str = "mark-scheme-progress-fill";

pub const OVERALL_STATUS_ID: &str = "overall-status";
pub const ASSIGNMENT_STATUS_ID: &str = "assignment-ingestion-status";
pub const MARK_SCHEME_STATUS_ID: &str = "mark-scheme-ingestion-status";
pub const MATCHING_STATUS_ID: &str = "matching-status";
