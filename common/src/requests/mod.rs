//! Paths the ingesting page talks to.

/// Status endpoint polled by the ingesting page.
pub fn status_path(job_id: &str) -> String {
    format!("/status/{job_id}")
}

/// Page the browser is sent to once the whole job has completed.
pub fn assessment_path(job_id: &str) -> String {
    format!("/assessment/{job_id}")
}
