use common::error::FetchError;
use common::jobs::{StatusRecord, TrackedProcess};

pub enum Msg {
    /// Animation timer of one progress bar fired.
    Tick(TrackedProcess),
    /// Poll timer fired; request the job status.
    Poll,
    StatusFetched(Result<StatusRecord, FetchError>),
}
