use thiserror::Error;

/// Why a status poll produced no usable [`crate::jobs::StatusRecord`].
///
/// Every variant is a transport failure: the poller logs it, shows the
/// connectivity message and tries again on its next tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("invalid status payload: {0}")]
    Decode(String),
}
