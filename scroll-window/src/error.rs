use thiserror::Error;

/// Rejected viewport measurements.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("item height must be greater than zero")]
    ZeroItemHeight,
    #[error("viewport height must be greater than zero")]
    ZeroViewportHeight,
}
