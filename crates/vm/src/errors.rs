use thiserror::Error;

/// Failure of the backing state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("database error: {0}")]
    Custom(String),
}

/// Broken internal invariants. These indicate a bug in the caller or in this
/// crate, never a consensus outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("arithmetic overflow")]
    Overflow,
    #[error("arithmetic underflow")]
    Underflow,
}

/// Infrastructure errors surfaced by the creation path, distinct from the
/// semantic outcome carried inside a [`CreationReport`].
///
/// [`CreationReport`]: crate::create::CreationReport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Ways a creation frame fails while still producing a well-formed report:
/// each arm maps to a consensus-visible outcome, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateFailure {
    #[error("target address is already occupied")]
    AddressCollision,
    #[error("init code halted exceptionally")]
    ExceptionalHalt,
    #[error("init code reverted")]
    Reverted,
    #[error("remaining gas cannot cover the code deposit")]
    CodeDepositOutOfGas,
    #[error("deployed code exceeds the maximum contract size")]
    CodeSizeExceeded,
}
