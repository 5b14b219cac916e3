//! Common error types used throughout the crate.

use std::collections::TryReserveError;
use std::fmt;

use crate::int_vectors::flags::Restriction;
use crate::int_vectors::IntVector;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures of [`IntVector`] operations.
///
/// Every variant except [`Error::Allocation`] guarantees that the vector was
/// left untouched. An allocation error raised after in-place work (for example
/// the compaction in [`IntVector::remove_all`]) keeps that work applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated preconditions.
    InvalidArgument(String),
    /// An index was not below the number of live elements.
    OutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The searched value or element does not exist.
    NotFound,
    /// The operation needs at least one element.
    Empty,
    /// The requested number of slots exceeds the capacity ceiling.
    CapacityExceeded {
        /// Capacity ceiling of the vector.
        max: usize,
        /// Capacity at the time of the call.
        capacity: usize,
        /// Number of slots the operation needed.
        requested: usize,
    },
    /// Wrapper around [`TryReserveError`] values.
    Allocation(TryReserveError),
    /// A mode flag blocked the operation.
    Mutability(Restriction),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` for errors raised by a mode flag.
    pub const fn is_mutability(&self) -> bool {
        matches!(self, Self::Mutability(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
            Error::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
            Error::NotFound => write!(f, "no matching element"),
            Error::Empty => write!(f, "vector is empty"),
            Error::CapacityExceeded {
                max,
                capacity,
                requested,
            } => write!(
                f,
                "capacity cannot exceed {max} (current capacity {capacity}, requested {requested})"
            ),
            Error::Allocation(err) => write!(f, "allocation error: {err}"),
            Error::Mutability(restriction) => write!(f, "attempt to edit {restriction} vector"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Allocation(err)
    }
}

/// Error returned by [`IntVector::destroy`] when the vector refused destruction.
///
/// The vector is handed back alive and usable through [`DestroyError::into_inner`].
pub struct DestroyError {
    vector: IntVector,
    error: Error,
}

impl DestroyError {
    pub(crate) fn new(vector: IntVector, error: Error) -> Self {
        Self { vector, error }
    }

    /// Returns the reason destruction was refused.
    pub const fn error(&self) -> &Error {
        &self.error
    }

    /// Recovers the vector that was not destroyed.
    pub fn into_inner(self) -> IntVector {
        self.vector
    }
}

impl fmt::Debug for DestroyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestroyError")
            .field("error", &self.error)
            .field("len", &self.vector.len())
            .field("capacity", &self.vector.capacity())
            .finish()
    }
}

impl fmt::Display for DestroyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot destroy vector: {}", self.error)
    }
}

impl std::error::Error for DestroyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<DestroyError> for Error {
    fn from(err: DestroyError) -> Self {
        err.error
    }
}
