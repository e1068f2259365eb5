//! errors returned by [`crate::Queue`] operations.

use thiserror::Error;

/// why a queue operation did not go through.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum QueueError {
  /// no memory could be obtained for a new node.
  #[error("memory allocation error")]
  Alloc,
  /// the operation needs an item, but the queue holds none.
  #[error("queue is empty")]
  Empty,
}

impl QueueError {
  /// the [`Severity`](crate::Severity) this error is reported with.
  pub const fn severity(self) -> crate::Severity {
    match self {
      Self::Alloc => crate::Severity::Fatal,
      Self::Empty => crate::Severity::Error,
    }
  }
}
