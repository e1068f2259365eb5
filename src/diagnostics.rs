//! severity-classified diagnostics emitted by a [`Queue`](crate::Queue).
//!
//! a queue never prints anything itself. whenever it refuses an operation it
//! hands a [`Severity`] and a message to its [`Diagnostics`] sink, then
//! returns the matching [`QueueError`](crate::QueueError) to the caller.

use core::fmt;

/// how bad a reported event is.
///
/// the discriminants are bit flags, so hosts can filter with a mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Severity {
  Info = 0x0001,
  /// reserved for bounded queues; an unbounded queue never reports it.
  Full = 0x0002,
  Fatal = 0x0004,
  Error = 0x0008,
}

impl Severity {
  /// the numeric code of this severity.
  pub const fn code(self) -> u16 {
    self as u16
  }

  /// the upper-case name of this severity.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Info => "INFO",
      Self::Full => "FULL",
      Self::Fatal => "FATAL",
      Self::Error => "ERROR",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// a sink for queue diagnostics.
///
/// `report` is called synchronously from inside the queue operation and must
/// not panic.
pub trait Diagnostics {
  fn report(&self, severity: Severity, message: &str);
}

impl<D> Diagnostics for &D
where
  D: Diagnostics + ?Sized,
{
  fn report(&self, severity: Severity, message: &str) {
    (**self).report(severity, message);
  }
}

/// forwards diagnostics to [`tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Traced;

impl Diagnostics for Traced {
  fn report(&self, severity: Severity, message: &str) {
    let code = severity.code();
    match severity {
      Severity::Info => tracing::info!(code, "{message}"),
      Severity::Full => tracing::warn!(code, "{message}"),
      Severity::Fatal | Severity::Error => {
        tracing::error!(code, severity = severity.as_str(), "{message}")
      }
    }
  }
}

/// drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Diagnostics for Silent {
  fn report(&self, _: Severity, _: &str) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_distinct_bits() {
    let all = [Severity::Info, Severity::Full, Severity::Fatal, Severity::Error];
    let mask = all.iter().fold(0u16, |acc, s| {
      assert_eq!(s.code().count_ones(), 1);
      assert_eq!(acc & s.code(), 0);
      acc | s.code()
    });
    assert_eq!(mask, 0x000f);
  }

  #[test]
  fn display_uses_upper_case_names() {
    assert_eq!(Severity::Info.to_string(), "INFO");
    assert_eq!(Severity::Full.to_string(), "FULL");
    assert_eq!(Severity::Fatal.to_string(), "FATAL");
    assert_eq!(Severity::Error.to_string(), "ERROR");
  }

  fn report_all(sink: impl Diagnostics) {
    for severity in [Severity::Info, Severity::Full, Severity::Fatal, Severity::Error] {
      sink.report(severity, "message");
    }
  }

  #[test]
  fn stock_sinks_do_not_panic() {
    // no subscriber is installed, so `Traced` goes nowhere here.
    report_all(Traced);
    report_all(Silent);
    report_all(&Silent);
  }

  #[test]
  fn errors_map_to_severities() {
    use crate::QueueError;
    assert_eq!(QueueError::Alloc.severity(), Severity::Fatal);
    assert_eq!(QueueError::Empty.severity(), Severity::Error);
    assert_eq!(QueueError::Empty.to_string(), "queue is empty");
    assert_eq!(QueueError::Alloc.to_string(), "memory allocation error");
  }
}
