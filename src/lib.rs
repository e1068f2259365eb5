#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod diagnostics;
pub mod error;
mod node;
pub mod queue;

pub use diagnostics::{Diagnostics, Severity, Silent, Traced};
pub use error::QueueError;
pub use queue::Queue;
