//! Submission validation
//!
//! Turns a raw submission into either an accepted word, an empty-input signal,
//! or a [`RejectionReason`] naming the first rule it broke.

mod pipeline;
mod rejection;

pub use pipeline::{Validated, validate};
pub use rejection::RejectionReason;
