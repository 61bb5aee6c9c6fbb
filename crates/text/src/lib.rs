//! Document text access for symbol scanning.
//!
//! The scanners never own document text. They borrow a read-only view through
//! [`TextAccess`], which the host editor attaches for the duration of a scan.
//!
//! * [`DocumentId`]: opaque handle for an open document
//! * [`TextAccess`]: length, line lookup, ranged regex search and extraction
//! * [`TextSnapshot`]: the indexed copy hosts hand out, built from a `str` or a
//!   [`ropey::Rope`]
//! * [`find_next`]: the shared match-extraction primitive used by both the
//!   incremental and the on-demand scanner

mod access;
mod document;
mod find;
mod snapshot;

pub use access::TextAccess;
pub use document::DocumentId;
pub use find::{Candidate, find_next, is_leading_noise};
pub use snapshot::TextSnapshot;
