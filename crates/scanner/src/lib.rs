//! Incremental symbol scanning for an editor.
//!
//! Two paths share one pipeline of [`find_next`](symscan_text::find_next),
//! [`normalize()`] and the [`signature`] heuristics:
//!
//! - [`IncrementalScanner`] runs in bounded slices from the host's event loop
//!   and publishes function names as user keywords for highlighting.
//! - [`on_demand`] scans a whole document synchronously to build the symbol
//!   drop-down or to jump to a symbol across open documents.

pub mod functions;
pub mod host;
pub mod incremental;
pub mod list;
pub mod normalize;
pub mod notify;
pub mod on_demand;
pub mod queue;
pub mod signature;

#[cfg(test)]
mod test_support;

// Only the rope-backed integration tests use these.
#[cfg(test)]
use ropey as _;
#[cfg(test)]
use tracing_subscriber as _;

pub use functions::{FunctionEntry, FunctionMap};
pub use host::EditorHost;
pub use incremental::{IncrementalScanner, Reschedule, ScanPhase, ScanStats, ScannerCfg};
pub use list::{FunctionList, ListItem};
pub use normalize::normalize;
pub use notify::EditorNotification;
pub use on_demand::{Target, find_functions_now, function_list, goto_symbol};
pub use queue::{EventKind, EventQueue, PendingEvent};
pub use signature::{Signature, parse_name, parse_signature};
