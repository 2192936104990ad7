//! Application flows for Clima
//!
//! Wires the weather client, classifier, session, and history collaborators
//! into the lookup, history, and about surfaces consumed by the CLI.

pub mod about;
pub mod format;
pub mod history;
pub mod lookup;
pub mod sequence;

pub use about::{AppInfo, APP_INFO};
pub use history::HistoryView;
pub use lookup::{LookupOutcome, WeatherLookupFlow};
pub use sequence::{LookupSequence, LookupTicket};
