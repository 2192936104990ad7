//! Ticketing for overlapping lookups.
//!
//! Each lookup takes a monotonically increasing ticket; a result should only
//! be displayed while its ticket is still the latest issued. Results holding
//! superseded tickets are discarded instead of overwriting newer ones.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Issues tickets and remembers the latest one.
#[derive(Debug, Default)]
pub struct LookupSequence {
    latest: AtomicU64,
}

impl LookupSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding all previous ones.
    pub fn begin(&self) -> LookupTicket {
        LookupTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether this ticket is still the latest issued.
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
