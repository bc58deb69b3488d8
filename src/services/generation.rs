use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic load counter. Each load takes a [`Ticket`]; a ticket stops
/// being current as soon as a newer load begins, and writes made with a
/// stale ticket must be dropped.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}
