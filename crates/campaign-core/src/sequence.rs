//! Request Sequencing
//!
//! Overlapping loads of the same resource may complete out of order. Each
//! load takes a ticket; only the response for the newest ticket is applied.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Mark every load in flight as stale. Called after a local mutation so
    /// an older list snapshot cannot overwrite it.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut seq = RequestSequence::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_makes_pending_ticket_stale() {
        let mut seq = RequestSequence::default();
        let pending = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(pending));

        let next = seq.begin();
        assert!(seq.is_current(next));
    }
}
