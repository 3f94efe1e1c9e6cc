//! Защита от устаревших ответов.
//!
//! Each fetch takes a ticket before it is sent. When the response arrives it
//! is applied only if no newer fetch has been issued in the meantime, so a
//! slow response to an old query can never overwrite a newer one.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a ticket for a new request; invalidates all earlier tickets.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Most recently issued ticket, `0` before the first request
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.next();
        assert!(seq.is_latest(first));

        let second = seq.next();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_out_of_order_resolution_keeps_newest() {
        let mut seq = RequestSequence::default();
        let page_2 = seq.next();
        let page_3 = seq.next();

        // page 3 resolves first and is applied, page 2 arrives late and is dropped
        assert!(seq.is_latest(page_3));
        assert!(!seq.is_latest(page_2));
    }
}
