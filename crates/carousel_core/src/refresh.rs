/// Sequence number attached to each feed fetch.
pub type FetchSeq = u64;

/// What to do with a fetch result once it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Newest result so far; publish it.
    Apply,
    /// A newer result was already applied.
    Stale,
}

/// Loading bookkeeping for the periodic feed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshState {
    next_seq: FetchSeq,
    in_flight: u32,
    last_applied: Option<FetchSeq>,
    first_load: bool,
}

impl Default for RefreshState {
    fn default() -> Self {
        Self {
            next_seq: 1,
            in_flight: 0,
            last_applied: None,
            first_load: true,
        }
    }
}

impl RefreshState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// True until the first successful aggregation has been published.
    pub fn first_load(&self) -> bool {
        self.first_load
    }

    pub fn last_applied(&self) -> Option<FetchSeq> {
        self.last_applied
    }

    pub fn begin(&mut self) -> FetchSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        seq
    }

    /// Records that fetch `seq` finished, successfully or not.
    pub fn finish(&mut self, seq: FetchSeq) -> Completion {
        self.in_flight = self.in_flight.saturating_sub(1);
        match self.last_applied {
            Some(applied) if applied >= seq => Completion::Stale,
            _ => Completion::Apply,
        }
    }

    /// Marks `seq` as the published snapshot.
    pub fn published(&mut self, seq: FetchSeq) {
        self.last_applied = Some(seq);
        self.first_load = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_tracks_outstanding_fetches() {
        let mut refresh = RefreshState::new();
        assert!(!refresh.loading());
        let a = refresh.begin();
        let b = refresh.begin();
        assert!(refresh.loading());
        assert_eq!(refresh.finish(b), Completion::Apply);
        refresh.published(b);
        assert!(refresh.loading());
        assert_eq!(refresh.finish(a), Completion::Stale);
        assert!(!refresh.loading());
        assert!(!refresh.first_load());
    }
}
