use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    submitted_at: Instant,
}

/// Collapses bursts of keystrokes into one search per quiet window.
///
/// Every accepted submission bumps the generation; results computed for an
/// older generation must be discarded (see [`QueryDebouncer::is_current`]).
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    quiet_window: Duration,
    generation: u64,
    last_query: Option<String>,
    pending: Option<Pending>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl QueryDebouncer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            generation: 0,
            last_query: None,
            pending: None,
        }
    }

    /// Records `query` as the latest input. A query identical to the previous
    /// submission is ignored and `None` is returned.
    pub fn submit(&mut self, query: &str, now: Instant) -> Option<u64> {
        if self.last_query.as_deref() == Some(query) {
            return None;
        }

        self.generation += 1;
        self.last_query = Some(query.to_string());
        self.pending = Some(Pending {
            ticket: Ticket {
                generation: self.generation,
                query: query.to_string(),
            },
            submitted_at: now,
        });
        Some(self.generation)
    }

    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| {
                now.saturating_duration_since(pending.submitted_at) >= self.quiet_window
            });
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.ticket)
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|pending| {
            self.quiet_window
                .saturating_sub(now.saturating_duration_since(pending.submitted_at))
        })
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
