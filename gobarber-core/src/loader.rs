//! Remote data with an explicit loading state and a sequence guard.
//!
//! Every fetch takes a [`Ticket`]. A response is only applied when its ticket
//! is the latest one handed out, so a slow response for an earlier selection
//! can never overwrite the data for the current one.

use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Identifies one fetch issued by a [`Loader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Loader<T> {
    state: Loadable<T>,
    latest: u64,
    name: &'static str,
}

impl<T> Loader<T> {
    pub fn new(name: &'static str) -> Self {
        Loader {
            state: Loadable::Idle,
            latest: 0,
            name,
        }
    }

    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    /// Start a fetch. Any ticket handed out before this one becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = Loadable::Loading;
        Ticket(self.latest)
    }

    /// Forget the current value and invalidate fetches still in flight.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = Loadable::Idle;
    }

    /// Apply the result of a fetch. Returns false if the ticket was stale and
    /// the result was dropped.
    pub fn finish<E: std::fmt::Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.latest {
            warn!(
                loader = self.name,
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e.to_string()),
        };
        true
    }
}
