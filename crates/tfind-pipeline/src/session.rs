//! Search sessions and the tokens that tell a current completion from a
//! stale one.

use chrono::{DateTime, Utc};
use tfind_core::{Coordinate, TheaterRecord};
use tfind_directory::DirectoryError;

/// Identifies one search action. Later searches get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tokens; only the most recently issued one is current.
#[derive(Debug, Default)]
pub struct SessionTracker {
    issued: u64,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session, superseding any previous one.
    pub fn begin(&mut self) -> SessionToken {
        self.issued += 1;
        SessionToken(self.issued)
    }

    #[must_use]
    pub fn current(&self) -> Option<SessionToken> {
        (self.issued > 0).then_some(SessionToken(self.issued))
    }

    #[must_use]
    pub fn is_current(&self, token: SessionToken) -> bool {
        self.current() == Some(token)
    }
}

/// Results of one search, valid until the next search replaces them.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub token: SessionToken,
    pub center: Coordinate,
    pub radius_meters: f64,
    /// Filtered, in directory response order.
    pub theaters: Vec<TheaterRecord>,
    pub completed_at: DateTime<Utc>,
}

/// A finished directory fetch on its way back to the controller.
#[derive(Debug)]
pub struct Completion {
    pub token: SessionToken,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub result: Result<Vec<TheaterRecord>, DirectoryError>,
}
