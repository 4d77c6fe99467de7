//! Shared handler state

use chrono::{DateTime, Utc};

use crate::store::WishlistRepository;

/// Source of the current instant for analytics queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    /// Frozen instant, used to pin time windows in tests
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// State shared by all API handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub repository: WishlistRepository,
    /// Default number of users returned by the analytics summary
    pub top_users_limit: usize,
    pub clock: Clock,
}

impl AppState {
    pub fn new(repository: WishlistRepository, top_users_limit: usize) -> Self {
        Self {
            repository,
            top_users_limit,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
