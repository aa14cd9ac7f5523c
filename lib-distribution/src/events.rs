//! Distribution events
//!
//! Telemetry emitted while rewards are allocated. Hosts decide where events
//! go; [`EventLog`] keeps them in memory.

use std::cell::RefCell;

use lib_types::{Address, Dec, DecCoins};
use serde::{Deserialize, Serialize};

/// Event emitted by the distribution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionEvent {
    /// Commission credited to a validator operator
    Commission { validator: Address, amount: DecCoins },
    /// Total reward granted to a validator (commission included)
    Rewards { validator: Address, amount: DecCoins },
    /// Community tax and truncation dust added to the community pool
    CommunityPoolFunded { amount: DecCoins },
    /// η moved to a new value
    NakamotoCoefficientChanged { coefficient: Dec },
}

/// Receiver for distribution events
pub trait EventSink {
    fn emit(&self, event: DistributionEvent);
}

/// Collects events in emission order
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<DistributionEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DistributionEvent> {
        self.events.borrow().clone()
    }

    /// Drain everything collected so far
    pub fn take(&self) -> Vec<DistributionEvent> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: DistributionEvent) {
        self.events.borrow_mut().push(event);
    }
}
