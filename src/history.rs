//! Recent symptom checks, newest first, bounded.
//!
//! Owned by the API layer; the guidance pipeline itself keeps no state.
//! Lost on restart.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Guidance;

/// Number of checks kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviousCheck {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub symptoms: String,
    pub city: Option<String>,
    pub result: Guidance,
}

#[derive(Debug)]
pub struct CheckHistory {
    checks: VecDeque<PreviousCheck>,
    capacity: usize,
}

impl CheckHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            checks: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Store a completed check at the front, evicting the oldest beyond capacity.
    pub fn record(&mut self, symptoms: &str, city: Option<&str>, result: Guidance) -> PreviousCheck {
        let check = PreviousCheck {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            symptoms: symptoms.trim().to_string(),
            city: city.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string),
            result,
        };
        self.checks.push_front(check.clone());
        self.checks.truncate(self.capacity);
        check
    }

    /// Newest first.
    pub fn recent(&self) -> Vec<PreviousCheck> {
        self.checks.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
