//! Best score record
//!
//! Stored as the decimal string of a non-negative integer. Anything that is
//! missing, unreadable or malformed counts as zero.

use serde::{Deserialize, Serialize};

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::{PersistRequest, PersistenceAdapter, PersistenceError};

/// Highest score achieved, never decreasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    pub const STORAGE_KEY: &'static str = BEST_SCORE_KEY;

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Parse the stored representation
    pub fn parse(raw: &str) -> Result<u32, PersistenceError> {
        raw.trim().parse::<u32>().map_err(|_| PersistenceError::Malformed {
            key: Self::STORAGE_KEY.to_string(),
            value: raw.to_string(),
        })
    }

    /// Read the stored best score, falling back to zero on any failure
    pub fn load(store: &dyn PersistenceAdapter) -> Self {
        let loaded = store
            .load(Self::STORAGE_KEY)
            .and_then(|raw| raw.as_deref().map(Self::parse).transpose());

        match loaded {
            Ok(Some(value)) => {
                log::info!("Loaded best score: {}", value);
                Self::new(value)
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Error loading best score: {}", e);
                Self::default()
            }
        }
    }

    /// Take `other` only if it is higher. Returns true if the value changed.
    pub fn merge(&mut self, other: u32) -> bool {
        if other > self.value {
            self.value = other;
            true
        } else {
            false
        }
    }

    /// Write request for the current value
    pub fn save_request(&self) -> PersistRequest {
        PersistRequest::new(Self::STORAGE_KEY, self.value.to_string())
    }
}
