//! Mission board: posting, fulfilment, payout bookkeeping.

use hecs::Entity;
use starlanes_logic::catalog::{Product, Stockpile};
use starlanes_logic::missions::requirements_met;

/// A delivery demand posted against a body.
#[derive(Debug, Clone)]
pub struct Mission {
    /// Unique key, a rendered monotonic counter.
    pub key: String,
    /// Body whose stock must satisfy the demand.
    pub target: Entity,
    /// Required product quantities.
    pub required: Vec<(Product, f32)>,
    /// Credits paid on completion.
    pub reward: u64,
}

impl Mission {
    /// True when the target stock covers every requirement.
    pub fn can_complete(&self, target_stock: &Stockpile) -> bool {
        requirements_met(&self.required, target_stock)
    }
}

/// Active missions plus the posting countdown.
///
/// Keys are allocated from a monotonic counter and never reused, so a stale
/// key from the UI can only miss, not alias.
#[derive(Debug)]
pub struct MissionBoard {
    missions: Vec<Mission>,
    next_key: u64,
    /// Seconds until the next posting attempt.
    pub time_to_next: f32,
}

impl MissionBoard {
    pub fn new(first_delay: f32) -> Self {
        Self {
            missions: Vec::new(),
            next_key: 0,
            time_to_next: first_delay,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mission> + '_ {
        self.missions.iter()
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.key == key)
    }

    /// Post a new mission and return its key.
    pub fn post(&mut self, target: Entity, required: Vec<(Product, f32)>, reward: u64) -> String {
        let key = self.next_key.to_string();
        self.next_key += 1;
        self.missions.push(Mission {
            key: key.clone(),
            target,
            required,
            reward,
        });
        key
    }

    /// Remove the mission with `key`, returning it when present.
    pub fn remove(&mut self, key: &str) -> Option<Mission> {
        let index = self.missions.iter().position(|m| m.key == key)?;
        Some(self.missions.remove(index))
    }

    /// Advance the countdown. Returns true when it just expired; the caller
    /// decides whether to post and must reseed either way.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.time_to_next <= 0.0 {
            return false;
        }
        self.time_to_next -= delta;
        self.time_to_next <= 0.0
    }

    pub fn reseed(&mut self, seconds: f32) {
        self.time_to_next = seconds;
    }
}
