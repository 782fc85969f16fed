use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current stock level per medicine name.
///
/// Backed by a `BTreeMap` so iteration is always in ascending key order.
/// An entry with stock ≤ 0 never exists: it is removed the moment the count
/// drops that low, and an absent medicine reads as stock 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<String, u32>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock on hand for `medicine`, 0 when absent.
    pub fn stock(&self, medicine: &str) -> u32 {
        self.0.get(medicine).copied().unwrap_or(0)
    }

    /// Apply a signed delta to a medicine's stock, creating the entry on
    /// first addition and removing it entirely when the result is ≤ 0.
    pub fn adjust(&mut self, medicine: &str, delta: i64) {
        let updated = i64::from(self.stock(medicine)) + delta;
        if updated <= 0 {
            self.0.remove(medicine);
        } else {
            // Capped rather than wrapped if a delta ever exceeds u32 range.
            let stock = u32::try_from(updated).unwrap_or(u32::MAX);
            self.0.insert(medicine.to_string(), stock);
        }
    }

    /// Remove a medicine outright. Returns false when it was not present.
    pub fn remove(&mut self, medicine: &str) -> bool {
        self.0.remove(medicine).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, stock)| (name.as_str(), *stock))
    }
}
