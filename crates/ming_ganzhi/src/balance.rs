//! Count-to-ratio balances over an enumerated axis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of a balance map: raw tally plus its share of the map total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub count: u32,
    pub ratio: f64,
}

/// Convert a count map into a balance map.
///
/// Ratios are taken over the map's own total. An all-zero map divides by a
/// substituted 1 instead of failing, so every ratio reports as 0.0.
pub fn balance_map<K: Ord + Copy>(counts: &BTreeMap<K, u32>) -> BTreeMap<K, Balance> {
    let total: u32 = counts.values().sum();
    let denominator = if total == 0 { 1 } else { total } as f64;
    counts
        .iter()
        .map(|(&key, &count)| {
            (
                key,
                Balance {
                    count,
                    ratio: count as f64 / denominator,
                },
            )
        })
        .collect()
}
