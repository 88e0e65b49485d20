//! Value frequency counting
//!
//! A [`FrequencyTable`] counts how often each value occurs in a sequence.
//! Values are kept in ascending order, which makes peak selection
//! deterministic: when several values share the highest count, the lowest
//! of them is the peak.

use std::collections::BTreeMap;

/// The most frequent value and its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    pub value: u32,
    pub count: usize,
}

/// Occurrence counts per distinct value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, usize>,
}

impl FrequencyTable {
    /// Count every value yielded by `values`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `value` (0 if it never appeared).
    pub fn count(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Largest value seen, if any.
    pub fn max_value(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&v, &c)| (v, c))
    }

    /// The value with the strictly greatest count; the lowest value wins
    /// ties. `None` for an empty table.
    pub fn peak(&self) -> Option<Peak> {
        let mut best: Option<Peak> = None;
        for (value, count) in self.iter() {
            if best.is_none_or(|b| count > b.count) {
                best = Some(Peak { value, count });
            }
        }
        best
    }
}
