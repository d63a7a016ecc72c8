//! Weighted selection primitives
//!
//! Two strategies over caller-supplied data, neither keeping any state:
//! dense selection binary-searches a cumulative table, sparse selection
//! scans a per-entry weight array where most entries are excluded.

use crate::rng::GameRng;

/// One entry of a sparse probability array
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Not a candidate at all
    Excluded,
    /// A candidate with the given (possibly zero) weight
    Weighted(f64),
}

impl Slot {
    pub fn weight(self) -> f64 {
        match self {
            Slot::Excluded => 0.0,
            Slot::Weighted(w) => w,
        }
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Slot::Excluded)
    }

    /// Whether the slot can ever be drawn
    pub fn is_live(self) -> bool {
        self.weight() > 0.0
    }
}

/// Index `i` with `table[i] <= p < table[i + 1]` in a cumulative table
///
/// `table` holds `n + 1` non-decreasing entries starting at zero. Zero-width
/// entries are never returned. Drawing outside `[0, table[n])` is a bug.
pub fn select_dense(table: &[f64], p: f64) -> usize {
    assert!(table.len() >= 2, "cumulative table needs at least one entry");
    let n = table.len() - 1;
    assert!(
        p >= 0.0 && p < table[n],
        "draw {p} outside cumulative mass {}",
        table[n]
    );
    table[1..n].partition_point(|&edge| edge <= p)
}

/// Draw from a cumulative table
pub fn sample_dense(table: &[f64], rng: &mut GameRng) -> usize {
    let total = table.last().copied().unwrap_or(0.0);
    select_dense(table, rng.range_f64(0.0, total))
}

/// Scan a sparse array with a fixed draw `p`
///
/// Returns the first live slot where the remaining draw falls below its
/// weight. If rounding exhausts the scan the last live slot is returned.
pub fn select_sparse_at(slots: &[Slot], p: f64) -> usize {
    let mut remaining = p;
    let mut last_live = None;
    for (i, slot) in slots.iter().enumerate() {
        let w = slot.weight();
        if w <= 0.0 {
            continue;
        }
        if remaining < w {
            return i;
        }
        remaining -= w;
        last_live = Some(i);
    }
    match last_live {
        Some(i) => i,
        None => panic!("sparse selection over a distribution with no live slot"),
    }
}

/// Draw uniformly in `[0, total)` and scan a sparse array
pub fn select_sparse(slots: &[Slot], total: f64, rng: &mut GameRng) -> usize {
    assert!(total > 0.0, "sparse selection with zero total mass");
    select_sparse_at(slots, rng.range_f64(0.0, total))
}

/// A sparse probability array together with its mass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseTable {
    slots: Vec<Slot>,
    total: f64,
}

impl SparseTable {
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        let total = slots.iter().map(|s| s.weight()).sum();
        Self { slots, total }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn weight(&self, index: usize) -> f64 {
        self.slots.get(index).map_or(0.0, |s| s.weight())
    }

    /// No candidate can be drawn
    pub fn is_empty(&self) -> bool {
        self.total <= 0.0
    }

    /// Probability of drawing `index`
    pub fn probability(&self, index: usize) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.weight(index) / self.total
        }
    }

    pub fn select(&self, rng: &mut GameRng) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(select_sparse(&self.slots, self.total, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dense_skips_zero_width() {
        let table = [0.0, 3.0, 3.0, 10.0];
        assert_eq!(select_dense(&table, 0.0), 0);
        assert_eq!(select_dense(&table, 2.9), 0);
        assert_eq!(select_dense(&table, 3.0), 2);
        assert_eq!(select_dense(&table, 9.99), 2);
    }

    #[test]
    #[should_panic]
    fn test_dense_draw_at_total_panics() {
        select_dense(&[0.0, 3.0, 10.0], 10.0);
    }

    #[test]
    #[should_panic]
    fn test_dense_empty_mass_panics() {
        select_dense(&[0.0, 0.0], 0.0);
    }

    #[test]
    fn test_sparse_single_entry() {
        let slots = [Slot::Excluded, Slot::Weighted(0.0), Slot::Weighted(5.0), Slot::Excluded];
        for p in [0.0, 1.0, 4.999_999] {
            assert_eq!(select_sparse_at(&slots, p), 2);
        }
        // A total that overshoots the true sum still resolves
        assert_eq!(select_sparse_at(&slots, 5.000_000_1), 2);
    }

    #[test]
    fn test_sparse_overshoot_picks_last_live() {
        let slots = [Slot::Weighted(1.0), Slot::Weighted(2.0), Slot::Excluded];
        assert_eq!(select_sparse_at(&slots, 3.5), 1);
    }

    #[test]
    #[should_panic]
    fn test_sparse_zero_total_panics() {
        let mut rng = GameRng::new(1);
        select_sparse(&[Slot::Excluded], 0.0, &mut rng);
    }

    #[test]
    fn test_sparse_table() {
        let table = SparseTable::from_slots(vec![Slot::Excluded, Slot::Weighted(1.0), Slot::Weighted(3.0)]);
        assert_eq!(table.total(), 4.0);
        assert_eq!(table.probability(2), 0.75);
        assert_eq!(table.probability(0), 0.0);
        let mut rng = GameRng::new(9);
        for _ in 0..100 {
            assert!(matches!(table.select(&mut rng), Some(1) | Some(2)));
        }
        let empty = SparseTable::from_slots(vec![Slot::Excluded, Slot::Weighted(0.0)]);
        assert!(empty.is_empty());
        assert_eq!(empty.select(&mut rng), None);
    }

    proptest! {
        #[test]
        fn prop_dense_bracket(weights in prop::collection::vec(0.0f64..10.0, 1..20), frac in 0.0f64..1.0) {
            let mut table = vec![0.0];
            for w in &weights {
                let last = *table.last().unwrap();
                table.push(last + w);
            }
            let total = *table.last().unwrap();
            prop_assume!(total > 0.0);
            let p = (frac * total).min(total * (1.0 - 1e-12));
            let i = select_dense(&table, p);
            prop_assert!(table[i] <= p && p < table[i + 1]);
        }

        #[test]
        fn prop_sparse_returns_live_slot(weights in prop::collection::vec(prop::option::of(0.0f64..5.0), 1..20), frac in 0.0f64..1.0) {
            let slots: Vec<Slot> = weights
                .iter()
                .map(|w| w.map_or(Slot::Excluded, Slot::Weighted))
                .collect();
            let table = SparseTable::from_slots(slots);
            prop_assume!(!table.is_empty());
            let i = select_sparse_at(table.slots(), frac * table.total());
            prop_assert!(table.slots()[i].is_live());
        }
    }
}
