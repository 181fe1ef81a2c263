//! Rolling in-session record of past simulations.
//!
//! The list is owned by the session state and handed to the rendering layer;
//! the calculator itself never touches it. Nothing here is ever written to
//! disk; the history dies with the session.

use time::OffsetDateTime;

use super::entities::Simulation;
use crate::util::generate_id;

/// How many entries the history panel shows. The backing list keeps the
/// whole session.
pub const DISPLAY_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub snapshot: Simulation,
    pub recorded_at: OffsetDateTime,
}

/// Append-only, most-recent-first history with whole-snapshot duplicate
/// suppression.
#[derive(Clone, Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    /// Prepends a snapshot unless an identical one is already anywhere in
    /// the list. Identity is the full snapshot (inputs and results); the
    /// entry id and timestamp never participate.
    pub fn record(&mut self, snapshot: Simulation) -> bool {
        if self.contains(&snapshot) {
            return false;
        }
        self.entries.insert(
            0,
            HistoryEntry {
                id: generate_id("sim"),
                snapshot,
                recorded_at: OffsetDateTime::now_utc(),
            },
        );
        true
    }

    pub fn contains(&self, snapshot: &Simulation) -> bool {
        self.entries.iter().any(|entry| &entry.snapshot == snapshot)
    }

    /// The most recent entries, capped at [`DISPLAY_LIMIT`].
    pub fn recent(&self) -> &[HistoryEntry] {
        let shown = self.entries.len().min(DISPLAY_LIMIT);
        &self.entries[..shown]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::simulate;
    use crate::domain::entities::SimulationInput;

    fn snapshot(sell_price: f64) -> Simulation {
        simulate(SimulationInput {
            sell_price,
            ..SimulationInput::default()
        })
    }

    #[test]
    fn test_record_prepends_most_recent_first() {
        let mut history = SessionHistory::default();
        assert!(history.record(snapshot(10_000.0)));
        assert!(history.record(snapshot(20_000.0)));
        assert!(history.record(snapshot(30_000.0)));

        let prices: Vec<f64> = history
            .recent()
            .iter()
            .map(|entry| entry.snapshot.input.sell_price)
            .collect();
        assert_eq!(prices, vec![30_000.0, 20_000.0, 10_000.0]);
    }

    #[test]
    fn test_duplicates_are_suppressed_anywhere_in_the_list() {
        let mut history = SessionHistory::default();
        history.record(snapshot(10_000.0));
        history.record(snapshot(20_000.0));
        history.record(snapshot(30_000.0));

        // The duplicate is not the head entry; membership is still detected.
        assert!(!history.record(snapshot(10_000.0)));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_distinct_snapshots_are_all_kept() {
        let mut history = SessionHistory::default();
        for price in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0] {
            assert!(history.record(snapshot(price)));
        }
        assert_eq!(history.len(), 7);
    }

    #[test]
    fn test_recent_is_capped_at_display_limit() {
        let mut history = SessionHistory::default();
        for price in 0..8 {
            history.record(snapshot(f64::from(price) * 1_000.0));
        }
        assert_eq!(history.recent().len(), DISPLAY_LIMIT);
        // Still most-recent-first after the cap.
        assert_eq!(history.recent()[0].snapshot.input.sell_price, 7_000.0);
    }

    #[test]
    fn test_starts_empty() {
        let history = SessionHistory::default();
        assert!(history.is_empty());
        assert!(history.recent().is_empty());
    }
}
