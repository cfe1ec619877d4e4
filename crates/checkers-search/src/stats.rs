//! Search analytics.

use serde::Serialize;
use std::time::Duration;

/// Counters from a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Children recursed into, one per explored move.
    pub nodes_expanded: u64,
    /// Alpha-beta cutoffs, one per cutoff regardless of siblings skipped.
    pub nodes_pruned: u64,
    /// Deepest ply reached, the root being ply 0.
    pub max_depth: u32,
    /// The first three root moves after ordering, e.g.
    /// `Max Order (first 3): (2,1)->(3,0), (2,1)->(3,2), (2,3)->(3,2)`.
    pub ordering: String,
}

impl SearchStats {
    /// Cutoffs as a percentage of expanded nodes.
    pub fn pruning_ratio(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / self.nodes_expanded as f64 * 100.0
        }
    }
}

/// Running totals over a game, kept by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchReport {
    pub total_moves: u64,
    pub searches: u64,
    pub states_explored: u64,
    pub pruned_states: u64,
    pub max_depth: u32,
    pub total_search_secs: f64,
    /// Ordering trace of the most recent search.
    pub last_ordering: String,
}

impl SearchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a move played, whether chosen by search or not.
    pub fn record_move(&mut self) {
        self.total_moves += 1;
    }

    /// Adds one search's counters and wall-clock time.
    pub fn record_search(&mut self, stats: &SearchStats, elapsed: Duration) {
        self.searches += 1;
        self.states_explored += stats.nodes_expanded;
        self.pruned_states += stats.nodes_pruned;
        self.max_depth = self.max_depth.max(stats.max_depth);
        self.total_search_secs += elapsed.as_secs_f64();
        self.last_ordering.clone_from(&stats.ordering);
    }

    pub fn average_search_time(&self) -> Duration {
        if self.searches == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(self.total_search_secs / self.searches as f64)
        }
    }

    /// Pruned states as a percentage of explored states.
    pub fn ordering_gain(&self) -> f64 {
        if self.states_explored == 0 {
            0.0
        } else {
            self.pruned_states as f64 / self.states_explored as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(expanded: u64, pruned: u64, depth: u32) -> SearchStats {
        SearchStats {
            nodes_expanded: expanded,
            nodes_pruned: pruned,
            max_depth: depth,
            ordering: format!("Max Order (first 3): d{}", depth),
        }
    }

    #[test]
    fn pruning_ratio() {
        assert_eq!(SearchStats::default().pruning_ratio(), 0.0);
        assert_eq!(stats(200, 50, 3).pruning_ratio(), 25.0);
    }

    #[test]
    fn report_accumulates() {
        let mut report = SearchReport::new();
        report.record_search(&stats(100, 10, 3), Duration::from_millis(20));
        report.record_move();
        report.record_search(&stats(300, 30, 2), Duration::from_millis(40));
        report.record_move();
        report.record_move();

        assert_eq!(report.total_moves, 3);
        assert_eq!(report.searches, 2);
        assert_eq!(report.states_explored, 400);
        assert_eq!(report.pruned_states, 40);
        assert_eq!(report.max_depth, 3);
        assert_eq!(report.ordering_gain(), 10.0);
        assert_eq!(report.last_ordering, "Max Order (first 3): d2");
        let avg = report.average_search_time().as_secs_f64();
        assert!((avg - 0.030).abs() < 1e-9);
    }

    #[test]
    fn empty_report() {
        let report = SearchReport::new();
        assert_eq!(report.average_search_time(), Duration::ZERO);
        assert_eq!(report.ordering_gain(), 0.0);
    }

    #[test]
    fn report_serializes() {
        let mut report = SearchReport::new();
        report.record_search(&stats(10, 1, 1), Duration::from_millis(5));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["states_explored"], 10);
        assert_eq!(json["pruned_states"], 1);
    }
}
