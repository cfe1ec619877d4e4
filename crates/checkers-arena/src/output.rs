//! Rendering of game summaries for the terminal and as JSON.

use crate::runner::{GameSummary, Outcome};
use checkers_search::SearchReport;
use std::fmt::{self, Write};

/// Serializes a summary as pretty-printed JSON.
pub fn to_json(summary: &GameSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Formats a summary for reading in a terminal.
pub fn to_text(summary: &GameSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let headline = match summary.outcome {
        Outcome::Dark => "Dark wins",
        Outcome::Light => "Light wins",
        Outcome::Draw => "Draw",
    };
    writeln!(out, "{} after {} plies", headline, summary.plies)?;
    writeln!(out)?;
    writeln!(out, "{}", summary.final_board)?;
    writeln!(out)?;
    write_report(&mut out, "Dark", &summary.dark)?;
    write_report(&mut out, "Light", &summary.light)?;
    Ok(out)
}

fn write_report(out: &mut impl Write, name: &str, report: &SearchReport) -> fmt::Result {
    writeln!(
        out,
        "{:<6} moves: {:>4}  expanded: {:>9}  pruned: {:>8}  avg time: {:.3}s  ordering gain: {:.1}%",
        name,
        report.total_moves,
        report.states_explored,
        report.pruned_states,
        report.average_search_time().as_secs_f64(),
        report.ordering_gain(),
    )?;
    if !report.last_ordering.is_empty() {
        writeln!(out, "       last ordering: {}", report.last_ordering)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MoveRecord;
    use checkers_core::{Move, Side};
    use checkers_search::SearchStats;
    use std::time::Duration;

    fn summary() -> GameSummary {
        let mut dark = SearchReport::new();
        dark.record_search(
            &SearchStats {
                nodes_expanded: 40,
                nodes_pruned: 4,
                max_depth: 3,
                ordering: "Max Order (first 3): (2,1)->(3,0)".to_string(),
            },
            Duration::from_millis(2),
        );
        dark.record_move();
        GameSummary {
            outcome: Outcome::Dark,
            plies: 1,
            dark,
            light: SearchReport::new(),
            moves: vec![MoveRecord {
                side: Side::Dark,
                mv: Move::from_coords(2, 1, 3, 0).unwrap(),
                score: 0.0,
                nodes_expanded: 40,
                nodes_pruned: 4,
                chain_continues: false,
            }],
            final_board: "........".to_string(),
        }
    }

    #[test]
    fn text_summary() {
        let text = to_text(&summary()).unwrap();
        assert!(text.starts_with("Dark wins after 1 plies"));
        assert!(text.contains("ordering gain: 10.0%"));
        assert!(text.contains("last ordering: Max Order (first 3): (2,1)->(3,0)"));
    }

    #[test]
    fn json_summary() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&summary()).unwrap()).unwrap();
        assert_eq!(json["outcome"], "dark");
        assert_eq!(json["plies"], 1);
        assert_eq!(json["dark"]["states_explored"], 40);
        assert_eq!(json["moves"][0]["side"], "Dark");
        assert_eq!(json["moves"][0]["move"]["from"]["row"], 2);
        assert_eq!(json["moves"][0]["move"]["to"]["col"], 0);
    }
}
