/// Output formatting: terminal table and JSON.
use fairpair_core::{PairingReport, Team};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonTeam {
    players: Vec<String>,
    average_rating: f64,
}

#[derive(Serialize)]
struct JsonMatchup {
    lower: JsonTeam,
    higher: JsonTeam,
    gap: f64,
}

#[derive(Serialize)]
struct JsonPairing {
    rank: usize,
    worst_gap: f64,
    matchups: Vec<JsonMatchup>,
}

#[derive(Serialize)]
struct JsonOutput {
    pairings: Vec<JsonPairing>,
    total_pairings: usize,
    total_cliques: usize,
    total_nodes: usize,
    pruned_combinations: usize,
    unstable_cliques: usize,
}

fn json_team(team: &Team) -> JsonTeam {
    JsonTeam {
        players: team.players.iter().map(|p| p.name.clone()).collect(),
        average_rating: team.average_rating,
    }
}

fn build_json(report: &PairingReport, limit: Option<usize>) -> JsonOutput {
    let shown = limit.unwrap_or(report.pairings.len());
    let pairings = report
        .pairings
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, p)| JsonPairing {
            rank: i + 1,
            worst_gap: p.worst_gap,
            matchups: p
                .matchups
                .iter()
                .map(|m| JsonMatchup { lower: json_team(&m.lower), higher: json_team(&m.higher), gap: m.gap })
                .collect(),
        })
        .collect();

    JsonOutput {
        pairings,
        total_pairings: report.pairings.len(),
        total_cliques: report.total_cliques,
        total_nodes: report.total_nodes,
        pruned_combinations: report.pruned_combinations,
        unstable_cliques: report.unstable_cliques,
    }
}

pub fn render_json(report: &PairingReport, limit: Option<usize>) -> String {
    // Only plain structs of strings and numbers; serialization cannot fail.
    serde_json::to_string_pretty(&build_json(report, limit)).unwrap_or_default()
}

fn team_label(team: &Team) -> String {
    team.players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" + ")
}

/// Human-readable report: one block per pairing, then the totals.
pub fn render_table(report: &PairingReport, limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(report.pairings.len()).min(report.pairings.len());
    let mut out = String::new();

    let label_width = report
        .pairings
        .iter()
        .take(shown)
        .flat_map(|p| p.matchups.iter().map(|m| team_label(&m.lower).len()))
        .max()
        .unwrap_or(4);

    for (i, pairing) in report.pairings.iter().take(shown).enumerate() {
        out.push_str(&format!("#{:<3} worst gap {:.2}\n", i + 1, pairing.worst_gap));
        for m in &pairing.matchups {
            out.push_str(&format!(
                "  {:<label_width$} ({:>8.2})  vs  {} ({:.2})  gap {:.2}\n",
                team_label(&m.lower),
                m.lower.average_rating,
                team_label(&m.higher),
                m.higher.average_rating,
                m.gap,
            ));
        }
        out.push('\n');
    }

    if shown < report.pairings.len() {
        out.push_str(&format!("... {} more pairings not shown\n", report.pairings.len() - shown));
    }
    out.push_str(&format!(
        "{} pairings from {} cliques over {} graph nodes ({} combinations pruned, {} cliques without a stable matching)\n",
        report.pairings.len(),
        report.total_cliques,
        report.total_nodes,
        report.pruned_combinations,
        report.unstable_cliques,
    ));
    out
}

/// Write the full JSON report to `path`.
pub fn write_json(report: &PairingReport, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, render_json(report, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairpair_core::{Matchup, PairingResult, Player};

    fn sample_report() -> PairingReport {
        let team = |a: &str, b: &str, avg: f64| Team::new(vec![Player::new(a, avg - 5.0), Player::new(b, avg + 5.0)]);
        let pairing = |gap: f64| PairingResult {
            matchups: vec![
                Matchup { lower: team("A", "B", 1000.0), higher: team("C", "D", 1000.0 + gap), gap },
                Matchup { lower: team("E", "F", 1100.0), higher: team("G", "H", 1100.0), gap: 0.0 },
                Matchup { lower: team("I", "J", 1200.0), higher: team("K", "L", 1200.0), gap: 0.0 },
            ],
            worst_gap: gap,
        };
        PairingReport {
            pairings: vec![pairing(0.0), pairing(5.0), pairing(12.5)],
            total_cliques: 3,
            total_nodes: 66,
            pruned_combinations: 0,
            unstable_cliques: 0,
        }
    }

    #[test]
    fn test_json_has_ranks_and_totals() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample_report(), Some(2))).unwrap();
        assert_eq!(json["pairings"].as_array().unwrap().len(), 2);
        assert_eq!(json["pairings"][1]["rank"], 2);
        assert_eq!(json["pairings"][1]["worst_gap"], 5.0);
        assert_eq!(json["pairings"][0]["matchups"][0]["lower"]["players"][0], "A");
        assert_eq!(json["total_pairings"], 3);
        assert_eq!(json["total_cliques"], 3);
        assert_eq!(json["total_nodes"], 66);
    }

    #[test]
    fn test_table_lists_matchups_and_totals() {
        let table = render_table(&sample_report(), None);
        assert!(table.contains("#1   worst gap 0.00"));
        assert!(table.contains("A + B"));
        assert!(table.contains("vs  C + D"));
        assert!(table.contains("3 pairings from 3 cliques over 66 graph nodes"));
        assert!(!table.contains("not shown"));
    }

    #[test]
    fn test_table_respects_limit() {
        let table = render_table(&sample_report(), Some(1));
        assert!(table.contains("#1 "));
        assert!(!table.contains("#2 "));
        assert!(table.contains("2 more pairings not shown"));
    }

    #[test]
    fn test_empty_report_renders_totals_only() {
        let report = PairingReport::default();
        let table = render_table(&report, None);
        assert_eq!(table, "0 pairings from 0 cliques over 0 graph nodes (0 combinations pruned, 0 cliques without a stable matching)\n");
        let json: serde_json::Value = serde_json::from_str(&render_json(&report, None)).unwrap();
        assert!(json["pairings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&sample_report(), &path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["pairings"].as_array().unwrap().len(), 3);
    }
}
