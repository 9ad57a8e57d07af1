mod config;
mod input;
mod output;

use clap::Parser;
use fairpair_core::{CliqueStrategy, PairingConfig, PairingEngine};
use std::path::PathBuf;

use crate::config::FairpairConfig;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "fairpair", version, about = "Generate the fairest team pairings from a pool of rated players")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compute ranked team pairings for a list of players
    Pair(PairArgs),
    /// Create a default config file at ~/.config/fairpair/config.toml
    Init {
        /// Where to write the config (default: ~/.config/fairpair/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser)]
struct PairArgs {
    /// JSON file with player names and ratings (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Also write the full JSON report to this file
    output: Option<PathBuf>,

    /// Rating range that constitutes a bad matchup. Default: 25
    #[arg(short = 'e', long = "elo")]
    fairness_range: Option<f64>,

    /// Players per team. Default: 2
    #[arg(long)]
    team_size: Option<usize>,

    /// Teams per group, must be even. Default: 6
    #[arg(long)]
    clique_size: Option<usize>,

    /// Clique search: "exact-search" or "pairwise-merge"
    #[arg(long)]
    strategy: Option<String>,

    /// Only print the N fairest pairings
    #[arg(long)]
    limit: Option<usize>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/fairpair/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_strategy(value: &str) -> Option<CliqueStrategy> {
    match value {
        "exact-search" => Some(CliqueStrategy::ExactSearch),
        "pairwise-merge" => Some(CliqueStrategy::PairwiseMerge),
        _ => None,
    }
}

/// Merge CLI args over the config file over built-in defaults.
fn resolve_config(args: &PairArgs, cfg: &FairpairConfig) -> PairingConfig {
    let defaults = PairingConfig::default();

    let clique_strategy = match args.strategy.as_deref().or(cfg.clique_strategy.as_deref()) {
        None => defaults.clique_strategy,
        Some(name) => parse_strategy(name).unwrap_or_else(|| {
            bail(format!("Unknown strategy \"{name}\". Use \"exact-search\" or \"pairwise-merge\"."))
        }),
    };

    PairingConfig {
        team_size: args.team_size.or(cfg.team_size).unwrap_or(defaults.team_size),
        clique_size: args.clique_size.or(cfg.clique_size).unwrap_or(defaults.clique_size),
        fairness_range: args.fairness_range.or(cfg.fairness_range).unwrap_or(defaults.fairness_range),
        clique_strategy,
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pair(args) => run_pair(args),
        Commands::Init { config } => {
            let path = config.unwrap_or_else(config::config_path);
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default fairness range, sizes, etc.");
        }
    }
}

fn run_pair(args: PairArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    let pairing_config = resolve_config(&args, &cfg);
    let limit = args.limit.or(cfg.limit);

    let players = input::load_players(args.input.as_deref());

    if args.verbose {
        eprintln!(
            "Pairing {} players: team size {}, {} teams per group, fairness range {}, {:?}",
            players.len(),
            pairing_config.team_size,
            pairing_config.clique_size,
            pairing_config.fairness_range,
            pairing_config.clique_strategy,
        );
    }

    let engine = PairingEngine::new(&players, pairing_config).unwrap_or_else(|e| bail(e));
    let report = engine.run();

    if args.verbose {
        eprintln!(
            "Pruned {} combinations; graph has {} nodes; {} cliques found",
            report.pruned_combinations, report.total_nodes, report.total_cliques,
        );
        if report.unstable_cliques > 0 {
            eprintln!("Cliques without a stable matching (skipped): {}", report.unstable_cliques);
        }
    }

    if let Some(ref path) = args.output {
        output::write_json(&report, path)
            .unwrap_or_else(|e| bail(format!("Failed to write report to {}: {e}", path.display())));
        if args.verbose {
            eprintln!("Wrote report to {}", path.display());
        }
    }

    if args.json {
        println!("{}", output::render_json(&report, limit));
    } else {
        print!("{}", output::render_table(&report, limit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> PairArgs {
        let mut argv = vec!["pair"];
        argv.extend_from_slice(extra);
        PairArgs::parse_from(argv)
    }

    #[test]
    fn test_positional_input_and_output() {
        let a = args(&["players.json", "out.json", "-e", "40"]);
        assert_eq!(a.input, Some(PathBuf::from("players.json")));
        assert_eq!(a.output, Some(PathBuf::from("out.json")));
        assert_eq!(a.fairness_range, Some(40.0));
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let resolved = resolve_config(&args(&[]), &FairpairConfig::default());
        assert_eq!(resolved, PairingConfig::default());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let cfg = FairpairConfig {
            fairness_range: Some(50.0),
            clique_size: Some(4),
            clique_strategy: Some("pairwise-merge".into()),
            ..Default::default()
        };
        let resolved = resolve_config(&args(&["--elo", "10", "--strategy", "exact-search"]), &cfg);
        assert_eq!(resolved.fairness_range, 10.0);
        assert_eq!(resolved.clique_size, 4);
        assert_eq!(resolved.team_size, 2);
        assert_eq!(resolved.clique_strategy, CliqueStrategy::ExactSearch);
    }

    #[test]
    fn test_parse_strategy_names() {
        assert_eq!(parse_strategy("exact-search"), Some(CliqueStrategy::ExactSearch));
        assert_eq!(parse_strategy("pairwise-merge"), Some(CliqueStrategy::PairwiseMerge));
        assert_eq!(parse_strategy("greedy"), None);
    }
}
