/// Config file loading and creation for the fairpair CLI.
///
/// Config lives at ~/.config/fairpair/config.toml.
/// All fields are optional. CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FairpairConfig {
    pub fairness_range: Option<f64>,
    pub team_size: Option<usize>,
    pub clique_size: Option<usize>,
    pub clique_strategy: Option<String>,
    pub limit: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# fairpair configuration
# All values here can be overridden by CLI flags.

# Rating gap under which a team's nearest disjoint rival counts as a fair match
# fairness_range = 25

# Players per team
# team_size = 2

# Teams per group (must be even; 6 gives a 3-vs-3 split)
# clique_size = 6

# Clique search: \"exact-search\" (default) or \"pairwise-merge\"
# clique_strategy = \"exact-search\"

# Only print the N fairest pairings
# limit = 10
";

/// Returns the default config path: ~/.config/fairpair/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("fairpair").join("config.toml")
}

pub fn parse_config(content: &str) -> Result<FairpairConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> FairpairConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FairpairConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file at `path`. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}
