/// Player list loading.
///
/// Accepts either `{"players": [{"name": ..., "elo": ...}, ...]}` or a bare
/// JSON array of the same records. The rating field may be spelled `elo` or
/// `rating`.
use fairpair_core::Player;
use serde::Deserialize;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::bail;

#[derive(Deserialize)]
#[serde(untagged)]
enum PlayerFile {
    Wrapped { players: Vec<Player> },
    Bare(Vec<Player>),
}

pub fn parse_players(content: &str) -> Result<Vec<Player>, serde_json::Error> {
    let file: PlayerFile = serde_json::from_str(content)?;
    Ok(match file {
        PlayerFile::Wrapped { players } => players,
        PlayerFile::Bare(players) => players,
    })
}

/// Load players from `path`, or from stdin when no path is given.
pub fn load_players(path: Option<&Path>) -> Vec<Player> {
    let (content, source) = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| bail(format!("Failed to read player file {}: {e}", path.display())));
            (content, path.display().to_string())
        }
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No players provided. Pass a JSON file or pipe one via stdin.");
            }
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}")));
            (content, "stdin".to_string())
        }
    };

    parse_players(&content).unwrap_or_else(|e| bail(format!("Failed to parse players from {source}: {e}")))
}
