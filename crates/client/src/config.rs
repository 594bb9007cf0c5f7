//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use strum::EnumString;

/// How the battle is printed to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// The battle log, one line per entry, with a status line each turn.
    #[default]
    Text,
    /// One JSON object per runtime event.
    Json,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `characters.ron`; embedded data
    /// is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Game seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Catalog key of the opponent.
    pub enemy: String,
    pub player_name: String,
    pub output: OutputFormat,
    pub max_turns: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            enemy: "slime".to_owned(),
            player_name: "Hero".to_owned(),
            output: OutputFormat::Text,
            max_turns: 100,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ECHO_DATA_DIR` - Content directory (default: embedded data)
    /// - `ECHO_SEED` - Game seed (default: random)
    /// - `ECHO_ENEMY` - Opponent catalog key (default: `slime`)
    /// - `ECHO_PLAYER_NAME` - Player display name (default: `Hero`)
    /// - `ECHO_OUTPUT` - `text` or `json` (default: `text`)
    /// - `ECHO_MAX_TURNS` - Turn cap before giving up (default: 100)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("ECHO_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(seed) = read_env::<u64>("ECHO_SEED") {
            config.seed = Some(seed);
        }
        if let Some(enemy) = read_env::<String>("ECHO_ENEMY") {
            config.enemy = enemy;
        }
        if let Some(name) = read_env::<String>("ECHO_PLAYER_NAME") {
            config.player_name = name;
        }
        if let Some(output) = read_env::<OutputFormat>("ECHO_OUTPUT") {
            config.output = output;
        }
        if let Some(max_turns) = read_env::<u32>("ECHO_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn defaults_fight_a_slime() {
        let config = ClientConfig::default();
        assert_eq!(config.enemy, "slime");
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.seed.is_none());
    }
}
