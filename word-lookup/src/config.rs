use std::env;

use dictionary::DICTIONARY_API_URL;

use crate::storage::DEFAULT_DB_URL;

const DEFAULT_AUDIO_PLAYER: &str = "mpv";
const DEFAULT_AUDIO_ARGS: &str = "--no-video --really-quiet";

pub struct Config {
    /// Base url of the dictionary API, the word is appended as the last path segment
    pub api_url: String,
    pub db_url: String,
    /// Program that receives pronunciation clip urls
    pub audio_player: String,
    pub audio_args: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("WORD_LOOKUP_API_URL").unwrap_or_else(|| DICTIONARY_API_URL.to_string());
        let db_url = lookup("WORD_LOOKUP_DB_URL").unwrap_or_else(|| DEFAULT_DB_URL.to_string());
        let audio_player =
            lookup("WORD_LOOKUP_AUDIO_PLAYER").unwrap_or_else(|| DEFAULT_AUDIO_PLAYER.to_string());
        let audio_args = lookup("WORD_LOOKUP_AUDIO_ARGS")
            .unwrap_or_else(|| DEFAULT_AUDIO_ARGS.to_string())
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        Config {
            api_url,
            db_url,
            audio_player,
            audio_args,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.api_url, DICTIONARY_API_URL);
        assert_eq!(config.db_url, "sqlite://word-lookup.db");
        assert_eq!(config.audio_player, "mpv");
        assert_eq!(config.audio_args, vec!["--no-video", "--really-quiet"]);
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = HashMap::from([
            ("WORD_LOOKUP_API_URL", "http://localhost:8080/entries/en"),
            ("WORD_LOOKUP_DB_URL", "sqlite::memory:"),
            ("WORD_LOOKUP_AUDIO_PLAYER", "ffplay"),
            ("WORD_LOOKUP_AUDIO_ARGS", "-nodisp  -autoexit"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(config.api_url, "http://localhost:8080/entries/en");
        assert_eq!(config.db_url, "sqlite::memory:");
        assert_eq!(config.audio_player, "ffplay");
        assert_eq!(config.audio_args, vec!["-nodisp", "-autoexit"]);
    }
}
