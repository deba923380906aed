use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::CastlingRule;

pub const CASTLING_ENV: &str = "HOTSEAT_CASTLING";
pub const VERBOSE_ENV: &str = "HOTSEAT_VERBOSE";
pub const ASCII_ENV: &str = "HOTSEAT_ASCII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub castling_rule: CastlingRule,
    /// Echo every game event as an `info string` line on stderr.
    pub verbose: bool,
    /// Render pieces with Unicode chess glyphs instead of letters.
    pub unicode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            castling_rule: CastlingRule::Standard,
            verbose: false,
            unicode: true,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `HOTSEAT_CASTLING`, `HOTSEAT_VERBOSE` and
    /// `HOTSEAT_ASCII` when they are set.
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChessErrors> {
        let mut config = Self::default();

        if let Some(value) = lookup(CASTLING_ENV) {
            config.castling_rule = match value.trim().to_ascii_lowercase().as_str() {
                "standard" => CastlingRule::Standard,
                "adjacent" => CastlingRule::AdjacentSquareOnly,
                _ => {
                    return Err(ChessErrors::InvalidConfigValue {
                        key: CASTLING_ENV,
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup(VERBOSE_ENV) {
            config.verbose = parse_flag(VERBOSE_ENV, value)?;
        }
        if let Some(value) = lookup(ASCII_ENV) {
            config.unicode = !parse_flag(ASCII_ENV, value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ChessErrors> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ChessErrors::InvalidConfigValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[])).expect("defaults should load");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (CASTLING_ENV, "Adjacent"),
            (VERBOSE_ENV, "1"),
            (ASCII_ENV, "yes"),
        ]))
        .expect("overrides should load");
        assert_eq!(config.castling_rule, CastlingRule::AdjacentSquareOnly);
        assert!(config.verbose);
        assert!(!config.unicode);
    }

    #[test]
    fn unknown_castling_rule_is_rejected() {
        let err = GameConfig::from_lookup(lookup_from(&[(CASTLING_ENV, "chess960")]))
            .expect_err("unknown rule should fail");
        assert_eq!(
            err,
            ChessErrors::InvalidConfigValue {
                key: CASTLING_ENV,
                value: "chess960".to_owned(),
            }
        );
    }
}
