//! Highlighter configuration.
//!
//! This module holds [`HighlightConfig`], the explicit settings object the
//! editor hands to a [`Highlighter`](crate::Highlighter). It is loaded from
//! TOML text; reading the text from disk is the caller's business.
//!
//! ```
//! use redit_hl::HighlightConfig;
//!
//! let config = HighlightConfig::from_toml_str(
//!     r##"
//!     partial_threshold = 2000
//!     reserved_words = ["if", "else", "function"]
//!
//!     [theme]
//!     keyword = "#aa00aa"
//!     "##,
//! )
//! .unwrap();
//! assert!(config.enabled);
//! assert_eq!(config.partial_threshold, 2000);
//! assert_eq!(config.theme.comment, "#008000");
//! ```

use redit_lex::unicode::{is_ident_continue, is_ident_start};
use redit_lex::ReservedWords;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::theme::Theme;

/// Documents shorter than this many bytes are always rescanned in full.
pub const DEFAULT_PARTIAL_THRESHOLD: usize = 10_000;

/// How far before the edited line a partial rescan may start, in bytes.
pub const DEFAULT_MAX_LOOKBACK: usize = 4_096;

/// Settings for one highlighter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Whether syntax highlighting is on.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Document size, in bytes, from which edits are rescanned partially.
    #[serde(default = "default_partial_threshold")]
    pub partial_threshold: usize,

    /// Largest distance, in bytes, between the safe boundary and the start
    /// of the edited line before a partial rescan gives way to a full one.
    #[serde(default = "default_max_lookback")]
    pub max_lookback: usize,

    /// Replacement reserved-word list; the R reserved words when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_words: Option<Vec<String>>,

    /// Colours.
    #[serde(default)]
    pub theme: Theme,
}

fn default_true() -> bool {
    true
}

fn default_partial_threshold() -> usize {
    DEFAULT_PARTIAL_THRESHOLD
}

fn default_max_lookback() -> usize {
    DEFAULT_MAX_LOOKBACK
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            partial_threshold: default_partial_threshold(),
            max_lookback: default_max_lookback(),
            reserved_words: None,
            theme: Theme::default(),
        }
    }
}

impl HighlightConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// Keys that are left out take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: HighlightConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroThreshold`] if a size limit is zero
    /// - [`ConfigError::EmptyReservedWord`] / [`ConfigError::InvalidReservedWord`]
    ///   for reserved words that can never match a scanned name
    /// - [`ConfigError::InvalidColor`] for a malformed theme colour
    pub fn validate(&self) -> ConfigResult<()> {
        if self.partial_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "partial_threshold",
            });
        }
        if self.max_lookback == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "max_lookback",
            });
        }

        for (index, word) in self.reserved_words.iter().flatten().enumerate() {
            if word.is_empty() {
                return Err(ConfigError::EmptyReservedWord { index });
            }
            if !is_r_name(word) {
                return Err(ConfigError::InvalidReservedWord { word: word.clone() });
            }
        }

        self.theme.resolve()?;
        Ok(())
    }

    /// The reserved-word set this configuration selects.
    pub fn reserved_word_set(&self) -> ReservedWords {
        match &self.reserved_words {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => ReservedWords::r_language().clone(),
        }
    }
}

/// True if the scanner would read `word` as a single name.
fn is_r_name(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let starts_number = first == '.' && chars.clone().next().is_some_and(|c| c.is_ascii_digit());
    is_ident_start(first) && !starts_number && chars.all(is_ident_continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleSlot;

    #[test]
    fn test_default_config() {
        let config = HighlightConfig::default();
        assert!(config.enabled);
        assert_eq!(config.partial_threshold, 10_000);
        assert_eq!(config.max_lookback, 4_096);
        assert!(config.reserved_words.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            HighlightConfig::from_toml_str("").unwrap(),
            HighlightConfig::default()
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HighlightConfig {
            enabled: false,
            partial_threshold: 123,
            max_lookback: 77,
            reserved_words: Some(vec!["foo".to_string(), "bar.baz".to_string()]),
            theme: Theme {
                keyword: "#123456".to_string(),
                ..Theme::default()
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(HighlightConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let result = HighlightConfig::from_toml_str("partial_threshold = \"big\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = HighlightConfig::from_toml_str("max_lookback = 0");
        assert!(matches!(
            result,
            Err(ConfigError::ZeroThreshold {
                field: "max_lookback"
            })
        ));
    }

    #[test]
    fn test_bad_reserved_words_rejected() {
        let result = HighlightConfig::from_toml_str("reserved_words = [\"if\", \"\"]");
        assert!(matches!(result, Err(ConfigError::EmptyReservedWord { index: 1 })));

        for word in ["_x", "1a", ".5", "a b", "%in%"] {
            let config = HighlightConfig {
                reserved_words: Some(vec![word.to_string()]),
                ..HighlightConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidReservedWord { .. })),
                "{word}"
            );
        }
    }

    #[test]
    fn test_bad_color_rejected() {
        let result = HighlightConfig::from_toml_str("[theme]\nstring = \"red\"");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidColor {
                slot: StyleSlot::String,
                ..
            })
        ));
    }

    #[test]
    fn test_reserved_word_set() {
        let default = HighlightConfig::default().reserved_word_set();
        assert!(default.contains("function"));

        let custom = HighlightConfig {
            reserved_words: Some(vec!["foo".to_string()]),
            ..HighlightConfig::default()
        }
        .reserved_word_set();
        assert!(custom.contains("foo"));
        assert!(!custom.contains("function"));
    }

    #[test]
    fn test_empty_reserved_list_is_allowed() {
        let config = HighlightConfig::from_toml_str("reserved_words = []").unwrap();
        assert!(config.reserved_word_set().is_empty());
    }
}
