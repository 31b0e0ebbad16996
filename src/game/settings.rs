use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::generator::{GeneratorOptions, DEFAULT_MAX_ATTEMPTS};
use crate::model::{CardRanges, DeckPreset, Difficulty};

const SETTINGS_PATH_VAR: &str = "DUSK_DAWN_SETTINGS";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub deck_preset: DeckPreset,

    /// Overrides `deck_preset` when present
    #[serde(default)]
    pub ranges: Option<CardRanges>,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            difficulty: Difficulty::default(),
            deck_preset: DeckPreset::default(),
            ranges: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Load from the file named by `DUSK_DAWN_SETTINGS`, falling back to
    /// defaults when it is unset, unreadable or malformed.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Settings::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|err| {
                warn!(target: "settings", "Ignoring malformed {:?}: {}", path, err);
                Settings::default()
            }),
            Err(err) => {
                warn!(target: "settings", "Could not read {:?}: {}", path, err);
                Settings::default()
            }
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let mut settings = serde_json::from_str::<Settings>(contents)?;
        settings.migrate();
        trace!(target: "settings", "Loaded settings: {:?}", settings);
        Ok(settings)
    }

    fn settings_path() -> Option<PathBuf> {
        std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from)
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn card_ranges(&self) -> CardRanges {
        self.ranges
            .clone()
            .unwrap_or_else(|| self.deck_preset.ranges())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            max_attempts: self.max_attempts,
            ranges: self.card_ranges(),
            ..GeneratorOptions::for_difficulty(self.difficulty)
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
    }
}
