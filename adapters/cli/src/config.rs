//! Session settings read from an optional TOML file and overridden by flags.

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use ricochet_core::BoardSize;
use ricochet_game::GameConfig;

/// Settings that may appear in a `ricochet.toml` file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) columns: Option<u32>,
    pub(crate) rows: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) countdown_seconds: Option<u64>,
}

impl FileConfig {
    /// Reads and parses a configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to load config file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config toml contents")
    }

    /// Layers `overrides` on top of these settings.
    #[must_use]
    pub(crate) fn merge(self, overrides: FileConfig) -> Self {
        Self {
            columns: overrides.columns.or(self.columns),
            rows: overrides.rows.or(self.rows),
            seed: overrides.seed.or(self.seed),
            countdown_seconds: overrides.countdown_seconds.or(self.countdown_seconds),
        }
    }

    /// Fills the gaps with defaults; `entropy` supplies the seed when none was given.
    pub(crate) fn resolve(self, entropy: impl FnOnce() -> u64) -> Result<GameConfig> {
        let defaults = GameConfig::default();
        let columns = self.columns.unwrap_or(defaults.size.columns());
        let rows = self.rows.unwrap_or(defaults.size.rows());
        let size = BoardSize::new(columns, rows).context("invalid board dimensions")?;
        let countdown = self
            .countdown_seconds
            .map_or(defaults.countdown, Duration::from_secs);
        if countdown.is_zero() {
            anyhow::bail!("countdown must last at least one second");
        }

        Ok(GameConfig {
            size,
            seed: self.seed.unwrap_or_else(entropy),
            countdown,
        })
    }
}
