// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory walked when no patch files are given on the command line
    #[serde(default = "default_patches_dir")]
    pub patches_dir: PathBuf,

    /// Expand renames into a deletion plus an addition. When off, a
    /// rename is reported as a plain modification of the new path.
    #[serde(default = "default_true")]
    pub rename_detection: bool,
}

fn default_patches_dir() -> PathBuf {
    PathBuf::from("patches")
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patches_dir: default_patches_dir(),
            rename_detection: default_true(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.patchlint.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".patchlint.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (PATCHLINT_PATCHES_DIR, ...)
        figment = figment.merge(Env::prefixed("PATCHLINT_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "patchlint").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref dir) = cli.patches_dir {
            self.patches_dir = dir.clone();
        }
        if cli.no_renames {
            self.rename_detection = false;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.patches_dir.as_os_str().is_empty() {
            return Err(Error::Config("patches_dir cannot be empty".into()));
        }
        Ok(())
    }

    /// Create default config file
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# patchlint Configuration

# Directory walked when no patch files are given on the command line
patches_dir = "patches"

# Expand renames into a deletion of the old path plus an addition of the
# new one. When false, a rename is checked as a plain modification.
rename_detection = true
"#;

        fs::write(&path, content)?;

        Ok(path)
    }
}
