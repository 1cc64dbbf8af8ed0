//! Layered configuration for batchname.
//!
//! Defaults → optional TOML file → `BATCHNAME_*` environment variables, in
//! that precedence order, assembled with [figment]. The file lives at the
//! platform config location (`…/batchname/config.toml`) unless a caller
//! supplies an explicit path; a missing file simply contributes nothing.
//!
//! Environment keys use `__` as the section separator so that snake_case
//! field names survive, e.g. `BATCHNAME_NAMING__PAD_WIDTH=3`.

pub mod error;

use crate::error::{ErrorKind, Result};
use batchname_archive::Method;
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

const ENV_PREFIX: &str = "BATCHNAME_";

/// Tool-wide settings, all defaultable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub naming: NamingDefaults,
    pub archive: ArchiveDefaults,
}

/// Default numbering and title treatment, overridable per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingDefaults {
    /// Sequence number assigned to the item at position 1.
    pub start_number: i64,
    /// Zero-padding width for sequence numbers; 0 disables padding.
    pub pad_width: usize,
    /// Normalize titles to the restricted filename alphabet. Off by
    /// default: the original tool renders titles verbatim.
    pub sanitize_titles: bool,
}

impl Default for NamingDefaults {
    fn default() -> Self {
        Self { start_number: 1, pad_width: 0, sanitize_titles: false }
    }
}

/// Container packaging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveDefaults {
    /// Entry compression for the produced ZIP.
    pub method: Method,
}

impl AppConfig {
    /// Loads from the platform config file location plus the environment.
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(path),
            // No home directory to speak of; defaults + environment only.
            None => Self::figment(None).extract().or_raise(|| ErrorKind::Config),
        }
    }

    /// Loads with an explicit file path (which may not exist — a missing
    /// file contributes nothing and is not an error).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::figment(Some(path.as_ref())).extract().or_raise(|| ErrorKind::Config)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

/// Platform config file path (`…/batchname/config.toml`), or `None` when no
/// home directory can be determined.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "batchname").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_original_tools_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.naming.start_number, 1);
        assert_eq!(config.naming.pad_width, 0);
        assert!(!config.naming.sanitize_titles);
        assert_eq!(config.archive.method, Method::Deflate);
    }

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = AppConfig::load_from("does-not-exist.toml").expect("defaults");
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [naming]
                    start_number = 100
                    pad_width = 3

                    [archive]
                    method = "store"
                "#,
            )?;
            let config = AppConfig::load_from("config.toml").expect("valid file");
            assert_eq!(config.naming.start_number, 100);
            assert_eq!(config.naming.pad_width, 3);
            assert_eq!(config.archive.method, Method::Store);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[naming]\npad_width = 3\n")?;
            jail.set_env("BATCHNAME_NAMING__PAD_WIDTH", "5");
            jail.set_env("BATCHNAME_NAMING__SANITIZE_TITLES", "true");
            let config = AppConfig::load_from("config.toml").expect("valid layering");
            assert_eq!(config.naming.pad_width, 5);
            assert!(config.naming.sanitize_titles);
            Ok(())
        });
    }

    #[test]
    fn rejects_unknown_fields() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[naming]\nstart = 1\n")?;
            assert!(AppConfig::load_from("config.toml").is_err());
            Ok(())
        });
    }
}
