//! Configuration system for selegen.
//!
//! Loads config from:
//! 1. Global: ~/.config/selegen/config.toml
//! 2. Per-project: <input>/.selegen/config.toml, or the file given with
//!    `--config` (overrides global)
//!
//! Command line flags override both.
//!
//! Example config.toml:
//! ```toml
//! [runtime]
//! browser = "chrome"
//! host_port = 8081
//!
//! [output]
//! variant = "webdriver"
//! package_prefix = "org.exoplatform.selenium"
//!
//! [archive]
//! builtin = false
//!
//! [[archive.profiles]]
//! key = "DOCS"
//! create_command = "createReportDocs"
//! copy_command = "copyReportDocs"
//! results_dir = "/home/ci/docs/results/rev"
//! report_dir = "/home/ci/docs/run/target/site/"
//! ```

use anyhow::Context;
use selegen_core::{ArchiveProfile, ArchiveSet, RuntimeDefaults};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values baked into the generated fields.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub speed: Option<u32>,
    pub timeout_ms: Option<u64>,
    pub browser: Option<String>,
    pub host: Option<String>,
    pub host_port: Option<u16>,
    pub context_path: Option<String>,
}

impl RuntimeConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            speed: other.speed.or(self.speed),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            browser: other.browser.or(self.browser),
            host: other.host.or(self.host),
            host_port: other.host_port.or(self.host_port),
            context_path: other.context_path.or(self.context_path),
        }
    }
}

/// Generated unit layout.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output variant name (`legacy` or `webdriver`).
    pub variant: Option<String>,
    /// Package prepended to the directory-derived package.
    pub package_prefix: Option<String>,
    /// Stop at the first script that fails to translate.
    pub fail_fast: Option<bool>,
}

impl OutputConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            variant: other.variant.or(self.variant),
            package_prefix: other.package_prefix.or(self.package_prefix),
            fail_fast: other.fail_fast.or(self.fail_fast),
        }
    }
}

/// Report archival commands.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Whether the built-in eXo profiles are available (default: true).
    pub builtin: Option<bool>,
    /// Extra profiles, added after the built-in ones.
    pub profiles: Vec<ArchiveProfile>,
}

impl ArchiveConfig {
    fn merge(self, other: Self) -> Self {
        let mut profiles = self.profiles;
        profiles.extend(other.profiles);
        Self {
            builtin: other.builtin.or(self.builtin),
            profiles,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SelegenConfig {
    pub runtime: RuntimeConfig,
    pub output: OutputConfig,
    pub archive: ArchiveConfig,
}

impl SelegenConfig {
    /// Load configuration for an input tree.
    ///
    /// An explicit config file replaces the project file and must exist and
    /// parse. Global and project files are optional; unparsable ones are
    /// skipped with a warning.
    pub fn load(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config = config.merge(global);
            }
        }

        match explicit {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                let file: Self = toml::from_str(&content)
                    .with_context(|| format!("failed to parse config {}", path.display()))?;
                config = config.merge(file);
            }
            None => {
                let project_path = root.join(".selegen").join("config.toml");
                if let Some(project) = Self::load_file(&project_path) {
                    config = config.merge(project);
                }
            }
        }

        Ok(config)
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("selegen").join("config.toml"))
    }

    /// Load config from a file path.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                None
            }
        }
    }

    /// Merge another config into this one; set values of `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            runtime: self.runtime.merge(other.runtime),
            output: self.output.merge(other.output),
            archive: self.archive.merge(other.archive),
        }
    }

    pub fn runtime_defaults(&self) -> RuntimeDefaults {
        let base = RuntimeDefaults::default();
        let r = self.runtime.clone();
        RuntimeDefaults {
            speed: r.speed.unwrap_or(base.speed),
            timeout_ms: r.timeout_ms.unwrap_or(base.timeout_ms),
            browser: r.browser.unwrap_or(base.browser),
            host: r.host.unwrap_or(base.host),
            host_port: r.host_port.unwrap_or(base.host_port),
            context_path: r.context_path.unwrap_or(base.context_path),
        }
    }

    pub fn variant(&self) -> &str {
        self.output.variant.as_deref().unwrap_or("legacy")
    }

    pub fn fail_fast(&self) -> bool {
        self.output.fail_fast.unwrap_or(false)
    }

    /// The archive commands this configuration enables.
    pub fn archive_set(&self) -> ArchiveSet {
        let mut set = if self.archive.builtin.unwrap_or(true) {
            ArchiveSet::exo()
        } else {
            ArchiveSet::default()
        };
        for profile in &self.archive.profiles {
            set.push(profile.clone());
        }
        set
    }
}
