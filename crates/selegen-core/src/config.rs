//! Runtime defaults baked into generated classes.
//!
//! Every value can still be overridden when the generated test runs, through
//! the matching JVM system property.

use serde::{Deserialize, Serialize};

/// Literal defaults of the generated `speed`, `timeout`, `browser`, `host`
/// and `hostPort` fields, plus the context path of the tested application.
///
/// ```toml
/// [runtime]
/// speed = 100
/// timeout_ms = 30000
/// browser = "firefox"
/// host = "localhost"
/// host_port = 8080
/// context_path = "/portal/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeDefaults {
    /// Delay between Selenium commands, in milliseconds.
    pub speed: u32,
    /// Page load and wait timeout, in milliseconds.
    pub timeout_ms: u64,
    pub browser: String,
    pub host: String,
    pub host_port: u16,
    pub context_path: String,
}

impl Default for RuntimeDefaults {
    fn default() -> Self {
        Self {
            speed: 100,
            timeout_ms: 30_000,
            browser: "firefox".to_string(),
            host: "localhost".to_string(),
            host_port: 8080,
            context_path: "/portal/".to_string(),
        }
    }
}

impl RuntimeDefaults {
    /// Whole seconds of the timeout, the bound of every polling loop.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_ms / 1000
    }
}
