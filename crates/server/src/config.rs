use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub debug: bool,
    pub sample_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8050".into(),
            debug: false,
            sample_seed: 42,
        }
    }
}

impl Settings {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(Path::new(SETTINGS_FILE)) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

/// Overlays `bind_addr`, `debug` and `sample_seed` from a TOML document.
/// Keys with the wrong type are ignored.
pub fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<toml::Table>(raw) {
        Ok(table) => table,
        Err(error) => {
            warn!(file = SETTINGS_FILE, %error, "ignoring unparseable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = file_cfg.get("debug").and_then(toml::Value::as_bool) {
        settings.debug = v;
    }
    if let Some(v) = file_cfg
        .get("sample_seed")
        .and_then(toml::Value::as_integer)
        .and_then(|seed| u64::try_from(seed).ok())
    {
        settings.sample_seed = v;
    }
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("DASHBOARD_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("APP__DEBUG") {
        if let Some(parsed) = parse_flag(&v) {
            settings.debug = parsed;
        }
    }

    if let Some(v) = lookup("APP__SAMPLE_SEED") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.sample_seed = parsed;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
