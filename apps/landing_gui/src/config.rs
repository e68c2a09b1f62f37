use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::CONTACT_ENDPOINT_PATH;
use url::Url;

pub const SETTINGS_FILE_NAME: &str = "landing.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct LandingSettings {
    pub site_url: String,
    pub contact_endpoint: String,
    pub request_timeout_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            site_url: "http://127.0.0.1:8080/".into(),
            contact_endpoint: CONTACT_ENDPOINT_PATH.into(),
            request_timeout_secs: 15,
            window_width: 1280.0,
            window_height: 820.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    site_url: Option<String>,
    contact_endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

impl LandingSettings {
    /// Parses the site URL; a missing trailing slash is added so relative
    /// links resolve under it rather than beside it.
    pub fn site_url(&self) -> anyhow::Result<Url> {
        let raw = self.site_url.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Url::parse(&normalized).with_context(|| format!("invalid site url '{raw}'"))
    }

    pub fn resolve_link(&self, href: &str) -> anyhow::Result<Url> {
        let site = self.site_url()?;
        site.join(href)
            .with_context(|| format!("could not resolve '{href}' against '{site}'"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    fn merge_file(&mut self, file: FileSettings) {
        if let Some(v) = file.site_url {
            self.site_url = v;
        }
        if let Some(v) = file.contact_endpoint {
            self.contact_endpoint = v;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        if let Some(v) = file.window_width {
            self.window_width = v;
        }
        if let Some(v) = file.window_height {
            self.window_height = v;
        }
    }

    /// Applies `LANDING_*` variables, then their `APP__*` spellings, so the
    /// latter win when both are set.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let pick = |name: &str| {
            lookup(&format!("APP__{name}"))
                .or_else(|| lookup(&format!("LANDING_{name}")))
                .filter(|value| !value.trim().is_empty())
        };

        if let Some(v) = pick("SITE_URL") {
            self.site_url = v;
        }
        if let Some(v) = pick("CONTACT_ENDPOINT") {
            self.contact_endpoint = v;
        }
        if let Some(v) = pick("REQUEST_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(parsed) => self.request_timeout_secs = parsed,
                Err(err) => tracing::warn!("ignoring REQUEST_TIMEOUT_SECS={v:?}: {err}"),
            }
        }
    }
}

/// Settings file search order: the explicit path alone, or `./landing.toml`
/// then the per-user config directory.
pub fn settings_file_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("sarathi").join(SETTINGS_FILE_NAME));
    }
    candidates
}

pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<LandingSettings> {
    let mut settings = LandingSettings::default();

    for candidate in settings_file_candidates(explicit) {
        if !candidate.exists() {
            if explicit.is_some() {
                anyhow::bail!("settings file '{}' does not exist", candidate.display());
            }
            continue;
        }
        let raw = fs::read_to_string(&candidate)
            .with_context(|| format!("failed to read '{}'", candidate.display()))?;
        let file: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse '{}'", candidate.display()))?;
        tracing::info!(path = %candidate.display(), "loaded landing settings");
        settings.merge_file(file);
        break;
    }

    settings.apply_env_overrides(|name| std::env::var(name).ok());
    settings.site_url()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
