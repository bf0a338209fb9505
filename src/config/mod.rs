//! Connection settings resolution.
//!
//! Each field is taken from the first source that sets it: command-line flag,
//! environment variable, `--config` profile, built-in default.

pub mod duration;
pub mod profile;

use anyhow::Context;
use populate_seeder::DEFAULT_IMAGE_URL_TEMPLATE;
use std::time::Duration;
use wp_rest_client::ClientConfig;

use crate::ConnectionOpts;
pub use duration::parse_duration;
pub use profile::ConnectionProfile;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fully resolved connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub username: String,
    pub application_password: Option<String>,
    pub timeout: Duration,
    pub image_url: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field(
                "application_password",
                &self.application_password.as_ref().map(|_| "***"),
            )
            .field("timeout", &self.timeout)
            .field("image_url", &self.image_url)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            application_password: None,
            timeout: DEFAULT_TIMEOUT,
            image_url: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from parsed options, loading the profile if one is named.
    pub fn resolve(opts: &ConnectionOpts) -> anyhow::Result<Self> {
        let profile = match &opts.config {
            Some(path) => ConnectionProfile::from_file(path)?,
            None => ConnectionProfile::default(),
        };
        Self::merge(opts, profile)
    }

    fn merge(opts: &ConnectionOpts, profile: ConnectionProfile) -> anyhow::Result<Self> {
        let defaults = Settings::default();

        let endpoint = opts
            .endpoint
            .clone()
            .or(profile.endpoint)
            .unwrap_or(defaults.endpoint);
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            anyhow::bail!("Endpoint must be an http:// or https:// URL, got '{endpoint}'");
        }

        let timeout = match opts.timeout.clone().or(profile.timeout) {
            Some(raw) => {
                parse_duration(&raw).with_context(|| format!("Invalid timeout '{raw}'"))?
            }
            None => defaults.timeout,
        };

        Ok(Self {
            endpoint,
            username: opts
                .username
                .clone()
                .or(profile.username)
                .unwrap_or(defaults.username),
            application_password: opts
                .application_password
                .clone()
                .or(profile.application_password)
                .filter(|p| !p.trim().is_empty()),
            timeout,
            image_url: opts
                .image_url
                .clone()
                .or(profile.image_url)
                .unwrap_or(defaults.image_url),
        })
    }

    /// REST client configuration; fails when no application password is set.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let application_password = self.application_password.clone().context(
            "No application password: pass --application-password, set \
             WP_APPLICATION_PASSWORD or add it to the --config profile",
        )?;

        Ok(ClientConfig {
            endpoint: self.endpoint.clone(),
            username: self.username.clone(),
            application_password,
            timeout: self.timeout,
        })
    }
}
