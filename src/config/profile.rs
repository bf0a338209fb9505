//! TOML connection profiles.
//!
//! ```toml
//! endpoint = "https://blog.example.test"
//! username = "editor"
//! application_password = "abcd efgh ijkl mnop"
//! timeout = "1m"
//! image_url = "https://images.example.test/{id}.png"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection values read from a profile file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionProfile {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub application_password: Option<String>,
    pub timeout: Option<String>,
    pub image_url: Option<String>,
}

impl ConnectionProfile {
    /// Load a profile from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_profile_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
endpoint = "https://blog.test"
username = "editor"
timeout = "1m"
"#
        )
        .unwrap();

        let profile = ConnectionProfile::from_file(file.path()).unwrap();
        assert_eq!(profile.endpoint.as_deref(), Some("https://blog.test"));
        assert_eq!(profile.username.as_deref(), Some("editor"));
        assert_eq!(profile.timeout.as_deref(), Some("1m"));
        assert!(profile.application_password.is_none());
        assert!(profile.image_url.is_none());
    }

    #[test]
    fn test_empty_profile() {
        assert_eq!(
            ConnectionProfile::from_toml("").unwrap(),
            ConnectionProfile::default()
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConnectionProfile::from_toml("endpont = \"https://blog.test\"").unwrap_err();
        assert!(format!("{err:#}").contains("endpont"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConnectionProfile::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
