/// Connection configuration: environment variables first, then a profile in `~/.databrickscfg`.
use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::{Ini, Properties};
use log::debug;
use thiserror::Error;

/// Profile used when `--profile` is not given.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// Request timeout when `DATABRICKS_HTTP_TIMEOUT_SECS` is unset or unparsable.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const CONFIG_FILE_NAME: &str = ".databrickscfg";

/// How requests authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal access token, sent as a bearer token.
    Token(String),
    /// HTTP basic auth.
    Basic { username: String, password: String },
}

/// Everything needed to reach the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabricksConfig {
    /// Workspace URL, e.g. `https://example.cloud.databricks.com`.
    pub host: String,
    pub credentials: Credentials,
    /// Skip TLS certificate verification.
    pub insecure: bool,
    pub timeout: Duration,
}

/// Errors resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither the environment nor the profile carries a host plus credentials.
    #[error(
        "You haven't configured the CLI yet for profile '{profile}'! Set DATABRICKS_HOST and \
         DATABRICKS_TOKEN, or add host and token to ~/.databrickscfg"
    )]
    NotConfigured { profile: String },

    /// The config file exists but has no such section.
    #[error("Profile '{profile}' not found in {}", .path.display())]
    MissingProfile { profile: String, path: PathBuf },

    /// The config file is not valid INI.
    #[error("Could not parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// The host is not an http(s) URL.
    #[error("Invalid host '{host}': must start with https:// or http://")]
    InvalidHost { host: String },
}

impl ConfigError {
    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } => "not_configured",
            Self::MissingProfile { .. } => "missing_profile",
            Self::Parse { .. } => "config_parse_error",
            Self::InvalidHost { .. } => "invalid_host",
        }
    }
}

/// Values from one source, before deciding whether they form a usable config.
#[derive(Debug, Default)]
struct PartialConfig {
    host: Option<String>,
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    insecure: Option<bool>,
}

impl PartialConfig {
    fn from_env(env: &dyn Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        Self {
            host: var("DATABRICKS_HOST"),
            token: var("DATABRICKS_TOKEN"),
            username: var("DATABRICKS_USERNAME"),
            password: var("DATABRICKS_PASSWORD"),
            insecure: var("DATABRICKS_INSECURE").and_then(|v| parse_bool(&v)),
        }
    }

    fn from_section(section: &Properties) -> Self {
        let key = |name: &str| {
            section
                .get(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        Self {
            host: key("host"),
            token: key("token"),
            username: key("username"),
            password: key("password"),
            insecure: key("insecure").and_then(|v| parse_bool(&v)),
        }
    }

    fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = &self.token {
            return Some(Credentials::Token(token.clone()));
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        self.host.is_some() && self.credentials().is_some()
    }

    fn finish(self, timeout: Duration) -> Option<Result<DatabricksConfig, ConfigError>> {
        let credentials = self.credentials()?;
        let host = self.host?;
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Some(Err(ConfigError::InvalidHost { host }));
        }
        Some(Ok(DatabricksConfig {
            host,
            credentials,
            insecure: self.insecure.unwrap_or(false),
            timeout,
        }))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve configuration for `profile` from the process environment and home directory.
///
/// # Errors
///
/// Returns `ConfigError` when no usable configuration exists or the file is malformed.
pub fn load(profile: &str) -> Result<DatabricksConfig, ConfigError> {
    load_with(&|key| std::env::var(key).ok(), profile)
}

/// Resolve configuration with an injected environment lookup.
fn load_with(
    env: &dyn Fn(&str) -> Option<String>,
    profile: &str,
) -> Result<DatabricksConfig, ConfigError> {
    let timeout = env("DATABRICKS_HTTP_TIMEOUT_SECS")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

    let from_env = PartialConfig::from_env(env);
    if from_env.is_valid() {
        debug!("using connection settings from environment");
        if let Some(config) = from_env.finish(timeout) {
            return config;
        }
    }

    let not_configured = || ConfigError::NotConfigured {
        profile: profile.to_owned(),
    };

    let path = env("DATABRICKS_CONFIG_FILE")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME)))
        .ok_or_else(not_configured)?;
    if !path.is_file() {
        debug!("no config file at {}", path.display());
        return Err(not_configured());
    }

    debug!("reading profile '{profile}' from {}", path.display());
    load_profile(&path, profile)?
        .finish(timeout)
        .unwrap_or_else(|| Err(not_configured()))
}

fn load_profile(path: &Path, profile: &str) -> Result<PartialConfig, ConfigError> {
    let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Parse {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    let section = ini
        .section(Some(profile))
        .ok_or_else(|| ConfigError::MissingProfile {
            profile: profile.to_owned(),
            path: path.to_owned(),
        })?;
    Ok(PartialConfig::from_section(section))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const CFG: &str = "\
[DEFAULT]
host = https://default.cloud.databricks.com
token = dapi-default

[staging]
host = https://staging.cloud.databricks.com/
username = alice
password = s3cret
insecure = true

[broken]
host = https://broken.cloud.databricks.com
";

    fn cfg_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CFG.as_bytes()).unwrap();
        file
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_profile_from_file() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[("DATABRICKS_CONFIG_FILE", path)]);
        let config = load_with(&env, DEFAULT_PROFILE).unwrap();
        assert_eq!(config.host, "https://default.cloud.databricks.com");
        assert_eq!(config.credentials, Credentials::Token("dapi-default".to_owned()));
        assert!(!config.insecure);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_named_profile_with_basic_auth() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[
            ("DATABRICKS_CONFIG_FILE", path),
            ("DATABRICKS_HTTP_TIMEOUT_SECS", "5"),
        ]);
        let config = load_with(&env, "staging").unwrap();
        assert_eq!(
            config.credentials,
            Credentials::Basic {
                username: "alice".to_owned(),
                password: "s3cret".to_owned(),
            }
        );
        assert!(config.insecure);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[
            ("DATABRICKS_CONFIG_FILE", path),
            ("DATABRICKS_HOST", "https://env.cloud.databricks.com"),
            ("DATABRICKS_TOKEN", "dapi-env"),
        ]);
        let config = load_with(&env, DEFAULT_PROFILE).unwrap();
        assert_eq!(config.host, "https://env.cloud.databricks.com");
        assert_eq!(config.credentials, Credentials::Token("dapi-env".to_owned()));
    }

    #[test]
    fn test_incomplete_environment_falls_back_to_file() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[
            ("DATABRICKS_CONFIG_FILE", path),
            ("DATABRICKS_HOST", "https://env.cloud.databricks.com"),
        ]);
        let config = load_with(&env, DEFAULT_PROFILE).unwrap();
        assert_eq!(config.host, "https://default.cloud.databricks.com");
    }

    #[test]
    fn test_profile_without_credentials_is_not_configured() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[("DATABRICKS_CONFIG_FILE", path)]);
        let err = load_with(&env, "broken").unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref profile } if profile == "broken"));
    }

    #[test]
    fn test_unknown_profile() {
        let file = cfg_file();
        let path = file.path().to_str().unwrap();
        let env = env_of(&[("DATABRICKS_CONFIG_FILE", path)]);
        let err = load_with(&env, "prod").unwrap_err();
        assert!(matches!(err, ConfigError::MissingProfile { .. }));
    }

    #[test]
    fn test_missing_file_is_not_configured() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.cfg");
        let env = env_of(&[("DATABRICKS_CONFIG_FILE", missing.to_str().unwrap())]);
        let err = load_with(&env, DEFAULT_PROFILE).unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { .. }));
    }

    #[test]
    fn test_host_must_be_http_url() {
        let env = env_of(&[
            ("DATABRICKS_HOST", "example.cloud.databricks.com"),
            ("DATABRICKS_TOKEN", "dapi"),
        ]);
        let err = load_with(&env, DEFAULT_PROFILE).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
