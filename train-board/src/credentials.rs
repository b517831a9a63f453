//! API credential resolution.
//!
//! Each secret has a name such as `.transportAppId`. It is looked up first
//! in the environment, under the name with its leading marker stripped and
//! uppercased (`TRANSPORTAPPID`), then in a local file literally called
//! `.transportAppId`. Empty values count as absent.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Credential name for the application identifier.
pub const APP_ID: &str = ".transportAppId";

/// Credential name for the application key.
pub const APP_KEY: &str = ".transportAppKey";

/// Error returned when a credential cannot be found anywhere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no credential for {name}: set ${env_var} or create the file {}", .file.display())]
pub struct CredentialError {
    name: String,
    env_var: String,
    file: PathBuf,
}

/// The pair of secrets every upstream request carries.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Resolve both secrets from the environment or the current directory.
    pub fn resolve() -> Result<Self, CredentialError> {
        Self::resolve_in(".")
    }

    /// Resolve both secrets, looking for credential files in `dir`.
    pub fn resolve_in(dir: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let dir = dir.as_ref();
        Ok(Self {
            app_id: resolve_in(dir, APP_ID)?,
            app_key: resolve_in(dir, APP_KEY)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Environment variable consulted for a credential name.
///
/// ```
/// use train_board::credentials::env_var_name;
///
/// assert_eq!(env_var_name(".transportAppKey"), "TRANSPORTAPPKEY");
/// ```
pub fn env_var_name(name: &str) -> String {
    name.strip_prefix('.').unwrap_or(name).to_uppercase()
}

/// Resolve one credential from the environment or the current directory.
pub fn resolve(name: &str) -> Result<String, CredentialError> {
    resolve_in(".", name)
}

/// Resolve one credential from the environment or a file in `dir`.
///
/// The environment always wins when both sources are present.
pub fn resolve_in(dir: impl AsRef<Path>, name: &str) -> Result<String, CredentialError> {
    let env_var = env_var_name(name);
    resolve_with(dir.as_ref(), name, std::env::var(&env_var).ok(), env_var)
}

fn resolve_with(
    dir: &Path,
    name: &str,
    env_value: Option<String>,
    env_var: String,
) -> Result<String, CredentialError> {
    if let Some(value) = non_empty(env_value) {
        debug!(credential = name, env_var = %env_var, "credential taken from environment");
        return Ok(value);
    }

    let file = dir.join(name);
    if let Some(value) = non_empty(std::fs::read_to_string(&file).ok()) {
        debug!(credential = name, file = %file.display(), "credential read from file");
        return Ok(value);
    }

    Err(CredentialError {
        name: name.to_string(),
        env_var,
        file,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn resolve_test(dir: &Path, env_value: Option<&str>) -> Result<String, CredentialError> {
        resolve_with(
            dir,
            APP_ID,
            env_value.map(str::to_string),
            env_var_name(APP_ID),
        )
    }

    #[test]
    fn env_var_names() {
        assert_eq!(env_var_name(APP_ID), "TRANSPORTAPPID");
        assert_eq!(env_var_name(APP_KEY), "TRANSPORTAPPKEY");
        assert_eq!(env_var_name("plainName"), "PLAINNAME");
    }

    #[test]
    fn environment_wins_over_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(APP_ID), "from-file").unwrap();

        let value = resolve_test(dir.path(), Some("from-env")).unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn falls_back_to_trimmed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(APP_ID), "  abc123\n").unwrap();

        let value = resolve_test(dir.path(), None).unwrap();
        assert_eq!(value, "abc123");
    }

    #[test]
    fn empty_env_value_falls_through() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(APP_ID), "from-file").unwrap();

        let value = resolve_test(dir.path(), Some("")).unwrap();
        assert_eq!(value, "from-file");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(APP_ID), "\n").unwrap();

        let err = resolve_test(dir.path(), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("$TRANSPORTAPPID"));
        assert!(message.contains(".transportAppId"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::new("id-123", "key-456");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("id-123"));
        assert!(!debug.contains("key-456"));
    }
}
