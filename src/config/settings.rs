use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassKeepError, Result};

/// User-level configuration, loaded from `<home>/.passkeep/config.toml`.
///
/// Every field has a sensible default so PassKeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the home directory, or absolute) where the
    /// vault file is stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Name of the vault file inside `vault_dir`.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passkeep".to_string()
}

fn default_vault_file() -> String {
    "passwords.json".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            vault_file: default_vault_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for inside the vault directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<home_dir>/.passkeep/config.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(home_dir: &Path) -> Result<Self> {
        let config_path = home_dir.join(default_vault_dir()).join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassKeepError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file.
    ///
    /// Example: `/home/user/.passkeep/passwords.json`.  An absolute
    /// `vault_dir` is used as-is.
    pub fn vault_path(&self, home_dir: &Path) -> PathBuf {
        home_dir.join(&self.vault_dir).join(&self.vault_file)
    }
}

/// Locate the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| PassKeepError::ConfigError("could not determine home directory".into()))
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, ".passkeep");
        assert_eq!(s.vault_file, "passwords.json");
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, ".passkeep");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".passkeep")).unwrap();
        let config = "vault_dir = \"secrets\"\nvault_file = \"main.json\"\n";
        fs::write(tmp.path().join(".passkeep/config.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "secrets");
        assert_eq!(settings.vault_file, "main.json");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".passkeep")).unwrap();
        fs::write(
            tmp.path().join(".passkeep/config.toml"),
            "vault_file = \"work.json\"\n",
        )
        .unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "work.json");
        assert_eq!(settings.vault_dir, ".passkeep");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".passkeep")).unwrap();
        fs::write(tmp.path().join(".passkeep/config.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn vault_path_builds_correct_path() {
        let s = Settings::default();
        let home = Path::new("/home/user");
        assert_eq!(
            s.vault_path(home),
            PathBuf::from("/home/user/.passkeep/passwords.json")
        );
    }

    #[test]
    fn vault_path_respects_absolute_vault_dir() {
        let s = Settings {
            vault_dir: "/var/lib/passkeep".to_string(),
            ..Settings::default()
        };
        let home = Path::new("/home/user");
        assert_eq!(
            s.vault_path(home),
            PathBuf::from("/var/lib/passkeep/passwords.json")
        );
    }
}
