use std::env;
use std::path::{Path, PathBuf};

/// Storage configuration: where the JSON data files live.
///
/// The directory comes from a CLI flag, `DIETMATE_DATA_DIR`, the config
/// file, or `~/.dietmate`, resolved by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `profile.json`, `recipes.json` and `plans.json`.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Environment variable that overrides the data directory.
    pub const ENV_VAR: &str = "DIETMATE_DATA_DIR";

    /// Directory name used under the home directory by default.
    pub const DEFAULT_DIR_NAME: &str = ".dietmate";

    pub const PROFILE_FILE: &str = "profile.json";
    pub const RECIPES_FILE: &str = "recipes.json";
    pub const PLANS_FILE: &str = "plans.json";

    /// Data directory named by `DIETMATE_DATA_DIR`, if set and non-empty.
    pub fn env_data_dir() -> Option<PathBuf> {
        env::var_os(Self::ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Build a config from an explicit directory (useful for tests and CLI flags).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `~/.dietmate`, or `./.dietmate` when no home directory is known.
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::DEFAULT_DIR_NAME)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(Self::PROFILE_FILE)
    }

    pub fn recipes_path(&self) -> PathBuf {
        self.data_dir.join(Self::RECIPES_FILE)
    }

    pub fn plans_path(&self) -> PathBuf {
        self.data_dir.join(Self::PLANS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_ends_with_dietmate() {
        assert!(StoreConfig::default_data_dir().ends_with(".dietmate"));
    }

    #[test]
    fn file_paths_live_in_data_dir() {
        let cfg = StoreConfig::new("/tmp/dm");
        assert_eq!(cfg.profile_path(), PathBuf::from("/tmp/dm/profile.json"));
        assert_eq!(cfg.recipes_path(), PathBuf::from("/tmp/dm/recipes.json"));
        assert_eq!(cfg.plans_path(), PathBuf::from("/tmp/dm/plans.json"));
        assert_eq!(cfg.data_dir(), Path::new("/tmp/dm"));
    }
}
