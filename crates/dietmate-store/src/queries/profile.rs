//! Queries for `profile.json`.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::Profile;

use super::{read_json, write_json};

/// Load the saved profile, or `None` if none has been saved.
pub fn load_profile(config: &StoreConfig) -> Result<Option<Profile>, StoreError> {
    read_json(&config.profile_path())
}

/// Overwrite the profile file with `profile`.
pub fn save_profile(config: &StoreConfig, profile: &Profile) -> Result<(), StoreError> {
    write_json(&config.profile_path(), profile, "profile")
}
