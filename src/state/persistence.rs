use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{AthleteProfile, FoodItem};

/// Load an athlete profile from a JSON file.
///
/// Profiles coming off disk bypass the interactive prompts, so the range
/// validation runs here instead.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<AthleteProfile> {
    let content = fs::read_to_string(path)?;
    let profile: AthleteProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

/// Save an athlete profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &AthleteProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a custom food list from a JSON file.
///
/// The caller feeds the result to [`crate::Catalog::new`], which enforces
/// the rotation and macro invariants.
pub fn load_catalog_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(foods)
}
