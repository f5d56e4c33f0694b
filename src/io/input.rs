use crate::core::requirements::RawRequirements;
use crate::errors::Result;
use std::fs;
use std::path::Path;

/// Read raw requirements from a `.toml` file or, for any other extension, a
/// JSON file.
pub fn load_requirements(path: &Path) -> Result<RawRequirements> {
    let contents = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let raw = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    log::debug!("Loaded requirements from {}", path.display());
    Ok(raw)
}
