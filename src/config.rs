use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    /// Owner acting as the current user for owner-scoped commands.
    pub default_owner_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_owner_id: "user_owner_01".to_string(),
        }
    }
}

pub fn load_config(dir: &Path) -> Result<Config> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join("config.json");

    if !path.exists() {
        let config = Config::default();
        let data = serde_json::to_string_pretty(&config)?;
        fs::write(&path, data)?;
        return Ok(config);
    }

    let data = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_writes_default_once() -> Result<()> {
        let dir = tempdir().unwrap();

        let config = load_config(dir.path())?;
        assert_eq!(config.default_owner_id, "user_owner_01");
        assert!(dir.path().join("config.json").exists());

        // A saved config wins over the default on the next load.
        let custom = Config {
            default_owner_id: "user_owner_02".into(),
        };
        fs::write(
            dir.path().join("config.json"),
            serde_json::to_string_pretty(&custom)?,
        )?;
        let reloaded = load_config(dir.path())?;
        assert_eq!(reloaded.default_owner_id, "user_owner_02");
        Ok(())
    }
}
