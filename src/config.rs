use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntegritydbConfig {
    pub path: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("integritydb.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<IntegritydbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: IntegritydbConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &IntegritydbConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("integritydb.toml");

        let config = IntegritydbConfig { path: Some("store/integrity.db".to_string()) };
        write_config(&config_path, &config, false).unwrap();

        let loaded = load_config(Some(&config_path)).unwrap().unwrap();
        assert_eq!(loaded.path.as_deref(), Some("store/integrity.db"));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("integritydb.toml");

        let config = IntegritydbConfig::default();
        write_config(&config_path, &config, false).unwrap();
        assert!(write_config(&config_path, &config, false).is_err());
        assert!(write_config(&config_path, &config, true).is_ok());
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope.toml");
        assert!(load_config(Some(&absent)).unwrap().is_none());
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("deep").join("integrity.db");

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }
}
