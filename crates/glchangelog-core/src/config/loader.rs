//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// The first name from [`config_file_names`] present in the nearest
/// directory wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration, falling back to defaults when no file exists.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChangelogError;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("glchangelog.toml");
        std::fs::write(&config_path, "[changelog]\nfile = \"CHANGES.md\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("glchangelog.toml");
        let yaml_path = temp.path().join("glchangelog.yaml");
        std::fs::write(&toml_path, "[gitlab]\nper_page = 50").unwrap();
        std::fs::write(&yaml_path, "gitlab:\n  per_page: 20").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let config_path = temp.path().join(".glchangelog.yaml");
        std::fs::write(&config_path, "changelog:\n  file: CHANGES.md\n").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("glchangelog.toml");
        std::fs::write(
            &config_path,
            "[gitlab]\nper_page = 50\n\n[changelog]\nfile = \"docs/CHANGELOG.md\"\ntemplate = \"tpl.md\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.gitlab.per_page, 50);
        assert_eq!(config.changelog.file, PathBuf::from("docs/CHANGELOG.md"));
        assert_eq!(config.changelog.template, Some(PathBuf::from("tpl.md")));
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("glchangelog.yaml");
        std::fs::write(&config_path, "gitlab:\n  per_page: 20\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.gitlab.per_page, 20);
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("glchangelog.toml"), "[gitlab]\nper_page = 500\n").unwrap();

        let err = load_config_or_default(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::Config(ConfigError::InvalidValue { .. })
        ));
    }
}
