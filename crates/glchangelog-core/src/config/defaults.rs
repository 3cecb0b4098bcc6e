//! Default configuration values

/// Default changelog output file
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "glchangelog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "glchangelog.yaml";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".glchangelog.toml",
        ".glchangelog.yaml",
    ]
}

