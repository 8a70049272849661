use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for bump-version.
///
/// Contains file paths, release-tag settings, changelog formatting, and conventional
/// commit classification rules.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,
}

fn default_manifest_path() -> String {
    "manifest.json".to_string()
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

/// Default file locations, overridable on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest_path")]
    pub manifest: String,

    #[serde(default = "default_changelog_path")]
    pub changelog: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest_path(),
            changelog: default_changelog_path(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Release tag settings.
///
/// Only tags carrying the prefix are considered release tags when searching
/// history for the previous release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
        }
    }
}

fn default_changelog_heading() -> String {
    "# Changelog".to_string()
}

/// Changelog document settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_heading")]
    pub heading: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            heading: default_changelog_heading(),
        }
    }
}

/// Returns the default list of commit types that trigger a minor bump.
fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Returns the default list of commit types that trigger a patch bump.
fn default_patch_types() -> Vec<String> {
    vec!["fix".to_string()]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string()]
}

/// Configuration for conventional commit analysis.
///
/// Defines the commit types and breaking change indicators used to classify
/// commits and determine the version bump.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<String>,

    #[serde(default = "default_patch_types")]
    pub patch_types: Vec<String>,

    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            minor_types: default_minor_types(),
            patch_types: default_patch_types(),
            breaking_change_indicators: default_breaking_change_indicators(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: FilesConfig::default(),
            tags: TagsConfig::default(),
            changelog: ChangelogConfig::default(),
            conventional_commits: ConventionalCommitsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumpversion.toml").exists() {
        fs::read_to_string("./bumpversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumpversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
