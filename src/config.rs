use crate::error::{AutobumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-autobump.
///
/// Contains the heuristic keyword tables, pre-release phrase lists, version
/// file location, and behavior options. Every table is plain data so the
/// classification rules can be tuned without code changes.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub heuristics: HeuristicsConfig,

    #[serde(default)]
    pub phrases: PhrasesConfig,

    #[serde(default)]
    pub version_file: VersionFileConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_source_extensions() -> Vec<String> {
    ["rs", "py", "js", "ts", "java", "cpp", "c"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_config_extensions() -> Vec<String> {
    ["json", "yaml", "yml", "toml", "cfg", "ini"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_doc_extensions() -> Vec<String> {
    ["md", "rst", "txt"].into_iter().map(String::from).collect()
}

fn default_manifest_markers() -> Vec<String> {
    ["package.json", "pyproject.toml", "Cargo.toml"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_breaking_keywords() -> Vec<String> {
    [
        "breaking change",
        "deprecated",
        "removed",
        "incompatible",
        "migration required",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Regex patterns matched against lower-cased diff text.
fn default_breaking_patterns() -> Vec<String> {
    ["class.*deleted", "def.*deleted", "function.*deleted"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_definition_keywords() -> Vec<String> {
    ["def ", "class ", "function ", "add method", "implement"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_api_path_markers() -> Vec<String> {
    ["api", "interface"].into_iter().map(String::from).collect()
}

fn default_core_path_markers() -> Vec<String> {
    ["api", "core"].into_iter().map(String::from).collect()
}

fn default_major_tone_keywords() -> Vec<String> {
    ["break", "breaking", "major", "incompatible"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_minor_tone_keywords() -> Vec<String> {
    ["feat", "feature", "add", "new", "implement"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_patch_tone_keywords() -> Vec<String> {
    ["fix", "bug", "patch", "hotfix"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_major_change_threshold() -> usize {
    100
}

fn default_minor_change_threshold() -> usize {
    20
}

/// Configuration for the per-file and commit-message heuristics.
///
/// Extension sets decide which scan branch a file takes; keyword and pattern
/// lists feed the diff and tone scans; thresholds gate the size heuristic.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HeuristicsConfig {
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    #[serde(default = "default_config_extensions")]
    pub config_extensions: Vec<String>,

    #[serde(default = "default_doc_extensions")]
    pub doc_extensions: Vec<String>,

    #[serde(default = "default_manifest_markers")]
    pub manifest_markers: Vec<String>,

    #[serde(default = "default_breaking_keywords")]
    pub breaking_keywords: Vec<String>,

    #[serde(default = "default_breaking_patterns")]
    pub breaking_patterns: Vec<String>,

    #[serde(default = "default_definition_keywords")]
    pub definition_keywords: Vec<String>,

    #[serde(default = "default_api_path_markers")]
    pub api_path_markers: Vec<String>,

    #[serde(default = "default_core_path_markers")]
    pub core_path_markers: Vec<String>,

    #[serde(default = "default_major_tone_keywords")]
    pub major_tone_keywords: Vec<String>,

    #[serde(default = "default_minor_tone_keywords")]
    pub minor_tone_keywords: Vec<String>,

    #[serde(default = "default_patch_tone_keywords")]
    pub patch_tone_keywords: Vec<String>,

    /// Above this many changed characters a modification is major in
    /// api/core paths, minor elsewhere
    #[serde(default = "default_major_change_threshold")]
    pub major_change_threshold: usize,

    /// Above this many changed characters (up to the major threshold) a
    /// modification is minor; at or below it is a patch
    #[serde(default = "default_minor_change_threshold")]
    pub minor_change_threshold: usize,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        HeuristicsConfig {
            source_extensions: default_source_extensions(),
            config_extensions: default_config_extensions(),
            doc_extensions: default_doc_extensions(),
            manifest_markers: default_manifest_markers(),
            breaking_keywords: default_breaking_keywords(),
            breaking_patterns: default_breaking_patterns(),
            definition_keywords: default_definition_keywords(),
            api_path_markers: default_api_path_markers(),
            core_path_markers: default_core_path_markers(),
            major_tone_keywords: default_major_tone_keywords(),
            minor_tone_keywords: default_minor_tone_keywords(),
            patch_tone_keywords: default_patch_tone_keywords(),
            major_change_threshold: default_major_change_threshold(),
            minor_change_threshold: default_minor_change_threshold(),
        }
    }
}

fn default_graduate_phrases() -> Vec<String> {
    ["[graduate]", "graduate to stable", "promote to stable"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_alpha_increment_phrases() -> Vec<String> {
    ["[alpha]", "new alpha", "bump alpha"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_beta_increment_phrases() -> Vec<String> {
    ["[beta]", "new beta", "bump beta"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_rc_increment_phrases() -> Vec<String> {
    ["[rc]", "new rc", "bump rc"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_promote_to_beta_phrases() -> Vec<String> {
    ["[promote-beta]", "promote to beta"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_promote_to_rc_phrases() -> Vec<String> {
    ["[promote-rc]", "promote to rc"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Commit-message phrases that force a pre-release transition.
///
/// Each list is a set of case-insensitive substrings matched against the
/// lower-cased commit message. Lists are checked in the field order below;
/// the first match wins and bypasses the per-file heuristics entirely.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PhrasesConfig {
    #[serde(default = "default_graduate_phrases")]
    pub graduate: Vec<String>,

    #[serde(default = "default_alpha_increment_phrases")]
    pub alpha_increment: Vec<String>,

    #[serde(default = "default_beta_increment_phrases")]
    pub beta_increment: Vec<String>,

    #[serde(default = "default_rc_increment_phrases")]
    pub rc_increment: Vec<String>,

    #[serde(default = "default_promote_to_beta_phrases")]
    pub promote_to_beta: Vec<String>,

    #[serde(default = "default_promote_to_rc_phrases")]
    pub promote_to_rc: Vec<String>,
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        PhrasesConfig {
            graduate: default_graduate_phrases(),
            alpha_increment: default_alpha_increment_phrases(),
            beta_increment: default_beta_increment_phrases(),
            rc_increment: default_rc_increment_phrases(),
            promote_to_beta: default_promote_to_beta_phrases(),
            promote_to_rc: default_promote_to_rc_phrases(),
        }
    }
}

fn default_version_file_path() -> String {
    "Cargo.toml".to_string()
}

fn default_version_file_pattern() -> String {
    r#"(?m)^version\s*=\s*"([^"]+)""#.to_string()
}

/// Location of the version string inside the project metadata file.
///
/// `pattern` is a regex whose first capture group is the version string.
/// For a Python project this would be `__about__.py` with
/// `__version__\s*=\s*"([^"]+)"`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VersionFileConfig {
    #[serde(default = "default_version_file_path")]
    pub path: String,

    #[serde(default = "default_version_file_pattern")]
    pub pattern: String,
}

impl Default for VersionFileConfig {
    fn default() -> Self {
        VersionFileConfig {
            path: default_version_file_path(),
            pattern: default_version_file_pattern(),
        }
    }
}

fn default_bot_marker() -> String {
    "\u{1F916} Auto-bump version".to_string()
}

fn default_base_branch() -> String {
    "main".to_string()
}

/// Behavior customization that does not affect classification rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Commit-message marker identifying the tool's own bump commits
    #[serde(default = "default_bot_marker")]
    pub bot_marker: String,

    /// Branch the preview mode diffs against
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            bot_marker: default_bot_marker(),
            base_branch: default_base_branch(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autobump.toml` in current directory
/// 3. `~/.config/.autobump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autobump.toml").exists() {
        fs::read_to_string("./autobump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".autobump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| AutobumpError::config(format!("Cannot parse configuration: {}", e)))?;
    Ok(config)
}
