use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{ExtractOptions, ResolutionPolicy, naming::DEFAULT_FILE_PATTERN};

pub const CONFIG_FILE_NAME: &str = ".sopscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub department_depth: usize,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default)]
    pub policy: ResolutionPolicy,
}

fn default_root() -> String {
    "./".to_string()
}

fn default_file_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["Archive".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["docx".to_string()]
}

fn default_output() -> String {
    "SOPS.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "SOPs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            file_pattern: default_file_pattern(),
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
            department_depth: 0,
            ignores: Vec::new(),
            output: default_output(),
            sheet_name: default_sheet_name(),
            policy: ResolutionPolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `filePattern` is not a valid regex, any glob pattern
    /// in `ignores` is invalid, or `extensions` is empty.
    pub fn validate(&self) -> Result<()> {
        Regex::new(&self.file_pattern).with_context(|| {
            format!("Invalid regex in 'filePattern': \"{}\"", self.file_pattern)
        })?;

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }

    /// Compile the matching rules used by the extractor.
    pub fn extract_options(&self) -> Result<ExtractOptions> {
        self.validate()?;

        let file_pattern = Regex::new(&self.file_pattern)?;
        let ignores = self
            .ignores
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(ExtractOptions {
            file_pattern,
            exclude_dirs: self.exclude_dirs.clone(),
            extensions,
            department_depth: self.department_depth,
            ignores,
            policy: self.policy,
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
