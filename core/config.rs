use crate::error::{AppError, Result};
use log;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_DIR: &str = ".backend-summary";
pub const DEFAULT_CONFIG_FILENAME: &str = "summary.toml";
pub const DEFAULT_OUTPUT_FILENAME: &str = "BACKEND_SUMMARY.md";
pub const DEFAULT_TITLE: &str = "Lego Forum Backend";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_filename")]
    pub filename: PathBuf,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_output_filename() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILENAME)
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: default_output_filename(),
        }
    }
}

impl Config {
    /// Resolves the directory to summarize. Falls back to the current
    /// directory, expands `~`, and canonicalizes the result.
    pub fn determine_project_root(cli_project_root: Option<&PathBuf>) -> Result<PathBuf> {
        let path_to_resolve = match cli_project_root {
            Some(p) => PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref()),
            None => env::current_dir().map_err(AppError::Io)?,
        };

        path_to_resolve.canonicalize().map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to canonicalize project root '{}': {}",
                    path_to_resolve.display(),
                    e
                ),
            ))
        })
    }

    pub fn resolve_config_path(
        project_root: &Path,
        cli_config_file: Option<&PathBuf>,
        cli_disable_config: bool,
    ) -> Result<Option<PathBuf>> {
        if cli_disable_config {
            log::debug!("Config file loading disabled via CLI flag.");
            return Ok(None);
        }

        match cli_config_file {
            Some(path) => {
                let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
                if !expanded.exists() {
                    return Err(AppError::Config(format!(
                        "Specified config file not found at path: {}",
                        expanded.display()
                    )));
                }
                log::debug!("Using specified config file path: {}", expanded.display());
                Ok(Some(expanded))
            }
            None => {
                let default_path = project_root
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    log::debug!("Using default config file path: {}", default_path.display());
                    Ok(Some(default_path))
                } else {
                    log::debug!(
                        "No config file specified and default not found at: {}",
                        default_path.display()
                    );
                    Ok(None)
                }
            }
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::info!("Loading configuration from: {}", config_path.display());
        let toml_content = fs::read_to_string(config_path).map_err(|e| AppError::FileRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&toml_content).map_err(|e| {
            AppError::TomlParse(format!(
                "Error parsing config file '{}': {}. Check TOML syntax and structure.",
                config_path.display(),
                e
            ))
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output.filename)
    }

    /// The output file's path relative to the project root, if it lands
    /// inside the root at all.
    pub fn output_relative_path(&self, project_root: &Path) -> Option<PathBuf> {
        if self.output.filename.is_absolute() {
            self.output
                .filename
                .strip_prefix(project_root)
                .ok()
                .map(Path::to_path_buf)
        } else {
            pathdiff::diff_paths(self.output_path(project_root), project_root)
        }
    }
}
