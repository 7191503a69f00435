use crate::error::{AppError, Result};
use indexmap::IndexMap;
use log;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const MANIFEST_FILENAME: &str = "package.json";

/// The parts of an npm `package.json` the summary lists. Key order is kept
/// as declared.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, Value>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, Value>,
}

impl PackageManifest {
    /// Only a top-level object carries dependency tables; any other JSON
    /// document yields empty tables.
    pub fn from_json_str(content: &str) -> Result<Self> {
        // The derived impl would also read a sequence positionally.
        if !serde_json::from_str::<Value>(content)?.is_object() {
            log::debug!("{} is not a JSON object, listing no dependencies", MANIFEST_FILENAME);
            return Ok(Self::default());
        }
        serde_json::from_str(content).map_err(AppError::from)
    }

    /// `None` when the project has no manifest at its root.
    pub fn load(project_root: &Path) -> Option<Result<Self>> {
        let path = project_root.join(MANIFEST_FILENAME);
        if !path.exists() {
            log::debug!("No {} at {}", MANIFEST_FILENAME, project_root.display());
            return None;
        }
        log::debug!("Parsing manifest: {}", path.display());
        let parsed = fs::read_to_string(&path)
            .map_err(|e| AppError::FileRead {
                path: path.clone(),
                source: e,
            })
            .and_then(|content| Self::from_json_str(&content));
        Some(parsed)
    }
}

/// One `- name: constraint` line per entry.
pub fn dependency_lines(deps: &IndexMap<String, Value>) -> Vec<String> {
    deps.iter()
        .map(|(name, version)| match version {
            Value::String(constraint) => format!("- {name}: {constraint}\n"),
            other => format!("- {name}: {other}\n"),
        })
        .collect()
}
