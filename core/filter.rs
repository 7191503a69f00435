use crate::builtin::{CategoryPriority, get_builtin_filters};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Priority given to paths that match no category pattern.
pub const FALLBACK_PRIORITY: u32 = 99;

/// The fixed rule set shared by the tree renderer and the file collector.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    ignore_dirs: HashSet<String>,
    include_extensions: HashSet<String>,
    include_names: HashSet<String>,
    sensitive_files: HashSet<String>,
    categories: Vec<CategoryPriority>,
    excluded_output: Option<PathBuf>,
}

impl ScanFilter {
    pub fn builtin() -> Self {
        let builtin = get_builtin_filters();
        Self {
            ignore_dirs: builtin.ignore_dirs.iter().cloned().collect(),
            include_extensions: builtin.include_extensions.iter().cloned().collect(),
            include_names: builtin.include_names.iter().cloned().collect(),
            sensitive_files: builtin.sensitive_files.iter().cloned().collect(),
            categories: builtin.category_priority.clone(),
            excluded_output: None,
        }
    }

    /// Hides the generated summary (given relative to the project root) from
    /// both the tree and the collection.
    pub fn with_excluded_output(mut self, relative_output: Option<PathBuf>) -> Self {
        self.excluded_output = relative_output;
        self
    }

    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name)
    }

    pub fn has_ignored_component(&self, relative_path: &Path) -> bool {
        relative_path.components().any(|c| match c {
            Component::Normal(name) => self.is_ignored_name(&name.to_string_lossy()),
            _ => false,
        })
    }

    pub fn is_excluded_output(&self, relative_path: &Path) -> bool {
        self.excluded_output
            .as_deref()
            .is_some_and(|out| out == relative_path)
    }

    pub fn is_sensitive(&self, file_name: &str) -> bool {
        self.sensitive_files.contains(file_name)
    }

    /// True when the file's extension or exact name is in the include set, or
    /// its name is in the sensitive set.
    pub fn is_collectable(&self, relative_path: &Path) -> bool {
        let Some(name) = relative_path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if self.include_names.contains(name.as_ref()) || self.is_sensitive(&name) {
            return true;
        }
        dotted_extension(relative_path).is_some_and(|ext| self.include_extensions.contains(&ext))
    }

    /// First pattern contained anywhere in the path wins.
    pub fn category_priority(&self, relative_path: &str) -> u32 {
        self.categories
            .iter()
            .find(|c| relative_path.contains(c.pattern.as_str()))
            .map_or(FALLBACK_PRIORITY, |c| c.priority)
    }
}

/// Extension with its leading dot (`.js`), or `None` for dotfiles and
/// extensionless names.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
}

/// Key used for the per-type statistics: the dotted extension, or the whole
/// file name when there is none.
pub fn extension_key(path: &Path) -> String {
    dotted_extension(path).unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}
