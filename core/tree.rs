use crate::filter::ScanFilter;
use log;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BRANCH_MID: &str = "├── ";
const BRANCH_LAST: &str = "└── ";
const INDENT_MID: &str = "│   ";
const INDENT_LAST: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The directory could not be listed; none of its children are shown.
    UnreadableDirectory,
    /// The entry is shown but without a size annotation.
    UnreadableMetadata,
}

#[derive(Debug, Clone)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct TreeListing {
    /// Newline-terminated lines, ready to be placed in a fenced block.
    pub lines: Vec<String>,
    pub skipped: Vec<SkippedPath>,
}

#[derive(Debug)]
struct TreeEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    size: Option<io::Result<u64>>,
}

pub fn render_tree(project_root: &Path, filter: &ScanFilter) -> TreeListing {
    log::debug!("Rendering tree for: {}", project_root.display());
    let mut listing = TreeListing::default();
    render_level(project_root, project_root, "", filter, &mut listing);
    log::debug!(
        "Tree rendered: {} lines, {} skipped paths.",
        listing.lines.len(),
        listing.skipped.len()
    );
    listing
}

fn render_level(
    project_root: &Path,
    dir: &Path,
    prefix: &str,
    filter: &ScanFilter,
    listing: &mut TreeListing,
) {
    let mut entries = match list_children(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            listing.skipped.push(SkippedPath {
                path: dir.to_path_buf(),
                reason: SkipReason::UnreadableDirectory,
                message: e.to_string(),
            });
            return;
        }
    };

    entries.retain(|entry| {
        if filter.is_ignored_name(&entry.name) {
            log::trace!("Tree skipping ignored entry: {}", entry.path.display());
            return false;
        }
        let is_output = entry
            .path
            .strip_prefix(project_root)
            .is_ok_and(|rel| filter.is_excluded_output(rel));
        !is_output
    });
    // Directories first, then by name.
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));

    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let branch = if is_last { BRANCH_LAST } else { BRANCH_MID };

        let size_info = match entry.size {
            Some(Ok(size)) => format!(" ({})", format_size(size)),
            Some(Err(e)) => {
                log::debug!("No size for {}: {}", entry.path.display(), e);
                listing.skipped.push(SkippedPath {
                    path: entry.path.clone(),
                    reason: SkipReason::UnreadableMetadata,
                    message: e.to_string(),
                });
                String::new()
            }
            None => String::new(),
        };

        listing
            .lines
            .push(format!("{prefix}{branch}{}{size_info}\n", entry.name));

        if entry.is_dir {
            let indent = if is_last { INDENT_LAST } else { INDENT_MID };
            let child_prefix = format!("{prefix}{indent}");
            render_level(project_root, &entry.path, &child_prefix, filter, listing);
        }
    }
}

fn list_children(dir: &Path) -> io::Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        // Follows symlinks, so a link to a directory is listed as one.
        let metadata = fs::metadata(&path);
        let is_dir = metadata.as_ref().is_ok_and(|m| m.is_dir());
        let size = match metadata {
            Ok(m) if m.is_file() => Some(Ok(m.len())),
            Ok(_) => None,
            Err(e) if e.kind() == io::ErrorKind::NotFound => None, // dangling symlink
            Err(e) => Some(Err(e)),
        };
        entries.push(TreeEntry {
            path,
            name,
            is_dir,
            size,
        });
    }
    Ok(entries)
}

/// `512B`, `1.5KB`, `2.0MB`.
pub fn format_size(size: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if size < KIB {
        format!("{size}B")
    } else if size < MIB {
        format!("{:.1}KB", size as f64 / KIB as f64)
    } else {
        format!("{:.1}MB", size as f64 / MIB as f64)
    }
}
