use crate::error::AppError;
use crate::filter::ScanFilter;
use colored::Colorize;
use log;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct Collection {
    /// Relative path (as displayed in the summary) to absolute path.
    pub files: HashMap<String, PathBuf>,
    /// Entries the walk could not read. Their subtrees are missing from
    /// `files`; everything else was still visited.
    pub errors: Vec<AppError>,
}

pub fn collect_files(project_root: &Path, filter: &ScanFilter) -> Collection {
    log::info!("Collecting files under: {}", project_root.display());
    let mut collection = Collection::default();

    let walker = WalkDir::new(project_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !filter.is_ignored_name(&entry.file_name().to_string_lossy())
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let err = AppError::from(e);
                eprintln!("{} {}", "Error collecting files:".yellow(), err);
                log::warn!("Skipping unreadable entry during collection: {}", err);
                collection.errors.push(err);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(relative_path) = pathdiff::diff_paths(entry.path(), project_root) else {
            log::warn!("Could not get relative path for: {}", entry.path().display());
            continue;
        };
        if filter.has_ignored_component(&relative_path) {
            log::trace!("Excluding ignored path: {}", relative_path.display());
            continue;
        }
        if filter.is_excluded_output(&relative_path) {
            log::trace!("Excluding generated output: {}", relative_path.display());
            continue;
        }
        if !filter.is_collectable(&relative_path) {
            log::trace!("Not collected: {}", relative_path.display());
            continue;
        }

        log::trace!("Collected: {}", relative_path.display());
        collection.files.insert(
            relative_path.to_string_lossy().into_owned(),
            entry.path().to_path_buf(),
        );
    }

    log::info!(
        "Collected {} files ({} walk errors).",
        collection.files.len(),
        collection.errors.len()
    );
    collection
}
