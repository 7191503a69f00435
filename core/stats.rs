use crate::filter::extension_key;
use crate::text::read_text;
use log;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectStats {
    pub total_files: usize,
    pub total_lines: usize,
    /// Extension (or bare file name) to file count, ascending by key.
    pub by_extension: BTreeMap<String, usize>,
}

pub fn compute_stats(files: &HashMap<String, PathBuf>) -> ProjectStats {
    let mut stats = ProjectStats {
        total_files: files.len(),
        ..ProjectStats::default()
    };
    for path in files.values() {
        *stats.by_extension.entry(extension_key(path)).or_insert(0) += 1;
        stats.total_lines += count_lines(path);
    }
    log::debug!(
        "Stats: {} files, {} lines, {} types.",
        stats.total_files,
        stats.total_lines,
        stats.by_extension.len()
    );
    stats
}

/// Lines in a UTF-8 text file; zero when it cannot be read.
fn count_lines(path: &Path) -> usize {
    match read_text(path) {
        Ok(content) => content.lines().count(),
        Err(e) => {
            log::debug!("Not counting lines of {}: {}", path.display(), e);
            0
        }
    }
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
