use crate::builtin::get_static_sections;
use crate::collect::{Collection, collect_files};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::filter::{ScanFilter, dotted_extension};
use crate::manifest::{PackageManifest, dependency_lines};
use crate::redact::redact_env;
use crate::stats::{ProjectStats, compute_stats, group_thousands};
use crate::text::read_text;
use crate::tree::{SkippedPath, render_tree};
use chrono::{DateTime, Local};
use log;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SEPARATOR: &str = "---\n\n";
const SENSITIVE_NOTICE: &str = "# ⚠️ Sensitive values hidden, structure only:\n\n";

/// Sub-headings of the source section. Tested in order; each is written at
/// most once, before the first file whose path contains the pattern.
const SOURCE_CATEGORIES: [(&str, &str); 3] = [
    ("routes", "### Routes (API Endpoints)\n\n"),
    ("middleware", "### Middleware\n\n"),
    (".sql", "### Database Schemas\n\n"),
];

/// Append-only list of document fragments.
#[derive(Debug, Default)]
struct SummaryBuffer {
    fragments: Vec<String>,
}

impl SummaryBuffer {
    fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    fn separator(&mut self) {
        self.push(SEPARATOR);
    }

    fn into_document(self) -> String {
        self.fragments.concat()
    }
}

#[derive(Debug)]
pub struct RenderedSummary {
    pub document: String,
    pub stats: ProjectStats,
    pub tree_skipped: Vec<SkippedPath>,
    pub collection_errors: Vec<AppError>,
}

#[derive(Debug)]
pub struct SummaryOutcome {
    pub output_path: PathBuf,
    pub stats: ProjectStats,
    pub tree_skipped: Vec<SkippedPath>,
    pub collection_errors: Vec<AppError>,
}

/// Renders the summary with the current local time and writes it to
/// `<project_root>/<output.filename>`, replacing any previous file. Only the
/// write can fail.
pub fn generate_summary(project_root: &Path, config: &Config) -> Result<SummaryOutcome> {
    let rendered = render_summary(project_root, config, Local::now());
    let output_path = config.output_path(project_root);

    log::info!("Writing summary to: {}", output_path.display());
    write_document(&output_path, &rendered.document)?;

    Ok(SummaryOutcome {
        output_path,
        stats: rendered.stats,
        tree_skipped: rendered.tree_skipped,
        collection_errors: rendered.collection_errors,
    })
}

pub fn render_summary(
    project_root: &Path,
    config: &Config,
    generated_at: DateTime<Local>,
) -> RenderedSummary {
    let filter =
        ScanFilter::builtin().with_excluded_output(config.output_relative_path(project_root));
    let mut buffer = SummaryBuffer::default();

    push_title(&mut buffer, project_root, config, generated_at);

    log::debug!("Rendering file structure...");
    let tree = render_tree(project_root, &filter);
    buffer.push("## 📁 Backend File Structure\n\n```\n");
    for line in tree.lines {
        buffer.push(line);
    }
    buffer.push("```\n\n");
    buffer.separator();

    log::debug!("Rendering dependencies...");
    push_dependencies(&mut buffer, project_root);
    buffer.separator();

    log::debug!("Rendering source files...");
    let Collection { files, errors } = collect_files(project_root, &filter);
    buffer.push("## 📄 Source Code Files\n\n");
    push_sources(&mut buffer, &files, &filter);
    buffer.separator();

    let sections = get_static_sections();
    for section in [
        &sections.api_routes,
        &sections.database_schema,
        &sections.environment_variables,
    ] {
        buffer.push(section.as_str());
        buffer.push("\n");
        buffer.separator();
    }

    log::debug!("Computing statistics...");
    let stats = compute_stats(&files);
    push_stats(&mut buffer, &stats);
    buffer.push("\n");
    buffer.separator();

    buffer.push(sections.quick_start.as_str());
    buffer.push("\n");

    RenderedSummary {
        document: buffer.into_document(),
        stats,
        tree_skipped: tree.skipped,
        collection_errors: errors,
    }
}

fn push_title(
    buffer: &mut SummaryBuffer,
    project_root: &Path,
    config: &Config,
    generated_at: DateTime<Local>,
) {
    let resolved_root = project_root
        .canonicalize()
        .unwrap_or_else(|_| project_root.to_path_buf());
    buffer.push(format!("# 🚀 {} - Project Summary\n\n", config.general.title));
    buffer.push(format!(
        "**Generated at**: {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    buffer.push(format!("**Project path**: {}\n\n", resolved_root.display()));
    buffer.separator();
}

fn push_dependencies(buffer: &mut SummaryBuffer, project_root: &Path) {
    buffer.push("## 📦 Dependencies Overview\n\n");
    match PackageManifest::load(project_root) {
        None => {}
        Some(Ok(manifest)) => {
            buffer.push("### Production Dependencies\n\n");
            for line in dependency_lines(&manifest.dependencies) {
                buffer.push(line);
            }
            buffer.push("\n");

            buffer.push("### Development Dependencies\n\n");
            for line in dependency_lines(&manifest.dev_dependencies) {
                buffer.push(line);
            }
            buffer.push("\n");
        }
        Some(Err(e)) => {
            log::warn!("Unable to parse package.json: {}", e);
            buffer.push(format!("⚠️ Unable to parse package.json: {e}\n\n"));
        }
    }
}

/// Sort order of the source section: category priority, then path.
pub fn ordered_paths<'a>(
    files: impl IntoIterator<Item = &'a String>,
    filter: &ScanFilter,
) -> Vec<&'a String> {
    let mut paths: Vec<&String> = files.into_iter().collect();
    paths.sort_by(|a, b| {
        filter
            .category_priority(a)
            .cmp(&filter.category_priority(b))
            .then_with(|| a.cmp(b))
    });
    paths
}

fn push_sources(
    buffer: &mut SummaryBuffer,
    files: &HashMap<String, PathBuf>,
    filter: &ScanFilter,
) {
    let mut emitted_categories: HashSet<&str> = HashSet::new();

    for relative_path in ordered_paths(files.keys(), filter) {
        let path = &files[relative_path];

        if let Some((pattern, heading)) = SOURCE_CATEGORIES.iter().find(|(pattern, _)| {
            relative_path.contains(pattern) && !emitted_categories.contains(pattern)
        }) {
            buffer.push(*heading);
            emitted_categories.insert(*pattern);
        }

        buffer.push(format!("#### 📄 `{relative_path}`\n\n"));

        let content = match read_text(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Unable to read {}: {}", path.display(), e);
                buffer.push(format!("```\n⚠️ Unable to read file: {e}\n```\n\n"));
                continue;
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if filter.is_sensitive(&file_name) {
            log::debug!("Redacting sensitive file: {}", relative_path);
            buffer.push("```env\n");
            buffer.push(SENSITIVE_NOTICE);
            buffer.push(redact_env(&content));
            buffer.push("\n```\n\n");
        } else {
            let lang = fence_language(path);
            buffer.push(format!("```{lang}\n{content}\n```\n\n"));
        }
    }
}

/// Fence info string for a file: by extension first, then by exact name.
pub fn fence_language(path: &Path) -> &'static str {
    match dotted_extension(path).as_deref() {
        Some(".js") => return "javascript",
        Some(".json") => return "json",
        Some(".sql") => return "sql",
        Some(".md") => return "markdown",
        _ => {}
    }
    match path.file_name().and_then(|n| n.to_str()) {
        Some(".env.example") => "env",
        _ => "",
    }
}

fn push_stats(buffer: &mut SummaryBuffer, stats: &ProjectStats) {
    buffer.push("## 📊 Project Statistics\n\n");
    buffer.push(format!("- **Total files**: {}\n", stats.total_files));
    buffer.push(format!(
        "- **Total lines of code**: {}\n",
        group_thousands(stats.total_lines)
    ));
    buffer.push("- **File types**:\n");
    for (ext, count) in &stats.by_extension {
        buffer.push(format!("  - `{ext}`: {count} files\n"));
    }
}

fn write_document(output_path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(output_path, document).map_err(|e| AppError::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })
}
