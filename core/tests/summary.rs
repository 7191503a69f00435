use backend_summary_core::{Config, ScanFilter, collect_files, generate_summary, render_summary};
use chrono::{Local, TimeZone};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn lego_backend() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "package.json",
        r#"{"name":"lego-backend","dependencies":{"express":"^4.18.0","pg":"^8.11.3"},"devDependencies":{"nodemon":"^3.0.2"}}"#,
    );
    write(root, ".env", "DB_PASSWORD=secret\n# comment\nPORT=5000");
    write(root, ".env.example", "DB_PASSWORD=\nPORT=5000\n");
    write(root, "src/server.js", "const app = require('express')();\n");
    write(root, "src/db.js", "module.exports = pool;\n");
    write(root, "src/routes/auth.js", "// auth\n");
    write(root, "src/routes/posts.js", "// posts\n");
    write(root, "src/middleware/auth.js", "// verify jwt\n");
    write(root, "src/utils/format.js", "// utils\n");
    write(root, "schema.sql", "CREATE TABLE users (id SERIAL);\n");
    write(root, "README.md", "# Lego Forum\n");
    write(root, "node_modules/express/index.js", "module.exports = {};\n");
    write(root, "node_modules/express/package.json", "{}");
    write(root, "dist/bundle.js", "minified();\n");
    write(root, "public/logo.png", "not really a png");
    dir
}

#[test]
fn express_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), "package.json", r#"{"dependencies":{"express":"^4.18.0"}}"#);
    write(dir.path(), "routes/auth.js", "// auth");

    let doc = render_summary(dir.path(), &Config::default(), Local::now()).document;

    assert!(doc.contains("express: ^4.18.0\n"));
    assert_eq!(doc.matches("### Routes").count(), 1);
    assert!(doc.contains("```javascript\n// auth\n```"));
}

#[test]
fn env_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".env", "DB_PASSWORD=secret\n# comment\nPORT=5000");

    let doc = render_summary(dir.path(), &Config::default(), Local::now()).document;

    assert!(doc.contains("DB_PASSWORD=***HIDDEN***\n# comment\nPORT=***HIDDEN***\n```"));
    assert!(!doc.contains("DB_PASSWORD=secret"));
}

#[test]
fn sections_appear_in_order() {
    let dir = lego_backend();
    let doc = render_summary(dir.path(), &Config::default(), Local::now()).document;

    let headings = [
        "# 🚀 Lego Forum Backend - Project Summary",
        "## 📁 Backend File Structure",
        "## 📦 Dependencies Overview",
        "### Production Dependencies",
        "### Development Dependencies",
        "## 📄 Source Code Files",
        "## 🗺️ API Routes Overview",
        "## 🗄️ Database Schema",
        "## ⚙️ Environment Variables",
        "## 📊 Project Statistics",
        "## 🚀 Quick Start",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| doc.find(h).unwrap_or_else(|| panic!("missing heading {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    assert!(doc.contains("- express: ^4.18.0\n- pg: ^8.11.3\n"));
    assert!(doc.contains("- nodemon: ^3.0.2\n"));
}

#[test]
fn source_files_follow_category_priority() {
    let dir = lego_backend();
    let doc = render_summary(dir.path(), &Config::default(), Local::now()).document;

    let order = [
        "`package.json`",
        "`.env`",
        "`.env.example`",
        "`src/server.js`",
        "`src/db.js`",
        "`src/routes/auth.js`",
        "`src/routes/posts.js`",
        "`src/middleware/auth.js`",
        "`src/utils/format.js`",
        "`schema.sql`",
        "`README.md`",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|p| {
            doc.find(&format!("#### 📄 {p}\n"))
                .unwrap_or_else(|| panic!("missing file heading {p}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    assert!(doc.contains("```env\nDB_PASSWORD=\nPORT=5000\n\n```"));
    assert!(doc.contains("```sql\nCREATE TABLE users (id SERIAL);\n\n```"));
    assert!(doc.contains("```markdown\n# Lego Forum\n\n```"));
}

#[test]
fn ignored_directories_stay_out_of_tree_and_sources() {
    let dir = lego_backend();
    let doc = render_summary(dir.path(), &Config::default(), Local::now()).document;

    assert!(!doc.contains("node_modules"));
    assert!(!doc.contains("bundle.js"));
    assert!(!doc.contains("minified"));
    // Listed in the tree, but never embedded.
    assert!(doc.contains("logo.png (16B)"));
    assert!(!doc.contains("`public/logo.png`"));
}

#[test]
fn statistics_match_collection() {
    let dir = lego_backend();
    let rendered = render_summary(dir.path(), &Config::default(), Local::now());
    let collection = collect_files(dir.path(), &ScanFilter::builtin());

    assert_eq!(rendered.stats.total_files, collection.files.len());
    assert_eq!(rendered.stats.total_files, 11);
    assert_eq!(
        rendered.stats.by_extension.values().sum::<usize>(),
        rendered.stats.total_files
    );
    assert!(rendered.document.contains("- **Total files**: 11\n"));
    assert!(rendered.document.contains("  - `.js`: 6 files\n"));
    assert!(rendered.document.contains("  - `.env`: 1 files\n"));
    assert!(rendered.document.contains("  - `.example`: 1 files\n"));

    let types = rendered.document.find("- **File types**:").unwrap();
    let env = rendered.document[types..].find("`.env`").unwrap();
    let js = rendered.document[types..].find("`.js`").unwrap();
    let sql = rendered.document[types..].find("`.sql`").unwrap();
    assert!(env < js && js < sql);
}

#[test]
fn repeated_renders_are_identical() {
    let dir = lego_backend();
    let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let first = render_summary(dir.path(), &Config::default(), at).document;
    let second = render_summary(dir.path(), &Config::default(), at).document;
    assert_eq!(first, second);
}

#[test]
fn regenerating_ignores_previous_output() {
    let dir = lego_backend();

    let first = generate_summary(dir.path(), &Config::default()).unwrap();
    let first_doc = fs::read_to_string(&first.output_path).unwrap();
    let second = generate_summary(dir.path(), &Config::default()).unwrap();
    let second_doc = fs::read_to_string(&second.output_path).unwrap();

    assert_eq!(first.stats, second.stats);
    let strip_time = |doc: &str| -> String {
        doc.lines()
            .filter(|l| !l.starts_with("**Generated at**"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip_time(&first_doc), strip_time(&second_doc));
    assert!(!second_doc.contains("BACKEND_SUMMARY.md"));
}

#[test]
fn output_filename_comes_from_config() {
    let dir = lego_backend();
    let config = Config::from_toml_str("[output]\nfilename = \"docs/SUMMARY.md\"\n").unwrap();

    let outcome = generate_summary(dir.path(), &config).unwrap();
    assert_eq!(outcome.output_path, dir.path().join("docs/SUMMARY.md"));
    assert!(outcome.output_path.is_file());
}
