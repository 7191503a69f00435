pub mod builtin;
pub mod collect;
pub mod config;
pub mod error;
pub mod filter;
pub mod manifest;
pub mod redact;
pub mod stats;
pub mod summary;
pub mod text;
pub mod tree;

pub use builtin::{BuiltinFilters, CategoryPriority, StaticSections, get_builtin_filters, get_static_sections};
pub use collect::{Collection, collect_files};
pub use config::{Config, GeneralConfig, OutputConfig};
pub use error::{AppError, Result};
pub use filter::{FALLBACK_PRIORITY, ScanFilter};
pub use manifest::PackageManifest;
pub use redact::{REDACTED_PLACEHOLDER, redact_env, redact_line};
pub use stats::ProjectStats;
pub use summary::{RenderedSummary, SummaryOutcome, generate_summary, render_summary};
pub use tree::{SkipReason, SkippedPath, TreeListing, render_tree};
