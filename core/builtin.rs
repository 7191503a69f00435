use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryPriority {
    pub pattern: String,
    pub priority: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct BuiltinFilters {
    #[serde(default)]
    pub ignore_dirs: Vec<String>,
    #[serde(default)]
    pub include_extensions: Vec<String>,
    #[serde(default)]
    pub include_names: Vec<String>,
    #[serde(default)]
    pub sensitive_files: Vec<String>,
    #[serde(default)]
    pub category_priority: Vec<CategoryPriority>,
}

#[derive(Debug, Deserialize)]
pub struct StaticSections {
    pub api_routes: String,
    pub database_schema: String,
    pub environment_variables: String,
    pub quick_start: String,
}

static BUILTIN_FILTERS: Lazy<BuiltinFilters> = Lazy::new(|| {
    let yaml_content = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../data/builtin_filters.yaml"
    ));
    serde_yml::from_str(yaml_content).expect("Failed to parse embedded data/builtin_filters.yaml")
});
static STATIC_SECTIONS: Lazy<StaticSections> = Lazy::new(|| {
    let yaml_content = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../data/static_sections.yaml"
    ));
    serde_yml::from_str(yaml_content).expect("Failed to parse embedded data/static_sections.yaml")
});

pub fn get_builtin_filters() -> &'static BuiltinFilters {
    &BUILTIN_FILTERS
}
pub fn get_static_sections() -> &'static StaticSections {
    &STATIC_SECTIONS
}
