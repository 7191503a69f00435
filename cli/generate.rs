use crate::cli_args::Cli;
use crate::output;
use anyhow::{Context, Result};
use backend_summary_core::{self as core, Config};
use log;
use std::path::Path;

pub fn handle_generate(cli: &Cli) -> Result<()> {
    let project_root = Config::determine_project_root(cli.project_config.project_root.as_ref())
        .context("Failed to determine project root")?;
    log::info!("Project root determined: {}", project_root.display());

    let config = load_config(&project_root, cli).context("Failed to load configuration")?;

    log::info!(
        "Generating summary for: {} -> {}",
        project_root.display(),
        config.output.filename.display()
    );
    let outcome = core::generate_summary(&project_root, &config)
        .context("Failed to write the summary document")?;

    if !outcome.tree_skipped.is_empty() {
        log::info!(
            "{} path(s) were skipped while rendering the tree.",
            outcome.tree_skipped.len()
        );
        for skipped in &outcome.tree_skipped {
            log::debug!(
                "Skipped {} ({:?}): {}",
                skipped.path.display(),
                skipped.reason,
                skipped.message
            );
        }
    }

    if !cli.quiet {
        output::print_completion(&outcome, &config.output.filename);
    }
    Ok(())
}

fn load_config(project_root: &Path, cli: &Cli) -> Result<Config> {
    let config_path = Config::resolve_config_path(
        project_root,
        cli.project_config.config.as_ref(),
        cli.project_config.no_config,
    )
    .context("Failed to resolve configuration path")?;

    let mut config = match &config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(output) = &cli.output.output {
        log::trace!("Output file overridden on the command line: {}", output.display());
        config.output.filename = output.clone();
    }
    log::trace!("Effective config: {:?}", config);
    Ok(config)
}
