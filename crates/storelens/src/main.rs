//! storelens CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use storelens::{Cli, Commands, commands};
use storelens_core::analysis::categories::CategoryCatalog;
use storelens_core::config::ConfigLoader;
use storelens_core::stopwords::StopwordSet;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = if config.disable_input_limit {
        None
    } else {
        config
            .max_input_bytes
            .or(Some(storelens_core::DEFAULT_MAX_INPUT_BYTES))
    };

    // Compose the per-invocation stopword set: defaults plus config extras.
    let mut stopwords = StopwordSet::new();
    if let Some(ref extras) = config.stopwords {
        for word in extras {
            stopwords.add(word);
        }
    }

    // Resolve the category catalog: a configured path (relative to the
    // config file that names it) or the built-in tables.
    let catalog = match config.catalog {
        Some(ref path) => {
            let resolved = if path.is_relative() {
                config_sources
                    .primary_file()
                    .and_then(camino::Utf8Path::parent)
                    .map_or_else(|| path.clone(), |dir| dir.join(path))
            } else {
                path.clone()
            };
            CategoryCatalog::from_file(&resolved)
                .with_context(|| format!("failed to load category catalog {resolved}"))?
        }
        None => CategoryCatalog::builtin(),
    };
    let strategy = config.match_strategy.unwrap_or_default();

    // Execute command
    let result = match command {
        Commands::Keywords(args) => {
            commands::keywords::cmd_keywords(args, cli.json, &stopwords, max_input)
        }
        Commands::Sentiment(args) => commands::sentiment::cmd_sentiment(args, cli.json, max_input),
        Commands::Categories(args) => {
            commands::categories::cmd_categories(args, cli.json, &catalog, strategy, max_input)
        }
        Commands::Options(args) => commands::options::cmd_options(args, cli.json, max_input),
        Commands::Sales(args) => commands::sales::cmd_sales(args, cli.json, max_input),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
