//! anchorpath: conversion path queries against a converter registry snapshot.

mod config;
mod render;

use std::path::PathBuf;

use anchorpath_finder::PathFinder;
use anchorpath_registry::{ConverterRegistry, RegistrySnapshot};
use anchorpath_types::Token;
use anchorpath_utils::LogFormat;
use anyhow::{bail, Context};
use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "anchorpath", about = "Find conversion paths through an anchor token")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "ANCHORPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Registry snapshot (TOML) to answer queries from.
    #[arg(long, env = "ANCHORPATH_REGISTRY")]
    registry: Option<PathBuf>,

    /// Anchor token, as a symbol or address. Defaults to the snapshot's.
    #[arg(long, env = "ANCHORPATH_ANCHOR")]
    anchor: Option<String>,

    /// Maximum conversions on a token→anchor route.
    #[arg(long, env = "ANCHORPATH_MAX_DEPTH")]
    max_depth: Option<usize>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ANCHORPATH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ANCHORPATH_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Find the conversion path from SOURCE to TARGET.
    Find {
        source: String,
        target: String,
        /// Print the path as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the anchors a token can be converted through.
    Anchors { token: String },
}

fn resolve_query_token(snapshot: &RegistrySnapshot, name: &str) -> anyhow::Result<Token> {
    let token = snapshot
        .resolve(name)
        .with_context(|| format!("cannot resolve token {name:?}"))?;
    if token.is_zero() {
        bail!("the zero address is not a valid token");
    }
    Ok(token)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(registry) = cli.registry {
        config.registry = Some(registry);
    }
    if let Some(anchor) = cli.anchor {
        config.anchor_token = Some(anchor);
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    anchorpath_utils::init_logging(config.log_format, &config.log_level);

    let Some(registry_path) = config.registry.as_ref() else {
        bail!("no registry snapshot given (use --registry or set `registry` in the config file)");
    };
    let snapshot = RegistrySnapshot::from_toml_file(registry_path)?;
    let registry = snapshot.into_registry()?;
    tracing::info!(
        "Loaded {} converters from {}",
        registry.converter_count(),
        registry_path.display()
    );

    match cli.command {
        Command::Find {
            source,
            target,
            json,
        } => {
            let anchor = match config.anchor_token.as_deref() {
                Some(name) => resolve_query_token(&snapshot, name)?,
                None => snapshot
                    .anchor()?
                    .context("no anchor token configured and none in the snapshot")?,
            };
            let source = resolve_query_token(&snapshot, &source)?;
            let target = resolve_query_token(&snapshot, &target)?;

            let finder = PathFinder::new(&registry, anchor, config.finder_config())?;
            let path = finder.find_path(source, target)?;
            if json {
                println!("{}", render::render_json(&snapshot, &path)?);
            } else {
                println!("{}", render::render_text(&snapshot, &path));
            }
        }
        Command::Anchors { token } => {
            let token = resolve_query_token(&snapshot, &token)?;
            for anchor in registry.convertible_token_anchors(&token)? {
                println!("{}", render::label(&snapshot, &anchor));
            }
        }
    }

    Ok(())
}
