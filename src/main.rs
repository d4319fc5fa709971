use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, ListParams, ServeParams, handle_init, handle_list, handle_query,
    handle_serve, handle_show,
};
use blogql::cli::{Cli, Commands};
use blogql::config::BlogConfig;
use blogql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config_path = cli.config.as_deref();
    let data_path = cli.data_path.as_deref();

    match cli.command {
        Commands::Init {
            data_dir,
            format,
            force,
        } => handle_init(data_dir, format.into(), force),
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => {
            let ctx = load_context(config_path, data_path)?;
            handle_serve(
                ctx,
                ServeParams {
                    host,
                    port,
                    no_graphiql,
                },
            )
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(config_path, data_path)?;
            handle_query(ctx, query, variables)
        }
        Commands::List {
            collection,
            post,
            user,
            json,
        } => {
            let ctx = load_context(config_path, data_path)?;
            handle_list(
                &ctx,
                ListParams {
                    collection,
                    post,
                    user,
                    json,
                },
            )
        }
        Commands::Show {
            collection,
            id,
            json,
        } => {
            let ctx = load_context(config_path, data_path)?;
            handle_show(&ctx, collection, id, json)
        }
    }
}

fn load_context(
    config_path: Option<&Path>,
    data_path: Option<&Path>,
) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (mut config, root) = match config_path {
        Some(path) => BlogConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BlogConfig::load_or_default(&cwd).context("Failed to load blogql configuration")?,
    };

    // A --data-path is relative to where the command runs, not to the config
    if let Some(dir) = data_path {
        let dir: PathBuf = cwd.join(dir);
        config.data.path = dir.to_string_lossy().into_owned();
    }

    CommandContext::new(config, &root).context("Failed to load blog data")
}
