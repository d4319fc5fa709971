use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

/// Command-line overrides for the server settings
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

pub fn handle_serve(ctx: CommandContext, params: ServeParams) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    if params.no_graphiql {
        settings.graphiql = false;
    }

    let schema = build_schema(ctx.store);

    println!(
        "Starting GraphQL server on http://{}{}",
        settings.bind_address(),
        GRAPHQL_PATH
    );
    if settings.graphiql {
        println!(
            "GraphiQL: http://{}{}",
            settings.bind_address(),
            GRAPHQL_PATH
        );
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
