use crate::graphql::build_schema;
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.store);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    tracing::debug!(query = %query, "Executing query");
    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    if response.is_err() {
        tracing::warn!(errors = response.errors.len(), "Query finished with errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
