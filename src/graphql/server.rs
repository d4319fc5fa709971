use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, get_service},
};

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::BlogSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Routes for the GraphQL endpoint.
///
/// `POST /graphql` executes queries. `GET /graphql` serves GraphiQL when
/// enabled, otherwise it accepts queries in the query string.
pub fn router(schema: BlogSchema, graphiql_enabled: bool) -> Router {
    let service = GraphQL::new(schema);
    let route = if graphiql_enabled {
        get(graphiql).post_service(service)
    } else {
        get_service(service.clone()).post_service(service)
    };
    Router::new().route(GRAPHQL_PATH, route)
}

pub async fn run_server(schema: BlogSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings.graphiql);
    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, graphiql = settings.graphiql, "Server running");
    axum::serve(listener, app).await?;
    Ok(())
}
