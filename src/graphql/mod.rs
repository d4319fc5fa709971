//! GraphQL schema, resolvers and HTTP server for the blog dataset.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://127.0.0.1:5000/graphql)
//! blogql serve
//!
//! # Execute a query from CLI
//! blogql query '{ post(id: 1) { title comments { name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `post`, `posts`, `comment`, `comments`, `user`, `users`
//! - **Types**: `Post`, `PostComment`, `User`
//!
//! There are no mutations or subscriptions; the dataset is read-only.

mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::{Post, PostComment, User};
