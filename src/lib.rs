//! # blogql - A GraphQL API over an in-memory blog
//!
//! blogql serves three read-only collections (posts, comments and users)
//! through a GraphQL schema with relations between them: a post lists its
//! comments and author, a comment points back to its post.
//!
//! ## Features
//!
//! - **Entity store**: Typed collections loaded once from JSON/YAML files or
//!   the bundled dataset, then shared read-only
//! - **Relations**: Post → Comments, Comment → Post, User → Posts, Post → User
//! - **GraphQL API**: async-graphql schema served over HTTP with GraphiQL
//! - **CLI**: Query, list and inspect records without starting a server
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the bundled dataset on http://127.0.0.1:5000/graphql
//! blogql serve
//!
//! # Run a query in-process
//! blogql query '{ posts { title comments { email } } }'
//!
//! # Write the dataset to ./data and a .blogql.toml pointing at it
//! blogql init
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Record types (Post, Comment, User)
//! - [`storage`]: Entity store, lookups and relation resolvers
//! - [`validation`]: Lookup argument validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.blogql.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides an async-graphql schema over the entity store, plus an axum server.
pub mod graphql;

/// Record types for the blog dataset.
pub mod model;

/// In-memory entity store.
///
/// Loads collections once and answers id lookups, full listings and
/// relation scans.
pub mod storage;

/// Lookup argument validation.
pub mod validation;

pub mod logging;
