use crate::model::CollectionKind;
use crate::storage::DataFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogql")]
#[command(
    author,
    version,
    about = "A GraphQL API over an in-memory blog of posts, comments and users"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .blogql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to data directory (overrides config)
    #[arg(long, global = true, env = "BLOGQL_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a .blogql.toml and write the bundled dataset to a data directory
    Init {
        /// Data directory to create, relative to the current directory
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Format of the written data files
        #[arg(long, value_enum, default_value = "json")]
        format: DataFormatArg,

        /// Overwrite an existing config and data files
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind to (default: from config, else 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: from config, else 5000)
        #[arg(short, long, env = "BLOGQL_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL IDE
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// The GraphQL query document
        query: String,

        /// Query variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// List the records of a collection
    #[command(visible_alias = "ls")]
    List {
        /// Collection to list (posts, comments, users)
        collection: CollectionKind,

        /// Only comments on this post
        #[arg(long, conflicts_with = "user")]
        post: Option<String>,

        /// Only posts written by this user
        #[arg(long)]
        user: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single record by id
    Show {
        /// Collection to look in (post, comment, user)
        collection: CollectionKind,

        /// Record id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataFormatArg {
    Json,
    Yaml,
}

impl From<DataFormatArg> for DataFormat {
    fn from(arg: DataFormatArg) -> Self {
        match arg {
            DataFormatArg::Json => DataFormat::Json,
            DataFormatArg::Yaml => DataFormat::Yaml,
        }
    }
}
