//! In-memory storage for the blog dataset.
//!
//! Records are read from JSON or YAML data files (or the bundled seed
//! data) once, then served read-only for the life of the process.
//!
//! ## Data Files
//!
//! A data directory holds one file per collection:
//!
//! ```text
//! data/
//!   posts.json      [{ "id": 1, "userId": 1, "title": "...", "body": "..." }]
//!   comments.json   [{ "id": 1, "postId": 1, "name": "...", "email": "...", "body": "..." }]
//!   users.yml       - { id: 1, name: ..., username: ..., email: ... }
//! ```
//!
//! ## Components
//!
//! - [`EntityStore`]: Owns the three collections
//! - [`Collection`]: Lookup by id, list all, and related-record scans
//! - [`relations`]: Post/Comment/User relation resolvers
//! - [`load_records`] / [`save_records`]: Data file IO

mod collection;
mod loader;
pub mod relations;
mod seed;
mod store;

pub use collection::Collection;
pub use loader::{
    DataFormat, detect_format, find_data_file, load_records, parse_records, save_records,
};
pub use store::{DanglingReference, EntityStore};
