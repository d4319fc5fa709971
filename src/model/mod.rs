//! Data models for the blog dataset.
//!
//! This module defines the record types held by the store:
//!
//! - [`Post`]: A blog post written by a user
//! - [`Comment`]: A comment left on a post
//! - [`User`]: The author profile behind posts
//! - [`Key`]: A typed accessor for an integer field, used by relation lookups
//! - [`CollectionKind`]: Names the three collections (posts, comments, users)

mod comment;
mod key;
mod post;
mod types;
mod user;

pub use comment::Comment;
pub use key::{Key, Record};
pub use post::Post;
pub use types::CollectionKind;
pub use user::User;
