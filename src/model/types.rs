use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The three collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Posts,
    Comments,
    Users,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Posts,
        CollectionKind::Comments,
        CollectionKind::Users,
    ];

    /// Base file name (without extension) of this collection's data file.
    pub fn file_stem(&self) -> &'static str {
        match self {
            CollectionKind::Posts => "posts",
            CollectionKind::Comments => "comments",
            CollectionKind::Users => "users",
        }
    }
}

impl CollectionKind {
    /// Name of a single record in this collection ("post", "comment", "user").
    pub fn record_name(&self) -> &'static str {
        match self {
            CollectionKind::Posts => "post",
            CollectionKind::Comments => "comment",
            CollectionKind::Users => "user",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

impl FromStr for CollectionKind {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "posts" | "post" => Ok(CollectionKind::Posts),
            "comments" | "comment" => Ok(CollectionKind::Comments),
            "users" | "user" => Ok(CollectionKind::Users),
            _ => Err(BlogError::Parse(format!("Invalid collection: {}", s))),
        }
    }
}
