//! The dataset bundled into the binary, served when no data directory is
//! configured.

use super::loader::{DataFormat, parse_records};
use crate::error::Result;
use crate::model::{Comment, Post, User};

const POSTS: &str = include_str!("../../data/posts.json");
const COMMENTS: &str = include_str!("../../data/comments.json");
const USERS: &str = include_str!("../../data/users.json");

pub fn posts() -> Result<Vec<Post>> {
    parse_records(POSTS, DataFormat::Json)
}

pub fn comments() -> Result<Vec<Comment>> {
    parse_records(COMMENTS, DataFormat::Json)
}

pub fn users() -> Result<Vec<User>> {
    parse_records(USERS, DataFormat::Json)
}
