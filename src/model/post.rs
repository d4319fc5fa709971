use super::key::{Key, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,

    #[serde(default)]
    pub body: String,
}

impl Post {
    pub const ID: Key<Post> = Key::new("id", |p| p.id);
    pub const USER_ID: Key<Post> = Key::new("userId", |p| p.user_id);

    pub fn new(id: i64, user_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl Record for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> i64 {
        self.id
    }
}
