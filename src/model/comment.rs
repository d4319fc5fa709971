use super::key::{Key, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub body: String,
}

impl Comment {
    pub const ID: Key<Comment> = Key::new("id", |c| c.id);
    pub const POST_ID: Key<Comment> = Key::new("postId", |c| c.post_id);

    pub fn new(id: i64, post_id: i64) -> Self {
        Self {
            id,
            post_id,
            name: String::new(),
            email: String::new(),
            body: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";

    fn id(&self) -> i64 {
        self.id
    }
}
