use std::sync::Arc;

use async_graphql::{Context, Object};

use crate::model::{Comment as ModelComment, Post as ModelPost, User as ModelUser};
use crate::storage::{EntityStore, relations};

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a EntityStore> {
    Ok(ctx.data::<Arc<EntityStore>>()?.as_ref())
}

pub struct Post(pub ModelPost);

/// This represents a blog post
#[Object]
impl Post {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn user_id(&self) -> i64 {
        self.0.user_id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn body(&self) -> &str {
        &self.0.body
    }

    /// Comments left on this post, oldest first
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PostComment>> {
        let store = store(ctx)?;
        Ok(relations::comments_of_post(store, &self.0)
            .into_iter()
            .map(PostComment::from)
            .collect())
    }

    /// The user who wrote this post
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let store = store(ctx)?;
        Ok(relations::author_of_post(store, &self.0).map(User::from))
    }
}

impl From<&ModelPost> for Post {
    fn from(p: &ModelPost) -> Self {
        Post(p.clone())
    }
}

pub struct PostComment(pub ModelComment);

/// This represents a blog post comment
#[Object]
impl PostComment {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn post_id(&self) -> i64 {
        self.0.post_id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn body(&self) -> &str {
        &self.0.body
    }

    /// The post this comment was left on
    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Post>> {
        let store = store(ctx)?;
        Ok(relations::post_of_comment(store, &self.0).map(Post::from))
    }
}

impl From<&ModelComment> for PostComment {
    fn from(c: &ModelComment) -> Self {
        PostComment(c.clone())
    }
}

pub struct User(pub ModelUser);

/// This represents a blog author
#[Object]
impl User {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn phone(&self) -> &str {
        &self.0.phone
    }

    async fn website(&self) -> &str {
        &self.0.website
    }

    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = store(ctx)?;
        Ok(relations::posts_of_user(store, &self.0)
            .into_iter()
            .map(Post::from)
            .collect())
    }
}

impl From<&ModelUser> for User {
    fn from(u: &ModelUser) -> Self {
        User(u.clone())
    }
}
