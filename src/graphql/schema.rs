use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::storage::EntityStore;

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(store: Arc<EntityStore>) -> BlogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

/// Root Query - top level query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single blog post
    async fn post(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Option<Post>> {
        Ok(store(ctx)?.posts().get_by_id(id).map(Post::from))
    }

    /// List of blog posts
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        Ok(store(ctx)?.posts().list_all().iter().map(Post::from).collect())
    }

    /// A single blog post comment
    async fn comment(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<PostComment>> {
        Ok(store(ctx)?.comments().get_by_id(id).map(PostComment::from))
    }

    /// List of blog post comments
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PostComment>> {
        Ok(store(ctx)?
            .comments()
            .list_all()
            .iter()
            .map(PostComment::from)
            .collect())
    }

    /// A single user
    async fn user(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Option<User>> {
        Ok(store(ctx)?.users().get_by_id(id).map(User::from))
    }

    /// List of users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        Ok(store(ctx)?.users().list_all().iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Post as ModelPost, User as ModelUser};
    use serde_json::{Value, json};

    fn schema() -> BlogSchema {
        let store = EntityStore::new(
            vec![
                ModelPost::new(1, 1, "A").with_body("..."),
                ModelPost::new(2, 1, "B").with_body("..."),
            ],
            vec![
                Comment::new(10, 1).with_name("first"),
                Comment::new(11, 2).with_name("second"),
                Comment::new(12, 1).with_name("third"),
                Comment::new(13, 77).with_name("orphan"),
            ],
            vec![ModelUser::new(1, "Ann").with_username("ann")],
        )
        .unwrap();
        build_schema(Arc::new(store))
    }

    async fn run(query: &str) -> Value {
        let response = schema().execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_post_by_id() {
        let data = run("{ post(id: 2) { id userId title body } }").await;
        assert_eq!(
            data,
            json!({ "post": { "id": 2, "userId": 1, "title": "B", "body": "..." } })
        );
    }

    #[tokio::test]
    async fn test_missing_post_is_null() {
        let data = run("{ post(id: 99) { id } }").await;
        assert_eq!(data, json!({ "post": null }));
    }

    #[tokio::test]
    async fn test_non_integer_id_is_rejected() {
        let response = schema().execute(r#"{ post(id: "abc") { id } }"#).await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_posts_with_comments_in_load_order() {
        let data = run("{ posts { id comments { id } } }").await;
        assert_eq!(
            data,
            json!({ "posts": [
                { "id": 1, "comments": [{ "id": 10 }, { "id": 12 }] },
                { "id": 2, "comments": [{ "id": 11 }] },
            ]})
        );
    }

    #[tokio::test]
    async fn test_comment_resolves_parent_post() {
        let data = run("{ comments { id post { title } } }").await;
        assert_eq!(
            data,
            json!({ "comments": [
                { "id": 10, "post": { "title": "A" } },
                { "id": 11, "post": { "title": "B" } },
                { "id": 12, "post": { "title": "A" } },
                { "id": 13, "post": null },
            ]})
        );
    }

    #[tokio::test]
    async fn test_user_and_author_relations() {
        let data = run("{ user(id: 1) { username posts { id author { name } } } }").await;
        assert_eq!(
            data,
            json!({ "user": { "username": "ann", "posts": [
                { "id": 1, "author": { "name": "Ann" } },
                { "id": 2, "author": { "name": "Ann" } },
            ]}})
        );
    }

    #[tokio::test]
    async fn test_comment_by_id() {
        let data = run("{ comment(id: 12) { name postId } missing: comment(id: 1) { id } }").await;
        assert_eq!(
            data,
            json!({ "comment": { "name": "third", "postId": 1 }, "missing": null })
        );
    }

    #[test]
    fn test_sdl_uses_original_type_names() {
        let sdl = schema().sdl();
        assert!(sdl.contains("type Query"));
        assert!(sdl.contains("type PostComment"));
        assert!(sdl.contains("Root Query - top level query"));
        assert!(!sdl.contains("type Mutation"));
    }
}
