//! Relation resolvers between record types.
//!
//! Each function covers one (source, target) pair. Relations are derived on
//! every call by scanning the target collection; nothing is indexed.

use super::store::EntityStore;
use crate::model::{Comment, Post, User};

/// Post → Comments (one-to-many).
pub fn comments_of_post<'a>(store: &'a EntityStore, post: &Post) -> Vec<&'a Comment> {
    store.comments().list_related(Comment::POST_ID, post.id)
}

/// Comment → Post (many-to-one).
pub fn post_of_comment<'a>(store: &'a EntityStore, comment: &Comment) -> Option<&'a Post> {
    store.posts().get_related_single(Post::ID, comment.post_id)
}

/// User → Posts (one-to-many).
pub fn posts_of_user<'a>(store: &'a EntityStore, user: &User) -> Vec<&'a Post> {
    store.posts().list_related(Post::USER_ID, user.id)
}

/// Post → User (many-to-one).
pub fn author_of_post<'a>(store: &'a EntityStore, post: &Post) -> Option<&'a User> {
    store.users().get_related_single(User::ID, post.user_id)
}
