use crate::model::{CollectionKind, Comment, Post};
use crate::validation::parse_id;
use anyhow::{Result, bail};

use super::CommandContext;
use super::utils::{print_comment_list, print_post_list, print_user_list};

/// Parameters for list operation
pub struct ListParams {
    pub collection: CollectionKind,
    pub post: Option<String>,
    pub user: Option<String>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let store = &ctx.store;

    match params.collection {
        CollectionKind::Posts => {
            if params.post.is_some() {
                bail!("--post only applies to comments");
            }
            let posts: Vec<&Post> = match params.user {
                Some(raw) => store.posts().list_related(Post::USER_ID, parse_id(&raw)?),
                None => store.posts().list_all().iter().collect(),
            };
            if params.json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_post_list(&posts);
            }
        }
        CollectionKind::Comments => {
            if params.user.is_some() {
                bail!("--user only applies to posts");
            }
            let comments: Vec<&Comment> = match params.post {
                Some(raw) => store
                    .comments()
                    .list_related(Comment::POST_ID, parse_id(&raw)?),
                None => store.comments().list_all().iter().collect(),
            };
            if params.json {
                println!("{}", serde_json::to_string_pretty(&comments)?);
            } else {
                print_comment_list(&comments);
            }
        }
        CollectionKind::Users => {
            if params.post.is_some() || params.user.is_some() {
                bail!("users cannot be filtered by --post or --user");
            }
            let users: Vec<_> = store.users().list_all().iter().collect();
            if params.json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_user_list(&users);
            }
        }
    }
    Ok(())
}
