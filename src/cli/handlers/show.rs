use crate::model::{CollectionKind, Comment, Post, User};
use crate::storage::relations;
use crate::validation::parse_id;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_comment_list, print_post_list};

pub fn handle_show(
    ctx: &CommandContext,
    collection: CollectionKind,
    raw_id: String,
    json: bool,
) -> Result<()> {
    // Reject malformed ids before touching the store
    let id = parse_id(&raw_id)?;
    let store = &ctx.store;

    let found = match collection {
        CollectionKind::Posts => store.posts().get_by_id(id).map(|post| {
            if json {
                print_json(post)
            } else {
                print_post(ctx, post);
                Ok(())
            }
        }),
        CollectionKind::Comments => store.comments().get_by_id(id).map(|comment| {
            if json {
                print_json(comment)
            } else {
                print_comment(ctx, comment);
                Ok(())
            }
        }),
        CollectionKind::Users => store.users().get_by_id(id).map(|user| {
            if json {
                print_json(user)
            } else {
                print_user(ctx, user);
                Ok(())
            }
        }),
    };

    match found {
        Some(result) => result,
        None => {
            if json {
                println!("null");
            } else {
                println!("No {} with id {} found.", collection.record_name(), id);
            }
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(record: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn print_post(ctx: &CommandContext, post: &Post) {
    println!("{} {}", post.id.to_string().cyan().bold(), post.title.bold());

    let author = match relations::author_of_post(&ctx.store, post) {
        Some(user) => format!("{} ({})", user.name, post.user_id.to_string().cyan()),
        None => format!("{} {}", post.user_id.to_string().cyan(), "(unknown)".dimmed()),
    };
    println!("Author:   {}", author);

    if !post.body.is_empty() {
        println!("\n{}", post.body);
    }

    let comments = relations::comments_of_post(&ctx.store, post);
    println!("\n{}", format!("Comments ({})", comments.len()).bold());
    print_comment_list(&comments);
}

fn print_comment(ctx: &CommandContext, comment: &Comment) {
    println!("{} {}", comment.id.to_string().cyan().bold(), comment.name.bold());
    println!("Email:    {}", comment.email.magenta());

    let post = match relations::post_of_comment(&ctx.store, comment) {
        Some(post) => format!("{} ({})", comment.post_id.to_string().cyan(), post.title.dimmed()),
        None => format!("{} {}", comment.post_id.to_string().cyan(), "(missing)".dimmed()),
    };
    println!("Post:     {}", post);

    if !comment.body.is_empty() {
        println!("\n{}", comment.body);
    }
}

fn print_user(ctx: &CommandContext, user: &User) {
    println!("{} {}", user.id.to_string().cyan().bold(), user.name.bold());
    println!("Username: {}", user.username.blue());
    println!("Email:    {}", user.email.magenta());
    if !user.phone.is_empty() {
        println!("Phone:    {}", user.phone);
    }
    if !user.website.is_empty() {
        println!("Website:  {}", user.website);
    }

    let posts = relations::posts_of_user(&ctx.store, user);
    println!("\n{}", format!("Posts ({})", posts.len()).bold());
    print_post_list(&posts);
}
