use crate::model::{Comment, Post, User};
use colored::Colorize;

pub fn print_post_list(posts: &[&Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }
    for post in posts {
        println!(
            "{} {} {}",
            post.id.to_string().cyan(),
            post.title,
            format!("[user {}]", post.user_id).dimmed()
        );
    }
}

pub fn print_comment_list(comments: &[&Comment]) {
    if comments.is_empty() {
        println!("No comments found.");
        return;
    }
    for comment in comments {
        println!(
            "{} {} {} {}",
            comment.id.to_string().cyan(),
            format!("[post {}]", comment.post_id).dimmed(),
            comment.name,
            format!("<{}>", comment.email).magenta()
        );
    }
}

pub fn print_user_list(users: &[&User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }
    for user in users {
        println!(
            "{} {} {} {}",
            user.id.to_string().cyan(),
            user.name,
            format!("@{}", user.username).blue(),
            format!("<{}>", user.email).magenta()
        );
    }
}
