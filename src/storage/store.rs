use super::collection::Collection;
use super::loader::{find_data_file, load_records};
use super::seed;
use crate::{
    config::BlogConfig,
    error::Result,
    model::{CollectionKind, Comment, Post, User},
};
use std::path::Path;

/// A foreign key that points at no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub collection: &'static str,
    pub id: i64,
    pub field: &'static str,
    pub target: i64,
}

/// The read-only record store.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct EntityStore {
    posts: Collection<Post>,
    comments: Collection<Comment>,
    users: Collection<User>,
}

impl EntityStore {
    pub fn new(posts: Vec<Post>, comments: Vec<Comment>, users: Vec<User>) -> Result<Self> {
        let store = Self {
            posts: Collection::from_records(posts)?,
            comments: Collection::from_records(comments)?,
            users: Collection::from_records(users)?,
        };

        for dangling in store.dangling_references() {
            tracing::warn!(
                collection = dangling.collection,
                id = dangling.id,
                field = dangling.field,
                target = dangling.target,
                "Foreign key points at a missing record"
            );
        }

        tracing::debug!(
            posts = store.posts.len(),
            comments = store.comments.len(),
            users = store.users.len(),
            "Loaded entity store"
        );
        Ok(store)
    }

    /// The bundled dataset.
    pub fn seed() -> Result<Self> {
        Self::new(seed::posts()?, seed::comments()?, seed::users()?)
    }

    /// Loads `posts`, `comments` and `users` data files from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        tracing::debug!(path = %data_dir.display(), "Loading data directory");
        let posts = load_records(&find_data_file(data_dir, CollectionKind::Posts)?)?;
        let comments = load_records(&find_data_file(data_dir, CollectionKind::Comments)?)?;
        let users = load_records(&find_data_file(data_dir, CollectionKind::Users)?)?;
        Self::new(posts, comments, users)
    }

    /// Opens the store described by `config`: its data directory when one is
    /// configured, otherwise the bundled dataset.
    pub fn open(config: &BlogConfig, project_root: &Path) -> Result<Self> {
        match config.data_path(project_root) {
            Some(dir) => Self::load(&dir),
            None => Self::seed(),
        }
    }

    pub fn posts(&self) -> &Collection<Post> {
        &self.posts
    }

    pub fn comments(&self) -> &Collection<Comment> {
        &self.comments
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    /// Every foreign key in the store that has no matching target record.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let comment_refs = self
            .comments
            .list_all()
            .iter()
            .filter(|c| !self.posts.contains(c.post_id))
            .map(|c| DanglingReference {
                collection: "comments",
                id: c.id,
                field: "postId",
                target: c.post_id,
            });

        let post_refs = self
            .posts
            .list_all()
            .iter()
            .filter(|p| !self.users.contains(p.user_id))
            .map(|p| DanglingReference {
                collection: "posts",
                id: p.id,
                field: "userId",
                target: p.user_id,
            });

        comment_refs.chain(post_refs).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use crate::storage::loader::{DataFormat, save_records};
    use tempfile::TempDir;

    #[test]
    fn test_seed_loads_and_is_consistent() {
        let store = EntityStore::seed().unwrap();
        assert!(!store.posts().is_empty());
        assert!(!store.comments().is_empty());
        assert!(!store.users().is_empty());
        assert!(store.dangling_references().is_empty());
    }

    #[test]
    fn test_dangling_references_are_tolerated_and_reported() {
        let store = EntityStore::new(
            vec![Post::new(1, 1, "A")],
            vec![Comment::new(10, 1), Comment::new(11, 7)],
            vec![],
        )
        .unwrap();

        let dangling = store.dangling_references();
        assert_eq!(
            dangling,
            vec![
                DanglingReference {
                    collection: "comments",
                    id: 11,
                    field: "postId",
                    target: 7,
                },
                DanglingReference {
                    collection: "posts",
                    id: 1,
                    field: "userId",
                    target: 1,
                },
            ]
        );
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = EntityStore::new(
            vec![Post::new(1, 1, "A"), Post::new(1, 1, "B")],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(BlogError::DuplicateId { collection: "posts", id: 1 })));
    }

    #[test]
    fn test_load_from_data_dir_mixed_formats() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        save_records(dir, CollectionKind::Posts, &[Post::new(1, 1, "A")], DataFormat::Json).unwrap();
        save_records(dir, CollectionKind::Comments, &[Comment::new(5, 1)], DataFormat::Yaml).unwrap();
        save_records(dir, CollectionKind::Users, &[User::new(1, "Ann")], DataFormat::Json).unwrap();

        let store = EntityStore::load(dir).unwrap();
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.comments().get_by_id(5).unwrap().post_id, 1);
        assert_eq!(store.users().get_by_id(1).unwrap().name, "Ann");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        save_records(temp_dir.path(), CollectionKind::Posts, &[Post::new(1, 1, "A")], DataFormat::Json)
            .unwrap();
        assert!(matches!(
            EntityStore::load(temp_dir.path()),
            Err(BlogError::Config(_))
        ));
    }
}
