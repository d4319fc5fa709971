use crate::error::{BlogError, Result};
use crate::model::CollectionKind;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};

/// Serialization format of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Json,
    Yaml,
}

impl DataFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Yaml => "yml",
        }
    }
}

/// Detect the format of a data file from its extension.
pub fn detect_format(path: &Path) -> Option<DataFormat> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "json" => Some(DataFormat::Json),
        "yml" | "yaml" => Some(DataFormat::Yaml),
        _ => None,
    }
}

/// Finds the data file for `kind` in `data_dir`.
///
/// `<name>.json` wins over `<name>.yml`, which wins over `<name>.yaml`.
pub fn find_data_file(data_dir: &Path, kind: CollectionKind) -> Result<PathBuf> {
    for ext in ["json", "yml", "yaml"] {
        let candidate = data_dir.join(format!("{}.{}", kind.file_stem(), ext));
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(BlogError::Config(format!(
        "No data file for {} in {} (expected {}.json, {}.yml or {}.yaml)",
        kind,
        data_dir.display(),
        kind.file_stem(),
        kind.file_stem(),
        kind.file_stem()
    )))
}

pub fn parse_records<T: DeserializeOwned>(content: &str, format: DataFormat) -> Result<Vec<T>> {
    let records = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(records)
}

pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = detect_format(path).ok_or_else(|| {
        BlogError::Parse(format!("Unsupported data file format: {}", path.display()))
    })?;
    let content = std::fs::read_to_string(path)?;
    let records: Vec<T> = parse_records(&content, format)?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded data file");
    Ok(records)
}

/// Writes `records` as the data file for `kind`, returning its path.
pub fn save_records<T: Serialize>(
    data_dir: &Path,
    kind: CollectionKind,
    records: &[T],
    format: DataFormat,
) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(format!("{}.{}", kind.file_stem(), format.extension()));
    let content = match format {
        DataFormat::Json => serde_json::to_string_pretty(records)? + "\n",
        DataFormat::Yaml => serde_yaml::to_string(records)?,
    };
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Post, User};
    use tempfile::TempDir;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("posts.json")), Some(DataFormat::Json));
        assert_eq!(detect_format(Path::new("posts.YML")), Some(DataFormat::Yaml));
        assert_eq!(detect_format(Path::new("posts.yaml")), Some(DataFormat::Yaml));
        assert_eq!(detect_format(Path::new("posts.csv")), None);
        assert_eq!(detect_format(Path::new("posts")), None);
    }

    #[test]
    fn test_parse_json_camel_case_fields() {
        let content = r#"[{"postId": 1, "id": 3, "name": "n", "email": "e@x.io", "body": "b"}]"#;
        let comments: Vec<Comment> = parse_records(content, DataFormat::Json).unwrap();
        assert_eq!(comments[0].post_id, 1);
        assert_eq!(comments[0].email, "e@x.io");
    }

    #[test]
    fn test_parse_yaml_records() {
        let content = "- id: 1\n  userId: 4\n  title: Hello\n  body: World\n";
        let posts: Vec<Post> = parse_records(content, DataFormat::Yaml).unwrap();
        assert_eq!(posts, vec![Post::new(1, 4, "Hello").with_body("World")]);
    }

    #[test]
    fn test_parse_ignores_unmodelled_user_fields() {
        let content = r#"[{"id": 1, "name": "Leanne", "address": {"city": "Gwenborough"}, "company": {"name": "Romaguera"}}]"#;
        let users: Vec<User> = parse_records(content, DataFormat::Json).unwrap();
        assert_eq!(users[0].name, "Leanne");
        assert!(users[0].username.is_empty());
    }

    #[test]
    fn test_parse_rejects_string_id() {
        let content = r#"[{"id": "1", "userId": 1, "title": "t"}]"#;
        assert!(parse_records::<Post>(content, DataFormat::Json).is_err());
    }

    #[test]
    fn test_save_then_find_prefers_json() {
        let temp_dir = TempDir::new().unwrap();
        let posts = vec![Post::new(1, 1, "A")];
        save_records(temp_dir.path(), CollectionKind::Posts, &posts, DataFormat::Yaml).unwrap();
        save_records(temp_dir.path(), CollectionKind::Posts, &posts, DataFormat::Json).unwrap();

        let found = find_data_file(temp_dir.path(), CollectionKind::Posts).unwrap();
        assert_eq!(found.file_name().unwrap(), "posts.json");
        let loaded: Vec<Post> = load_records(&found).unwrap();
        assert_eq!(loaded, posts);
    }

    #[test]
    fn test_find_missing_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = find_data_file(temp_dir.path(), CollectionKind::Users).unwrap_err();
        assert!(matches!(err, BlogError::Config(_)));
    }
}
