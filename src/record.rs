//! Flat post records for the search index.

use std::path::Path;

use serde_json::Value;

use crate::frontmatter::Metadata;

/// One serializable record per post: metadata fields plus `body` and `url`.
pub type Record = Metadata;

/// Reserved field collapsed to a space-joined string for the search index.
const TAGS_FIELD: &str = "tags";

/// Build the flat record for one post.
///
/// Every metadata field is carried over verbatim, except a list-valued
/// `tags` which is collapsed to a single space-joined string (the search
/// index treats it as one text field). Other list-valued fields pass
/// through untouched. `body` and `url` are always present and win over
/// metadata fields of the same name.
pub fn build(path: &Path, mut meta: Metadata, body: String, route_prefix: &str) -> Record {
    let collapsed = match meta.get(TAGS_FIELD) {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    };
    if let Some(joined) = collapsed {
        meta.insert(TAGS_FIELD.to_string(), Value::String(joined));
    }

    meta.insert("body".to_string(), Value::String(body));
    meta.insert("url".to_string(), Value::String(url_for(path, route_prefix)));
    meta
}

/// Derive the post url from the file's base name.
///
/// Strips one trailing `.md` and prepends the route prefix:
/// `2025-10-19-first-post.md` -> `/posts/2025-10-19-first-post`.
pub fn url_for(path: &Path, route_prefix: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let slug = name.strip_suffix(".md").unwrap_or(&name);
    format!("{route_prefix}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn meta_from(pairs: &[(&str, Value)]) -> Metadata {
        let mut meta = Metadata::new();
        for (key, value) in pairs {
            meta.insert((*key).to_string(), value.clone());
        }
        meta
    }

    #[test]
    fn test_url_from_file_name() {
        let path = PathBuf::from("/site/content/posts/2025-10-19-first-post.md");
        assert_eq!(url_for(&path, "/posts/"), "/posts/2025-10-19-first-post");
    }

    #[test]
    fn test_url_strips_suffix_once() {
        let path = PathBuf::from("notes.md.md");
        assert_eq!(url_for(&path, "/posts/"), "/posts/notes.md");
    }

    #[test]
    fn test_url_uses_route_prefix() {
        let path = PathBuf::from("hello.md");
        assert_eq!(url_for(&path, "/blog/"), "/blog/hello");
    }

    #[test]
    fn test_tags_list_collapsed_to_string() {
        let meta = meta_from(&[("tags", json!(["rust", "web", "blog"]))]);
        let record = build(Path::new("a.md"), meta, String::new(), "/posts/");
        assert_eq!(record.get("tags"), Some(&json!("rust web blog")));
    }

    #[test]
    fn test_scalar_tags_left_untouched() {
        let meta = meta_from(&[("tags", json!("rust"))]);
        let record = build(Path::new("a.md"), meta, String::new(), "/posts/");
        assert_eq!(record.get("tags"), Some(&json!("rust")));
    }

    #[test]
    fn test_non_tags_list_passes_through() {
        let meta = meta_from(&[("aliases", json!(["old", "new"]))]);
        let record = build(Path::new("a.md"), meta, String::new(), "/posts/");
        assert_eq!(record.get("aliases"), Some(&json!(["old", "new"])));
    }

    #[test]
    fn test_body_and_url_always_present() {
        let record = build(Path::new("a.md"), Metadata::new(), "text".to_string(), "/posts/");
        assert_eq!(record.get("body"), Some(&json!("text")));
        assert_eq!(record.get("url"), Some(&json!("/posts/a")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_derived_fields_win_over_metadata() {
        let meta = meta_from(&[("body", json!("from metadata")), ("url", json!("/elsewhere"))]);
        let record = build(Path::new("a.md"), meta, "real body".to_string(), "/posts/");
        assert_eq!(record.get("body"), Some(&json!("real body")));
        assert_eq!(record.get("url"), Some(&json!("/posts/a")));
    }
}
