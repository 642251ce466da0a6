use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_vec, deserialize_text};

/// A single content item as delivered by the posts endpoint.
///
/// Posts are never mutated after decoding. Every field decodes leniently
/// (see `deserialize_text`), so a partially filled or oddly typed record
/// still lands in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Post {
    /// Identity of the post (the backend may send a string or an integer)
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub content: String,
    /// Grouping label; compared by exact value
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

/// Body of `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PostsResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialize_integer_id() {
        let post: Post = serde_json::from_str(
            r#"{"id": 42, "title": "Hello", "content": "Body", "category": "tech"}"#,
        )
        .unwrap();
        assert_eq!(post.id, "42");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "Body");
        assert_eq!(post.category, "tech");
    }

    #[test]
    fn test_post_deserialize_string_id() {
        let post: Post =
            serde_json::from_str(r#"{"id": "p-1", "title": "t", "content": "c", "category": "x"}"#)
                .unwrap();
        assert_eq!(post.id, "p-1");
    }

    #[test]
    fn test_post_deserialize_missing_fields() {
        // Malformed entries pass through instead of failing the whole body
        let post: Post = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(post.id, "");
        assert_eq!(post.title, "Only a title");
        assert_eq!(post.content, "");
        assert_eq!(post.category, "");
    }

    #[test]
    fn test_post_deserialize_null_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id": null, "title": null, "content": null, "category": null}"#,
        )
        .unwrap();
        assert_eq!(post, Post::default());
    }

    #[test]
    fn test_post_deserialize_non_string_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id": 2, "title": 7, "content": true, "category": 5}"#,
        )
        .unwrap();
        assert_eq!(post.id, "2");
        assert_eq!(post.title, "7");
        assert_eq!(post.content, "true");
        assert_eq!(post.category, "5");
    }

    #[test]
    fn test_post_deserialize_structured_field_keeps_json_text() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1.5, "title": ["a", 1], "content": {"k": null}, "category": "x"}"#,
        )
        .unwrap();
        assert_eq!(post.id, "1.5");
        assert_eq!(post.title, r#"["a",1]"#);
        assert_eq!(post.content, r#"{"k":null}"#);
    }

    #[test]
    fn test_odd_post_does_not_fail_the_list() {
        let body = r#"{"posts": [
            {"id": 1, "title": "First", "content": "Hello", "category": "tech"},
            {"id": 2, "title": 7, "category": 5}
        ]}"#;
        let response: PostsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.posts.len(), 2);
        assert_eq!(response.posts[0].category, "tech");
        assert_eq!(response.posts[1].title, "7");
        assert_eq!(response.posts[1].content, "");
        assert_eq!(response.posts[1].category, "5");
    }

    #[test]
    fn test_post_ignores_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "category": "x", "author": "someone"}"#,
        )
        .unwrap();
        assert_eq!(post.id, "1");
    }

    #[test]
    fn test_posts_response_preserves_order() {
        let body = r#"{"posts": [
            {"id": 3, "title": "c", "content": "", "category": "a"},
            {"id": 1, "title": "a", "content": "", "category": "b"},
            {"id": 2, "title": "b", "content": "", "category": "a"}
        ]}"#;
        let response: PostsResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = response.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_posts_response_missing_posts_field() {
        let response: PostsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.posts.is_empty());

        let response: PostsResponse = serde_json::from_str(r#"{"posts": null}"#).unwrap();
        assert!(response.posts.is_empty());
    }

    #[test]
    fn test_posts_response_rejects_non_list() {
        let result: Result<PostsResponse, _> = serde_json::from_str(r#"{"posts": "nope"}"#);
        assert!(result.is_err());
    }
}
