use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) author_id: String,
  pub(crate) author_name: String,
  pub(crate) content: String,
  pub(crate) created: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) liked: bool,
  #[serde(default)]
  pub(crate) likes_count: u64,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub(crate) parent: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) post: String,
  pub(crate) user_photo: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_normalizes_numeric_ids() {
    let comment: Comment = serde_json::from_str(
      r#"{
        "id": 12,
        "post": 3,
        "parent": 7,
        "author_id": 42,
        "author_name": "Ana",
        "content": "hello",
        "created": "2026-08-01T10:00:00Z",
        "likes_count": 2,
        "liked": true,
        "user_photo": "/media/ana.png"
      }"#,
    )
    .unwrap();

    assert_eq!(comment.id, "12");
    assert_eq!(comment.post, "3");
    assert_eq!(comment.parent.as_deref(), Some("7"));
    assert_eq!(comment.author_id, "42");
    assert_eq!(comment.likes_count, 2);
    assert!(comment.liked);
  }

  #[test]
  fn deserialize_applies_defaults_for_missing_fields() {
    let comment: Comment = serde_json::from_str(
      r#"{
        "id": "1",
        "post": "3",
        "author_id": "42",
        "author_name": "Ana",
        "content": "hello",
        "created": null,
        "user_photo": null
      }"#,
    )
    .unwrap();

    assert_eq!(comment.parent, None);
    assert_eq!(comment.created, None);
    assert_eq!(comment.likes_count, 0);
    assert!(!comment.liked);
    assert_eq!(comment.user_photo, None);
  }
}
