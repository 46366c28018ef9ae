use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Post {
  pub(crate) author_name: Option<String>,
  #[serde(default)]
  pub(crate) comment_count: u64,
  pub(crate) created: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Post {
  pub(crate) fn detail(&self) -> String {
    let comments = format_comments(self.comment_count);

    match (self.author_name.as_deref(), self.created.as_deref()) {
      (Some(author), Some(created)) => {
        format!("by {author} · {created} · {comments}")
      }
      (Some(author), None) => format!("by {author} · {comments}"),
      (None, Some(created)) => format!("{created} · {comments}"),
      (None, None) => comments,
    }
  }

  pub(crate) fn resolved_url(&self, base_url: &str) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| format!("{base_url}/posts/{}", self.id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_post() -> Post {
    Post {
      author_name: Some("Ana".to_string()),
      comment_count: 2,
      created: None,
      id: "9".to_string(),
      title: "Weekly notices".to_string(),
      url: None,
    }
  }

  #[test]
  fn detail_includes_author_and_comment_count() {
    assert_eq!(sample_post().detail(), "by Ana · 2 comments");
  }

  #[test]
  fn resolved_url_falls_back_to_post_page() {
    let mut post = sample_post();
    assert_eq!(
      post.resolved_url("http://localhost:8000"),
      "http://localhost:8000/posts/9"
    );

    post.url = Some("https://example.com/notices".to_string());
    assert_eq!(
      post.resolved_url("http://localhost:8000"),
      "https://example.com/notices"
    );
  }
}
