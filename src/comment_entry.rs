use super::*;

pub(crate) struct CommentEntry {
  pub(crate) author_name: String,
  pub(crate) children: Vec<usize>,
  pub(crate) content: String,
  pub(crate) created: Option<String>,
  pub(crate) depth: usize,
  pub(crate) editable: bool,
  pub(crate) expanded: bool,
  pub(crate) has_photo: bool,
  pub(crate) id: String,
  pub(crate) liked: bool,
  pub(crate) likes_count: u64,
  pub(crate) parent: Option<usize>,
}

impl CommentEntry {
  pub(crate) fn created_label(&self) -> &str {
    self.created.as_deref().unwrap_or("just now")
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn identity(&self) -> String {
    let glyph = if self.has_photo { "◉" } else { "○" };

    format!("{glyph} {}", self.author_name)
  }

  pub(crate) fn like_label(&self) -> String {
    let glyph = if self.liked { "♥" } else { "♡" };

    format!("{glyph} {}", self.likes_count)
  }

  pub(crate) fn new(
    comment: Comment,
    parent: Option<usize>,
    depth: usize,
    session: &Session,
  ) -> Self {
    let Comment {
      author_id,
      author_name,
      content,
      created,
      id,
      liked,
      likes_count,
      user_photo,
      ..
    } = comment;

    Self {
      author_name,
      children: Vec::new(),
      content: clean_content(&content),
      created,
      depth,
      editable: session.is_author(&author_id),
      expanded: true,
      has_photo: user_photo.is_some(),
      id,
      liked,
      likes_count,
      parent,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_comment(author_id: &str) -> Comment {
    Comment {
      author_id: author_id.to_string(),
      author_name: "Ana".to_string(),
      content: "<p>hello &amp; welcome</p>".to_string(),
      created: None,
      id: "1".to_string(),
      liked: true,
      likes_count: 5,
      parent: None,
      post: "3".to_string(),
      user_photo: None,
    }
  }

  #[test]
  fn new_cleans_content_and_gates_editing_on_authorship() {
    let session = Session::default().with_profile(&Profile {
      id: Some("7".to_string()),
      name: None,
    });

    let own = CommentEntry::new(make_comment("7"), None, 0, &session);
    assert!(own.editable);
    assert_eq!(own.content, "hello & welcome");

    let other = CommentEntry::new(make_comment("8"), None, 1, &session);
    assert!(!other.editable);
    assert_eq!(other.depth, 1);
  }

  #[test]
  fn created_label_falls_back_to_just_now() {
    let session = Session::default();

    let mut entry = CommentEntry::new(make_comment("7"), None, 0, &session);
    assert_eq!(entry.created_label(), "just now");

    entry.created = Some("2026-08-01".to_string());
    assert_eq!(entry.created_label(), "2026-08-01");
  }

  #[test]
  fn like_label_reflects_liked_state() {
    let session = Session::default();

    let mut entry = CommentEntry::new(make_comment("7"), None, 0, &session);
    assert_eq!(entry.like_label(), "♥ 5");

    entry.liked = false;
    entry.likes_count = 4;
    assert_eq!(entry.like_label(), "♡ 4");
  }
}
