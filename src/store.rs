use super::*;

#[derive(Default)]
pub(crate) struct CommentStore {
  threads: HashMap<String, Vec<Comment>>,
}

impl CommentStore {
  pub(crate) fn append(&mut self, container_id: &str, comment: Comment) {
    let thread = self.threads.entry(container_id.to_string()).or_default();

    if let Some(existing) = thread
      .iter_mut()
      .find(|existing| existing.id == comment.id)
    {
      *existing = comment;
    } else {
      thread.push(comment);
    }
  }

  pub(crate) fn apply_edit(&mut self, container_id: &str, comment: &Comment) {
    if let Some(existing) = self
      .threads
      .get_mut(container_id)
      .and_then(|thread| {
        thread.iter_mut().find(|existing| existing.id == comment.id)
      })
    {
      existing.content = comment.content.clone();
    }
  }

  pub(crate) fn apply_like(
    &mut self,
    container_id: &str,
    comment_id: &str,
    like: LikeResponse,
  ) {
    if let Some(existing) = self
      .threads
      .get_mut(container_id)
      .and_then(|thread| {
        thread.iter_mut().find(|existing| existing.id == comment_id)
      })
    {
      existing.likes_count = like.like_count;
      existing.liked = like.liked;
    }
  }

  pub(crate) fn remove(&mut self, container_id: &str, comment_id: &str) -> bool {
    let Some(thread) = self.threads.get_mut(container_id) else {
      return false;
    };

    let Some(position) = thread
      .iter()
      .position(|comment| comment.id == comment_id)
    else {
      return false;
    };

    let removed = thread.remove(position);

    // Replies are promoted to the removed comment's parent so a deletion
    // never takes a whole subtree with it.
    for comment in &mut *thread {
      if comment.parent.as_deref() == Some(comment_id) {
        comment.parent = removed.parent.clone();
      }
    }

    true
  }

  pub(crate) fn replace(&mut self, container_id: &str, comments: Vec<Comment>) {
    self.threads.insert(container_id.to_string(), comments);
  }

  pub(crate) fn thread(&self, container_id: &str) -> &[Comment] {
    self
      .threads
      .get(container_id)
      .map_or(&[], Vec::as_slice)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_comment(id: &str, parent: Option<&str>) -> Comment {
    Comment {
      author_id: "7".to_string(),
      author_name: "Ana".to_string(),
      content: format!("comment {id}"),
      created: None,
      id: id.to_string(),
      liked: false,
      likes_count: 0,
      parent: parent.map(str::to_string),
      post: "3".to_string(),
      user_photo: None,
    }
  }

  fn seeded_store() -> CommentStore {
    let mut store = CommentStore::default();

    store.replace(
      "3",
      vec![
        make_comment("1", None),
        make_comment("2", Some("1")),
        make_comment("4", Some("2")),
      ],
    );

    store
  }

  #[test]
  fn append_is_idempotent_by_id() {
    let mut store = seeded_store();

    store.append("3", make_comment("5", None));
    assert_eq!(store.thread("3").len(), 4);

    store.append("3", make_comment("5", None));
    assert_eq!(store.thread("3").len(), 4);
  }

  #[test]
  fn apply_edit_rewrites_only_the_content() {
    let mut store = seeded_store();

    let mut updated = make_comment("2", Some("1"));
    updated.content = "revised".to_string();
    updated.likes_count = 99;

    store.apply_edit("3", &updated);

    let edited = store
      .thread("3")
      .iter()
      .find(|comment| comment.id == "2")
      .unwrap();

    assert_eq!(edited.content, "revised");
    assert_eq!(edited.likes_count, 0);
  }

  #[test]
  fn apply_like_takes_the_server_count_verbatim() {
    let mut store = seeded_store();

    store.apply_like(
      "3",
      "1",
      LikeResponse {
        like_count: 5,
        liked: true,
      },
    );

    let liked = store
      .thread("3")
      .iter()
      .find(|comment| comment.id == "1")
      .unwrap();

    assert_eq!(liked.likes_count, 5);
    assert!(liked.liked);
  }

  #[test]
  fn remove_promotes_replies_to_the_removed_parent() {
    let mut store = seeded_store();

    assert!(store.remove("3", "2"));

    let thread = store.thread("3");
    assert_eq!(thread.len(), 2);

    let orphan = thread.iter().find(|comment| comment.id == "4").unwrap();
    assert_eq!(orphan.parent.as_deref(), Some("1"));
  }

  #[test]
  fn remove_promotes_root_replies_to_roots() {
    let mut store = seeded_store();

    assert!(store.remove("3", "1"));

    let promoted = store
      .thread("3")
      .iter()
      .find(|comment| comment.id == "2")
      .unwrap();

    assert_eq!(promoted.parent, None);
  }

  #[test]
  fn remove_is_a_no_op_for_unknown_ids() {
    let mut store = seeded_store();

    assert!(!store.remove("3", "99"));
    assert!(!store.remove("other", "1"));
    assert_eq!(store.thread("3").len(), 3);
  }
}
