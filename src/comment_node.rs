use super::*;

#[derive(Clone, Debug)]
pub(crate) struct CommentNode {
  pub(crate) comment: Comment,
  pub(crate) replies: Vec<CommentNode>,
}

impl CommentNode {
  fn assemble(
    comment: Comment,
    children: &mut HashMap<String, Vec<Comment>>,
  ) -> CommentNode {
    let mut queue = children.remove(&comment.id).unwrap_or_default();
    queue.reverse();

    let mut frames = vec![(
      CommentNode {
        comment,
        replies: Vec::new(),
      },
      queue,
    )];

    loop {
      if let Some(next) = frames.last_mut().and_then(|(_, queue)| queue.pop()) {
        let mut queue = children.remove(&next.id).unwrap_or_default();
        queue.reverse();

        frames.push((
          CommentNode {
            comment: next,
            replies: Vec::new(),
          },
          queue,
        ));

        continue;
      }

      if let Some((node, _)) = frames.pop() {
        match frames.last_mut() {
          Some((parent, _)) => parent.replies.push(node),
          None => return node,
        }
      }
    }
  }

  pub(crate) fn forest(comments: Vec<Comment>) -> Vec<CommentNode> {
    let ids = comments
      .iter()
      .map(|comment| comment.id.clone())
      .collect::<HashSet<_>>();

    let mut children: HashMap<String, Vec<Comment>> = HashMap::new();
    let mut roots = Vec::new();

    for comment in comments {
      match comment.parent.clone() {
        Some(parent) if ids.contains(&parent) && parent != comment.id => {
          children.entry(parent).or_default().push(comment);
        }
        _ => roots.push(comment),
      }
    }

    let mut forest = Vec::with_capacity(roots.len());

    for root in roots {
      forest.push(Self::assemble(root, &mut children));
    }

    // Comments caught in a parent cycle are unreachable from any root;
    // surface them as roots instead of dropping them.
    while !children.is_empty() {
      let mut stranded = children.keys().cloned().collect::<Vec<_>>();
      stranded.sort();

      for id in stranded {
        if let Some(comments) = children.remove(&id) {
          for comment in comments {
            forest.push(Self::assemble(comment, &mut children));
          }
        }
      }
    }

    forest
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_comment(id: &str, parent: Option<&str>) -> Comment {
    Comment {
      author_id: "1".to_string(),
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

  fn count(forest: &[CommentNode]) -> usize {
    let mut total = 0;
    let mut stack = forest.iter().collect::<Vec<_>>();

    while let Some(node) = stack.pop() {
      total += 1;
      stack.extend(node.replies.iter());
    }

    total
  }

  #[test]
  fn forest_nests_replies_under_present_parents() {
    let forest = CommentNode::forest(vec![
      make_comment("1", None),
      make_comment("2", Some("1")),
      make_comment("3", Some("99")),
    ]);

    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].comment.id, "1");
    assert_eq!(forest[0].replies.len(), 1);
    assert_eq!(forest[0].replies[0].comment.id, "2");
    assert_eq!(forest[1].comment.id, "3");
    assert!(forest[1].replies.is_empty());
  }

  #[test]
  fn forest_preserves_total_node_count() {
    let comments = vec![
      make_comment("1", None),
      make_comment("2", Some("1")),
      make_comment("3", Some("2")),
      make_comment("4", Some("1")),
      make_comment("5", None),
      make_comment("6", Some("missing")),
    ];

    let total = comments.len();
    let forest = CommentNode::forest(comments);

    assert_eq!(count(&forest), total);
  }

  #[test]
  fn forest_preserves_sibling_order() {
    let forest = CommentNode::forest(vec![
      make_comment("1", None),
      make_comment("2", Some("1")),
      make_comment("3", Some("1")),
      make_comment("4", Some("1")),
    ]);

    let siblings = forest[0]
      .replies
      .iter()
      .map(|node| node.comment.id.as_str())
      .collect::<Vec<_>>();

    assert_eq!(siblings, vec!["2", "3", "4"]);
  }

  #[test]
  fn forest_treats_missing_parent_as_root() {
    let forest =
      CommentNode::forest(vec![make_comment("3", Some("99"))]);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].comment.id, "3");
  }

  #[test]
  fn forest_surfaces_parent_cycles_as_roots() {
    let comments = vec![
      make_comment("1", Some("2")),
      make_comment("2", Some("1")),
      make_comment("3", None),
    ];

    let total = comments.len();
    let forest = CommentNode::forest(comments);

    assert_eq!(count(&forest), total);
  }

  #[test]
  fn forest_handles_deep_reply_chains() {
    let mut comments = vec![make_comment("0", None)];

    for id in 1..5_000 {
      comments.push(make_comment(
        &id.to_string(),
        Some(&(id - 1).to_string()),
      ));
    }

    let total = comments.len();
    let forest = CommentNode::forest(comments);

    assert_eq!(forest.len(), 1);
    assert_eq!(count(&forest), total);
  }
}
