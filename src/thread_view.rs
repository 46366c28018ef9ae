use super::*;

pub(crate) struct ThreadView {
  container_id: String,
  pub(crate) entries: Vec<CommentEntry>,
  pub(crate) offset: usize,
  pub(crate) selected: Option<usize>,
}

impl ThreadView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.expanded && !entry.children.is_empty() {
        entry.expanded = false;
      } else if let Some(parent) = entry.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn collapsed_ids(&self) -> HashSet<String> {
    self
      .entries
      .iter()
      .filter(|entry| !entry.expanded)
      .map(|entry| entry.id.clone())
      .collect()
  }

  pub(crate) fn container_id(&self) -> &str {
    &self.container_id
  }

  pub(crate) fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(idx) = current {
      if self.is_visible(idx) {
        self.selected = Some(idx);
        return;
      }

      current = self.entries.get(idx).and_then(|entry| entry.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      if entry.expanded {
        if let Some(child) = entry.children.first().copied() {
          self.selected = Some(child);
        }
      } else {
        entry.expanded = true;
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn is_visible(&self, idx: usize) -> bool {
    let mut current = Some(idx);

    while let Some(i) = current {
      if let Some(parent) = self.entries.get(i).and_then(|entry| entry.parent) {
        if let Some(parent_entry) = self.entries.get(parent)
          && !parent_entry.expanded
        {
          return false;
        }

        current = Some(parent);
      } else {
        break;
      }
    }

    true
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);
    let max_index = visible.len().saturating_sub(1);

    let target = if delta >= 0 {
      let delta_usize = usize::try_from(delta).unwrap_or(usize::MAX);
      current.saturating_add(delta_usize).min(max_index)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      current.saturating_sub(magnitude)
    };

    self.selected = Some(visible[target]);
  }

  pub(crate) fn new(
    container_id: String,
    forest: Vec<CommentNode>,
    session: &Session,
  ) -> Self {
    let mut entries = Vec::new();

    Self::push_nodes(&mut entries, forest, session);

    let selected = if entries.is_empty() { None } else { Some(0) };

    Self {
      container_id,
      entries,
      offset: 0,
      selected,
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(delta);
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(-delta);
  }

  pub(crate) fn patch_content(&mut self, comment_id: &str, content: &str) {
    if let Some(entry) = self
      .entries
      .iter_mut()
      .find(|entry| entry.id == comment_id)
    {
      entry.content = clean_content(content);
    }
  }

  pub(crate) fn patch_like(&mut self, comment_id: &str, like: LikeResponse) {
    if let Some(entry) = self
      .entries
      .iter_mut()
      .find(|entry| entry.id == comment_id)
    {
      entry.likes_count = like.like_count;
      entry.liked = like.liked;
    }
  }

  fn push_nodes(
    entries: &mut Vec<CommentEntry>,
    forest: Vec<CommentNode>,
    session: &Session,
  ) {
    let mut stack = forest
      .into_iter()
      .rev()
      .map(|node| (node, None, 0))
      .collect::<Vec<(CommentNode, Option<usize>, usize)>>();

    while let Some((node, parent, depth)) = stack.pop() {
      let CommentNode { comment, replies } = node;

      let idx = entries.len();

      entries.push(CommentEntry::new(comment, parent, depth, session));

      if let Some(parent_idx) = parent
        && let Some(parent_entry) = entries.get_mut(parent_idx)
      {
        parent_entry.children.push(idx);
      }

      for reply in replies.into_iter().rev() {
        stack.push((reply, Some(idx), depth.saturating_add(1)));
      }
    }
  }

  pub(crate) fn restore(
    &mut self,
    selected_id: Option<&str>,
    collapsed: &HashSet<String>,
    offset: usize,
  ) {
    for entry in &mut self.entries {
      if collapsed.contains(&entry.id) {
        entry.expanded = false;
      }
    }

    if let Some(selected_id) = selected_id
      && let Some(position) = self
        .entries
        .iter()
        .position(|entry| entry.id == selected_id)
    {
      self.selected = Some(position);
    }

    if self.entries.is_empty() {
      self.selected = None;
      self.offset = 0;
    } else {
      let last = self.entries.len().saturating_sub(1);
      self.selected = self.selected.map(|selected| selected.min(last));
      self.offset = offset.min(last);
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    let (visible, _) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let index = pos.min(visible.len().saturating_sub(1));

    self.selected = Some(visible[index]);
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn selected_comment_id(&self) -> Option<String> {
    self.selected_entry().map(|entry| entry.id.clone())
  }

  pub(crate) fn selected_entry(&self) -> Option<&CommentEntry> {
    self
      .selected
      .and_then(|selected| self.entries.get(selected))
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      entry.expanded = !entry.expanded;
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    let mut visible = Vec::new();

    for idx in 0..self.entries.len() {
      if self.is_visible(idx) {
        visible.push(idx);
      }
    }

    visible
  }

  pub(crate) fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&idx| idx == selected));

    (visible, selected_pos)
  }
}
