use super::*;

pub(crate) struct Composer {
  pub(crate) buffer: String,
  pub(crate) in_flight: Option<u64>,
  pub(crate) message_backup: String,
  pub(crate) target: ComposerTarget,
}

#[derive(Clone)]
pub(crate) enum ComposerTarget {
  Comment {
    container_id: String,
  },
  Edit {
    comment_id: String,
  },
  Reply {
    container_id: String,
    parent_id: String,
  },
}

impl Composer {
  pub(crate) fn is_saving(&self) -> bool {
    self.in_flight.is_some()
      && matches!(self.target, ComposerTarget::Edit { .. })
  }

  pub(crate) fn new(
    target: ComposerTarget,
    buffer: String,
    message_backup: String,
  ) -> Self {
    Self {
      buffer,
      in_flight: None,
      message_backup,
      target,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    let label = match &self.target {
      ComposerTarget::Comment { .. } => "Comment",
      ComposerTarget::Edit { .. } => "Edit",
      ComposerTarget::Reply { .. } => "Reply",
    };

    if self.is_saving() {
      format!("{label}: {} (saving...)", self.buffer)
    } else {
      format!("{label}: {}", self.buffer)
    }
  }
}
