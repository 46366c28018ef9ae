#[derive(Clone)]
pub(crate) enum Effect {
  CreateComment {
    container_id: String,
    content: String,
    parent: Option<String>,
    request_id: u64,
  },
  DeleteComment {
    comment_id: String,
    container_id: String,
  },
  FetchThread {
    container_id: String,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
  ToggleLike {
    comment_id: String,
    container_id: String,
  },
  UpdateComment {
    comment_id: String,
    content: String,
    request_id: u64,
  },
}
