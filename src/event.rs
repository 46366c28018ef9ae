use super::*;

pub(crate) enum Event {
  CommentCreated {
    request_id: u64,
    result: Result<Comment>,
  },
  CommentDeleted {
    comment_id: String,
    container_id: String,
    result: Result,
  },
  CommentLiked {
    comment_id: String,
    container_id: String,
    result: Result<LikeResponse>,
  },
  CommentUpdated {
    request_id: u64,
    result: Result<Comment>,
  },
  Thread {
    request_id: u64,
    result: Result<Vec<Comment>>,
  },
}
