use super::*;

#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct LikeResponse {
  pub(crate) like_count: u64,
  pub(crate) liked: bool,
}
