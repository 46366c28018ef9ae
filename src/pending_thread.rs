pub(crate) struct PendingThread {
  pub(crate) container_id: String,
  pub(crate) request_id: u64,
}
