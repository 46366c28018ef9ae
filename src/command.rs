#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelComposer,
  CancelDelete,
  CloseThread,
  ComposeComment,
  ComposeReply,
  ConfirmDelete,
  DeleteComment,
  EditComment,
  HideHelp,
  LikeComment,
  None,
  OpenInBrowser,
  OpenThread,
  Quit,
  ShowHelp,
  SubmitComposer,
}
