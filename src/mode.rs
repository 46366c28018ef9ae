use super::*;

pub(crate) enum Mode {
  Posts(ListView<Post>),
  Thread(ThreadView),
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    match self {
      Mode::Posts(view) => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Down | KeyCode::Char('j') => {
            view.select_next();
            Command::None
          }
          KeyCode::Up | KeyCode::Char('k') => {
            view.select_previous();
            Command::None
          }
          KeyCode::PageDown => {
            view.page_down(page);
            Command::None
          }
          KeyCode::PageUp => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_down(page);
            Command::None
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Home => {
            view.set_selected(0);
            Command::None
          }
          KeyCode::End => {
            view.select_last();
            Command::None
          }
          KeyCode::Enter => Command::OpenThread,
          KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
          _ => Command::None,
        }
      }
      Mode::Thread(view) => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') => Command::Quit,
          KeyCode::Esc => Command::CloseThread,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
          KeyCode::Char('c' | 'C') => Command::ComposeComment,
          KeyCode::Char('r' | 'R') => Command::ComposeReply,
          KeyCode::Char('e' | 'E') => Command::EditComment,
          KeyCode::Char('l' | 'L') => Command::LikeComment,
          KeyCode::Down | KeyCode::Char('j') => {
            view.select_next();
            Command::None
          }
          KeyCode::Up | KeyCode::Char('k') => {
            view.select_previous();
            Command::None
          }
          KeyCode::PageDown => {
            view.page_down(page);
            Command::None
          }
          KeyCode::PageUp => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_down(page);
            Command::None
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Char('d' | 'D') => Command::DeleteComment,
          KeyCode::Left | KeyCode::Char('h') => {
            view.collapse_selected();
            Command::None
          }
          KeyCode::Right => {
            view.expand_selected();
            Command::None
          }
          KeyCode::Enter | KeyCode::Char(' ') => {
            view.toggle_selected();
            Command::None
          }
          KeyCode::Home => {
            view.select_index_at(0);
            Command::None
          }
          KeyCode::End => {
            let (visible, _) = view.visible_with_selection();

            if !visible.is_empty() {
              view.select_index_at(visible.len().saturating_sub(1));
            }

            Command::None
          }
          _ => Command::None,
        }
      }
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    match self {
      Mode::Posts(view) => view.set_offset(offset),
      Mode::Thread(view) => view.offset = offset,
    }
  }
}
