use {
  anyhow::Context,
  api_error::ApiError,
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_entry::CommentEntry,
  comment_node::CommentNode,
  composer::{Composer, ComposerTarget},
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  futures::future::join,
  help_view::HelpView,
  like_response::LikeResponse,
  list_view::ListView,
  mode::Mode,
  pending_thread::PendingThread,
  post::Post,
  profile::Profile,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  reqwest::{Method, StatusCode, header},
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  session::Session,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
  },
  store::CommentStore,
  thread_view::ThreadView,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{
    clean_content, deserialize_id, deserialize_optional_id, format_comments,
    truncate, wrap_text,
  },
};

mod api_error;
mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_entry;
mod comment_node;
mod composer;
mod config;
mod effect;
mod event;
mod help_view;
mod like_response;
mod list_view;
mod mode;
mod pending_thread;
mod post;
mod profile;
mod session;
mod state;
mod store;
mod thread_view;
mod transient_message;
mod utils;

const POSTS_STATUS: &str =
  "↑/k up • ↓/j down • enter comments • o open post • q/esc quit • ? help";

const THREAD_STATUS: &str = "↑/↓ move • ←/→ fold • c comment • r reply • l like • e edit • d delete • esc back";

const CONFIRM_DELETE_STATUS: &str =
  "Delete this comment? y to delete • n to cancel";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_COMMENTS_STATUS: &str = "Loading comments...";

const EMPTY_THREAD_MESSAGE: &str = "Be the first to comment...";

const BASE_INDENT: &str = " ";

const DEFAULT_API_URL: &str = "http://localhost:8000";

const TRANSIENT_MESSAGE_TTL: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first item
  end     jump to last item

Posts:
  enter   open the comment thread for the selected post
  o       open the selected post in your browser
  q       quit agora
  esc     close help or quit from the post list

Comments:
  ← / h   collapse the subtree or go to the parent
  →       expand the subtree or go to the first reply
  enter   toggle collapse or expand
  c       write a new comment
  r       reply to the selected comment
  e       edit the selected comment (your comments only)
  d       delete the selected comment (your comments only)
  l       like or unlike the selected comment
  o       open the selected comment in your browser
  esc     return to the post list

Composer:
  type to edit, enter to submit, esc to cancel
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load();

  let session = Session::load().context("could not load session")?;

  let client = Client::new(&config, &session);

  let (posts, profile) =
    join(client.fetch_posts(), client.fetch_profile()).await;

  let posts = posts.context("could not load posts")?;

  // A failed profile lookup just means browsing signed out.
  let profile = profile.ok();

  let session = match &profile {
    Some(profile) => session.with_profile(profile),
    None => session,
  };

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, config.base_url, posts, profile, session);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
