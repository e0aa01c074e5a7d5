use {
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  clap::Parser,
  click_map::{ClickMap, ClickTarget},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  container::Container,
  control_id::ControlId,
  crossterm::{
    event as crossterm_event,
    event::{
      DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
      KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
      MouseEventKind,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  direction::Direction,
  effect::Effect,
  event::Event,
  help_view::HelpView,
  mode::Mode,
  phase::Phase,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{
      Constraint, Direction as LayoutDirection, Layout, Position, Rect,
    },
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph,
    },
  },
  reqwest::Url,
  search_hit::SearchHit,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  status_line::StatusLine,
  std::{
    backtrace::BacktraceStatus,
    env,
    fmt::{self, Display, Formatter},
    fs::{self, OpenOptions},
    io::{self, IsTerminal, Stdout},
    path::PathBuf,
    process,
    str::FromStr,
    sync::Mutex,
    time::{Duration, Instant},
  },
  stories_response::StoriesResponse,
  story::Story,
  story_card::{CARD_HEIGHT, StoryCard, render_stories},
  subcommand::Subcommand,
  tag_input::TagInput,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_score, format_points, truncate},
  vote::Vote,
};

mod app;
mod arguments;
mod click_map;
mod client;
mod command;
mod command_dispatch;
mod container;
mod control_id;
mod direction;
mod effect;
mod event;
mod help_view;
mod logging;
mod mode;
mod phase;
mod search_hit;
mod state;
mod status_line;
mod stories_response;
mod story;
mod story_card;
mod subcommand;
mod tag_input;
mod utils;
mod vote;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const DEFAULT_LOG_FILTER: &str = "info";

const LIST_STATUS: &str = "↑/k up • ↓/j down • u upvote • d downvote • o open link • r reload • / search • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading stories...";
const VOTING_STATUS: &str = "Submitting vote...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Voting:
  u / +   upvote the selected story
  d / -   downvote the selected story
  click   ⬆ or ⬇ next to a story to vote on it
          the list is reloaded after every vote

Actions:
  enter   open the selected story in your browser
  o       open the selected story in your browser
  click   a title to open it in your browser
  r       reload the story list
  /       search by tags (comma separated, enter to submit)
  esc     leave search results, or quit from the list
  q       quit news
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(
    terminal.backend_mut(),
    DisableMouseCapture,
    LeaveAlternateScreen
  )?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let log_path = logging::initialize(arguments.log_file)?;

  let client = Client::new(arguments.base_url)?;

  info!(base_url = %client.base_url(), log = %log_path.display(), "starting");

  if let Some(subcommand) = arguments.subcommand {
    return subcommand.run(&client).await;
  }

  let stories = client
    .fetch_stories()
    .await
    .with_context(|| format!("could not load stories from {}", client.base_url()))?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, &stories);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
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
