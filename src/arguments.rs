use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "news",
  version,
  about = "Read and vote on news stories from the terminal"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "NEWS_BASE_URL",
    default_value = DEFAULT_BASE_URL,
    help = "Base URL of the stories backend"
  )]
  pub(crate) base_url: Url,
  #[arg(
    long,
    env = "NEWS_LOG_FILE",
    help = "Write logs to <LOG_FILE> instead of the default state directory"
  )]
  pub(crate) log_file: Option<PathBuf>,
  #[command(subcommand)]
  pub(crate) subcommand: Option<Subcommand>,
}
