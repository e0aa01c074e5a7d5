use super::*;

fn default_log_path(
  state_home: Option<String>,
  home: Option<String>,
) -> Result<PathBuf> {
  let base_dir = if let Some(dir) = state_home.filter(|dir| !dir.is_empty()) {
    PathBuf::from(dir)
  } else if let Some(home) = home.filter(|home| !home.is_empty()) {
    PathBuf::from(home).join(".local").join("state")
  } else {
    env::current_dir()?.join(".local").join("state")
  };

  Ok(base_dir.join("news").join("news.log"))
}

/// Sends `tracing` output to a file so it never draws over the terminal UI.
pub(crate) fn initialize(log_file: Option<PathBuf>) -> Result<PathBuf> {
  let path = match log_file {
    Some(path) => path,
    None => default_log_path(
      env::var("XDG_STATE_HOME").ok(),
      env::var("HOME").ok(),
    )?,
  };

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("could not initialize logging: {error}"))?;

  Ok(path)
}
