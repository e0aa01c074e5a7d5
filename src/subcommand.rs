use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Print the current stories and exit")]
  List,
  #[command(about = "Vote with CONTROL (e.g. `42-up`), then print the stories")]
  Vote { control: ControlId },
}

impl Subcommand {
  fn listing(stories: &[Story]) -> String {
    let mut container = Container::default();

    render_stories(&mut container, stories);

    if container.is_empty() {
      return "No stories.".into();
    }

    container
      .items()
      .iter()
      .map(StoryCard::to_string)
      .collect::<Vec<_>>()
      .join("\n")
  }

  pub(crate) async fn run(self, client: &Client) -> Result {
    match self {
      Self::List => {}
      Self::Vote { control } => {
        client
          .submit_vote(control.vote())
          .await
          .with_context(|| format!("could not submit vote `{control}`"))?;
      }
    }

    let stories = client
      .fetch_stories()
      .await
      .with_context(|| format!("could not load stories from {}", client.base_url()))?;

    println!("{}", Self::listing(&stories));

    Ok(())
  }
}
