use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  pub(crate) fn base_url(&self) -> &Url {
    &self.base_url
  }

  fn endpoint(&self, path: &str) -> Result<Url> {
    self
      .base_url
      .join(path)
      .with_context(|| format!("invalid endpoint `{path}`"))
  }

  pub(crate) async fn fetch_stories(&self) -> Result<Vec<Story>> {
    let url = self.endpoint("stories")?;

    info!(%url, "fetching stories");

    let response = self
      .client
      .get(url)
      .send()
      .await?
      .json::<StoriesResponse>()
      .await?;

    if let Some(total) = response.total_stories
      && total != response.stories.len()
    {
      warn!(
        total,
        received = response.stories.len(),
        "story count does not match reported total"
      );
    }

    Ok(response.stories)
  }

  /// A client that never goes through a system proxy, for servers on the
  /// loopback interface.
  #[cfg(test)]
  pub(crate) fn local(base_url: Url) -> Result<Self> {
    Self::with_builder(base_url, reqwest::Client::builder().no_proxy())
  }

  pub(crate) fn new(base_url: Url) -> Result<Self> {
    Self::with_builder(base_url, reqwest::Client::builder())
  }

  pub(crate) async fn search(&self, tags: &[String]) -> Result<Vec<SearchHit>> {
    let mut url = self.endpoint("search")?;

    url.query_pairs_mut().append_pair("tags", &tags.join(","));

    info!(%url, "searching stories");

    let response = self.client.get(url).send().await?;

    let status = response.status();

    if !status.is_success() {
      let reason = response
        .json::<Vec<String>>()
        .await
        .ok()
        .and_then(|messages| messages.into_iter().next())
        .unwrap_or_else(|| status.to_string());

      bail!("{reason}");
    }

    Ok(response.json::<Vec<SearchHit>>().await?)
  }

  /// Resolves once the server has answered with a JSON body, whatever its
  /// status or content.
  pub(crate) async fn submit_vote(&self, vote: Vote) -> Result {
    let url = self.endpoint(&vote.path())?;

    info!(%url, direction = %vote.direction, "submitting vote");

    let response = self
      .client
      .post(url)
      .json(&vote.request())
      .send()
      .await?;

    let status = response.status();

    let body = response.json::<Value>().await?;

    debug!(%status, %body, "vote response ignored");

    Ok(())
  }

  fn with_builder(
    mut base_url: Url,
    builder: reqwest::ClientBuilder,
  ) -> Result<Self> {
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }

    let client = builder
      .cookie_store(true)
      .build()
      .context("could not build HTTP client")?;

    Ok(Self { base_url, client })
  }
}
