use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RemoteConfiguration
{
    pub base_url: Url,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64
{
    10
}

impl RemoteConfiguration
{
    pub fn new(base_url: Url) -> Self
    {
        Self {
            base_url,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn request_timeout(&self) -> Duration
    {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Joins a relative API path onto the base url. The base url is treated
    /// as a directory even when it is written without a trailing slash.
    pub fn endpoint(&self, path: &str) -> Result<Url>
    {
        let mut base_url = self.base_url.clone();
        if !base_url.path().ends_with('/') {
            let directory = format!("{}/", base_url.path());
            base_url.set_path(&directory);
        }

        base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Could not join {} onto {}", path, self.base_url))
    }

    /// Url of the single resource `id` below the collection at `path`. The id
    /// is pushed as one percent-encoded segment, so `/`, `?` and `#` in it can
    /// not address another resource.
    pub fn resource_endpoint(&self, path: &str, id: &str) -> Result<Url>
    {
        if matches!(id, "" | "." | "..") {
            bail!("{:?} can not be used as a resource id in a url", id);
        }

        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("{} can not be used as a base", self.base_url))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    pub(crate) fn validate(&self) -> Result<()>
    {
        if self.base_url.cannot_be_a_base() {
            bail!("remote.base_url can not be used as a base: {}", self.base_url);
        }
        if self.request_timeout_secs == 0 {
            bail!("remote.request_timeout_secs has to be larger than zero");
        }
        Ok(())
    }
}
