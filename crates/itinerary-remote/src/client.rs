use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use itinerary_configuration::RemoteConfiguration;
use reqwest::Method;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::Level;
use tracing::event;
use url::Url;

/// Thin wrapper around `reqwest` that turns every non-success status into an
/// error naming the request.
#[derive(Clone, Debug)]
pub struct RemoteClient
{
    client: reqwest::Client,
    remote_configuration: RemoteConfiguration,
}

impl RemoteClient
{
    pub fn new(remote_configuration: RemoteConfiguration) -> Result<Self>
    {
        let client = reqwest::Client::builder()
            .timeout(remote_configuration.request_timeout())
            .build()
            .context("Could not build the http client for the day store")?;

        Ok(Self {
            client,
            remote_configuration,
        })
    }

    pub fn remote_configuration(&self) -> &RemoteConfiguration
    {
        &self.remote_configuration
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.remote_configuration.endpoint(path)?;
        let response = self.send(Method::GET, &url).await?;
        decode(response, &Method::GET, &url).await
    }

    pub async fn post_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.remote_configuration.endpoint(path)?;
        let response = self.send(Method::POST, &url).await?;
        decode(response, &Method::POST, &url).await
    }

    /// Deletes the resource `id` of the collection at `path`.
    pub async fn delete(&self, path: &str, id: &str) -> Result<()>
    {
        let url = self.remote_configuration.resource_endpoint(path, id)?;
        self.send(Method::DELETE, &url).await?;
        Ok(())
    }

    async fn send(&self, method: Method, url: &Url) -> Result<Response>
    {
        event!(Level::DEBUG, %method, %url, "sending request to the day store");

        let response = self
            .client
            .request(method.clone(), url.clone())
            .send()
            .await
            .with_context(|| format!("{} {} could not be sent", method, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{} {} answered {}: {}", method, url, status, body.trim());
        }

        Ok(response)
    }
}

async fn decode<T>(response: Response, method: &Method, url: &Url) -> Result<T>
where
    T: DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .with_context(|| format!("{} {} returned a body that could not be decoded", method, url))
}
