mod remote;
mod session;

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
pub use remote::RemoteConfiguration;
use serde::Deserialize;
use serde::Serialize;
pub use session::AddDayPolicy;
pub use session::SessionConfiguration;
use url::Url;

pub const CONFIGURATION_PATH_VARIABLE: &str = "ITINERARY_CONFIGURATION";
pub const API_URL_VARIABLE: &str = "ITINERARY_API_URL";
pub const DEFAULT_CONFIGURATION_PATH: &str = "./configuration/itinerary.toml";

/// All configuration of a client session, read once at startup and handed
/// to the components that need it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfigurations
{
    pub remote: RemoteConfiguration,
    #[serde(default)]
    pub session: SessionConfiguration,
}

impl ClientConfigurations
{
    /// Reads the file named by `ITINERARY_CONFIGURATION` (or the default
    /// location) and applies the `ITINERARY_API_URL` override.
    pub fn read_from_env() -> Result<ClientConfigurations>
    {
        let path = dotenvy::var(CONFIGURATION_PATH_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIGURATION_PATH));

        Self::read_with_overrides(&path)
    }

    pub fn read_with_overrides(path: &Path) -> Result<ClientConfigurations>
    {
        let mut client_configurations = Self::read(path)?;

        if let Ok(api_url) = dotenvy::var(API_URL_VARIABLE) {
            client_configurations.remote.base_url = Url::parse(&api_url)
                .with_context(|| format!("{} is not a valid url: {}", API_URL_VARIABLE, api_url))?;
            client_configurations.remote.validate()?;
        }

        Ok(client_configurations)
    }

    pub fn read(path: &Path) -> Result<ClientConfigurations>
    {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read configuration file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<ClientConfigurations>
    {
        let client_configurations: ClientConfigurations = toml::from_str(contents)?;
        client_configurations.remote.validate()?;
        Ok(client_configurations)
    }
}
