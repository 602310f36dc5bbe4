use anyhow::Result;
use itinerary_configuration::RemoteConfiguration;
use itinerary_contracts::AttractionCatalogRecords;
use itinerary_contracts::routes;
use itinerary_day_manager::AttractionCatalog;

use crate::client::RemoteClient;

#[derive(Clone, Debug)]
pub struct HttpAttractionCatalog
{
    remote_client: RemoteClient,
}

impl HttpAttractionCatalog
{
    pub fn new(remote_configuration: RemoteConfiguration) -> Result<Self>
    {
        Ok(Self::from_client(RemoteClient::new(remote_configuration)?))
    }

    pub fn from_client(remote_client: RemoteClient) -> Self
    {
        Self { remote_client }
    }
}

impl AttractionCatalog for HttpAttractionCatalog
{
    async fn attractions(&self) -> Result<AttractionCatalogRecords>
    {
        self.remote_client.get_json(routes::ATTRACTIONS).await
    }
}
