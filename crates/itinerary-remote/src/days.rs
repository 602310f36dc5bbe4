use anyhow::Result;
use itinerary_configuration::RemoteConfiguration;
use itinerary_contracts::DayId;
use itinerary_contracts::DayRecord;
use itinerary_contracts::routes;
use itinerary_day_manager::RemoteDayStore;

use crate::client::RemoteClient;

/// Day store reached over http:
///
/// | operation | request |
/// |---|---|
/// | list | `GET api/days` |
/// | create | `POST api/days` |
/// | delete | `DELETE api/days/{id}` |
#[derive(Clone, Debug)]
pub struct HttpDayStore
{
    remote_client: RemoteClient,
}

impl HttpDayStore
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

impl RemoteDayStore for HttpDayStore
{
    async fn list_days(&self) -> Result<Vec<DayRecord>>
    {
        self.remote_client.get_json(routes::DAYS).await
    }

    async fn create_day(&self) -> Result<DayRecord>
    {
        self.remote_client.post_json(routes::DAYS).await
    }

    async fn delete_day(&self, day_id: &DayId) -> Result<()>
    {
        self.remote_client.delete(routes::DAYS, day_id.as_str()).await
    }
}
