use std::future::Future;

use anyhow::Result;
use itinerary_contracts::AttractionCatalogRecords;
use itinerary_contracts::DayId;
use itinerary_contracts::DayRecord;

/// Persistence of days behind a network boundary.
pub trait RemoteDayStore: Send + Sync + 'static
{
    fn list_days(&self) -> impl Future<Output = Result<Vec<DayRecord>>> + Send;

    fn create_day(&self) -> impl Future<Output = Result<DayRecord>> + Send;

    fn delete_day(&self, day_id: &DayId) -> impl Future<Output = Result<()>> + Send;
}

/// The visible unit for one day. Everything about how a day is drawn lives
/// behind this trait; the manager only tells it what changed.
pub trait DayEntity: Send + 'static
{
    /// Whatever the user picked in the attraction catalog. The manager only
    /// hands it through to the current day.
    type Attraction: Send + 'static;

    fn id(&self) -> &DayId;

    fn number(&self) -> u32;

    fn show(&mut self);

    fn hide(&mut self);

    fn set_number(&mut self, number: u32);

    /// Retracts the remove control of a day that has just been deleted.
    fn hide_button(&mut self);

    fn add_attraction(&mut self, attraction: Self::Attraction);

    fn remove_attraction(&mut self, attraction: Self::Attraction);
}

pub trait DayFactory: Send + Sync + 'static
{
    type Day: DayEntity;

    /// Builds the display object for a day the store has confirmed. `number`
    /// is the 1-based position the day will take in the collection.
    fn create(&self, day_record: DayRecord, number: u32) -> Self::Day;
}

pub type AttractionOf<F> = <<F as DayFactory>::Day as DayEntity>::Attraction;

/// Source of the attractions a user can pick from.
pub trait AttractionCatalog: Send + Sync + 'static
{
    fn attractions(&self) -> impl Future<Output = Result<AttractionCatalogRecords>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttractionMode
{
    Add,
    Remove,
}
