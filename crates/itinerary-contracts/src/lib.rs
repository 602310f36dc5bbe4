pub mod attraction;
pub mod day;

pub use attraction::AttractionCatalogRecords;
pub use attraction::AttractionKind;
pub use attraction::AttractionRecord;
pub use attraction::PlaceRecord;
pub use day::DayId;
pub use day::DayRecord;

/// Paths of the day store API. They are joined onto the configured base url by
/// the remote crate, so they must stay relative. A single day lives below
/// `DAYS` under its id.
pub mod routes
{
    pub const DAYS: &str = "api/days";
    pub const ATTRACTIONS: &str = "api/attractions";
}
