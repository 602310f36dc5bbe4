use std::fmt::Display;
use std::fmt::{self};

use itinerary_contracts::AttractionKind;
use itinerary_contracts::AttractionRecord;

/// An attraction as the client shows it. Two attractions are the same when
/// kind and id match.
#[derive(Debug, Clone)]
pub struct Attraction
{
    pub kind: AttractionKind,
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
}

impl Attraction
{
    pub fn from_record(kind: AttractionKind, attraction_record: &AttractionRecord) -> Self
    {
        Self {
            kind,
            id: attraction_record.id,
            name: attraction_record.name.clone(),
            address: attraction_record
                .place
                .as_ref()
                .and_then(|place| place.address.clone()),
        }
    }
}

impl PartialEq for Attraction
{
    fn eq(&self, other: &Self) -> bool
    {
        self.kind == other.kind && self.id == other.id
    }
}

impl Display for Attraction
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &self.address {
            Some(address) => write!(f, "{} ({})", self.name, address),
            None => write!(f, "{}", self.name),
        }
    }
}
