use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;

#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttractionKind
{
    Hotel,
    Restaurant,
    Activity,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PlaceRecord
{
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location: Vec<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AttractionRecord
{
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub place: Option<PlaceRecord>,
}

/// Body of the catalog listing, one list per `AttractionKind`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AttractionCatalogRecords
{
    #[serde(default)]
    pub hotels: Vec<AttractionRecord>,
    #[serde(default)]
    pub restaurants: Vec<AttractionRecord>,
    #[serde(default)]
    pub activities: Vec<AttractionRecord>,
}

impl AttractionCatalogRecords
{
    pub fn of_kind(&self, attraction_kind: AttractionKind) -> &[AttractionRecord]
    {
        match attraction_kind {
            AttractionKind::Hotel => &self.hotels,
            AttractionKind::Restaurant => &self.restaurants,
            AttractionKind::Activity => &self.activities,
        }
    }
}
