use std::fmt::Display;
use std::fmt::{self};

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;

use crate::attraction::AttractionRecord;

/// Identifier the store assigns to a day. The store hands out integer primary
/// keys, but nothing on the client side does arithmetic on them, so they are
/// kept as text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DayId(String);

impl DayId
{
    pub fn new(id: impl Into<String>) -> Self
    {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DayId
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDayId
        {
            Integer(i64),
            Text(String),
        }

        match RawDayId::deserialize(deserializer)? {
            RawDayId::Integer(id) => Ok(DayId(id.to_string())),
            RawDayId::Text(id) if id.trim().is_empty() => {
                Err(de::Error::custom("a day id can not be empty"))
            }
            RawDayId::Text(id) => Ok(DayId(id)),
        }
    }
}

impl Display for DayId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DayId
{
    fn from(value: &str) -> Self
    {
        DayId(value.to_owned())
    }
}

impl From<String> for DayId
{
    fn from(value: String) -> Self
    {
        DayId(value)
    }
}

impl From<i64> for DayId
{
    fn from(value: i64) -> Self
    {
        DayId(value.to_string())
    }
}

/// A day as the store returns it. Only the `id` is required, everything else
/// is filled in when the store has it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DayRecord
{
    pub id: DayId,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub hotel: Option<AttractionRecord>,
    #[serde(default)]
    pub restaurants: Vec<AttractionRecord>,
    #[serde(default)]
    pub activities: Vec<AttractionRecord>,
}

impl DayRecord
{
    pub fn new(id: impl Into<DayId>) -> Self
    {
        Self {
            id: id.into(),
            number: None,
            hotel: None,
            restaurants: Vec::new(),
            activities: Vec::new(),
        }
    }

    pub fn number(mut self, number: u32) -> Self
    {
        self.number = Some(number);
        self
    }
}
