use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::{self};

use colored::Colorize;
use itinerary_contracts::AttractionCatalogRecords;
use itinerary_contracts::AttractionKind;
use itinerary_day_manager::AttractionCatalog;
use strum::IntoEnumIterator;
use tracing::Level;
use tracing::event;

use crate::attraction::Attraction;

/// The attractions a user can pick from, one numbered list per kind. It is
/// filled once at startup from the catalog.
#[derive(Debug, Default)]
pub struct OptionsPanel
{
    choices: HashMap<AttractionKind, Vec<Attraction>>,
}

impl OptionsPanel
{
    /// Fetches the catalog. When the catalog can not be reached the panel
    /// stays empty and the failure is only logged.
    pub async fn populate<C>(attraction_catalog: &C) -> OptionsPanel
    where
        C: AttractionCatalog,
    {
        match attraction_catalog.attractions().await {
            Ok(attraction_catalog_records) => Self::from_records(&attraction_catalog_records),
            Err(error) => {
                event!(
                    Level::ERROR,
                    error = format!("{:#}", error),
                    "could not fetch the attraction catalog"
                );
                OptionsPanel::default()
            }
        }
    }

    pub fn from_records(attraction_catalog_records: &AttractionCatalogRecords) -> OptionsPanel
    {
        let choices = AttractionKind::iter()
            .map(|kind| {
                let attractions = attraction_catalog_records
                    .of_kind(kind)
                    .iter()
                    .map(|attraction_record| Attraction::from_record(kind, attraction_record))
                    .collect();
                (kind, attractions)
            })
            .collect();

        OptionsPanel { choices }
    }

    pub fn choices(&self, kind: AttractionKind) -> &[Attraction]
    {
        self.choices.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// `choice` is the 1-based number shown next to the attraction.
    pub fn select(&self, kind: AttractionKind, choice: usize) -> Option<Attraction>
    {
        choice
            .checked_sub(1)
            .and_then(|index| self.choices(kind).get(index))
            .cloned()
    }

    pub fn listing(&self, kind: Option<AttractionKind>) -> String
    {
        let kinds = match kind {
            Some(kind) => vec![kind],
            None => AttractionKind::iter().collect(),
        };

        kinds
            .into_iter()
            .map(|kind| KindListing {
                kind,
                attractions: self.choices(kind),
            })
            .map(|kind_listing| kind_listing.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct KindListing<'a>
{
    kind: AttractionKind,
    attractions: &'a [Attraction],
}

impl Display for KindListing<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.kind.to_string().as_str().bold())?;
        if self.attractions.is_empty() {
            return write!(f, "\n  (none)");
        }
        for (index, attraction) in self.attractions.iter().enumerate() {
            write!(f, "\n  {:>3}. {}", index + 1, attraction)?;
        }
        Ok(())
    }
}
