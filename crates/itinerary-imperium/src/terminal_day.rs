use std::fmt::Display;
use std::fmt::{self};

use colored::Colorize;
use itinerary_contracts::AttractionKind;
use itinerary_contracts::AttractionRecord;
use itinerary_contracts::DayId;
use itinerary_contracts::DayRecord;
use itinerary_day_manager::DayEntity;
use itinerary_day_manager::DayFactory;
use tracing::Level;
use tracing::event;

use crate::attraction::Attraction;

/// A day drawn on the terminal. It is printed whenever it is shown or
/// changes while visible.
#[derive(Debug)]
pub struct TerminalDay
{
    id: DayId,
    number: u32,
    hotel: Option<Attraction>,
    restaurants: Vec<Attraction>,
    activities: Vec<Attraction>,
    visible: bool,
    button_visible: bool,
}

impl TerminalDay
{
    pub fn new(day_record: DayRecord, number: u32) -> Self
    {
        Self {
            number,
            hotel: day_record
                .hotel
                .as_ref()
                .map(|hotel| Attraction::from_record(AttractionKind::Hotel, hotel)),
            restaurants: to_attractions(AttractionKind::Restaurant, &day_record.restaurants),
            activities: to_attractions(AttractionKind::Activity, &day_record.activities),
            id: day_record.id,
            visible: false,
            button_visible: true,
        }
    }

    pub fn is_visible(&self) -> bool
    {
        self.visible
    }

    pub fn is_button_visible(&self) -> bool
    {
        self.button_visible
    }

    pub fn hotel(&self) -> Option<&Attraction>
    {
        self.hotel.as_ref()
    }

    pub fn restaurants(&self) -> &[Attraction]
    {
        &self.restaurants
    }

    pub fn activities(&self) -> &[Attraction]
    {
        &self.activities
    }

    fn redraw(&self)
    {
        if self.is_visible() {
            println!("{}", self);
        }
    }
}

impl DayEntity for TerminalDay
{
    type Attraction = Attraction;

    fn id(&self) -> &DayId
    {
        &self.id
    }

    fn number(&self) -> u32
    {
        self.number
    }

    fn show(&mut self)
    {
        self.visible = true;
        self.redraw();
    }

    fn hide(&mut self)
    {
        self.visible = false;
        event!(Level::DEBUG, day_id = %self.id, number = self.number, "day hidden");
    }

    fn set_number(&mut self, number: u32)
    {
        self.number = number;
        self.redraw();
    }

    fn hide_button(&mut self)
    {
        self.button_visible = false;
    }

    fn add_attraction(&mut self, attraction: Attraction)
    {
        let list = match attraction.kind {
            AttractionKind::Hotel => {
                self.hotel = Some(attraction);
                self.redraw();
                return;
            }
            AttractionKind::Restaurant => &mut self.restaurants,
            AttractionKind::Activity => &mut self.activities,
        };

        if list.contains(&attraction) {
            event!(Level::DEBUG, day_id = %self.id, attraction = %attraction, "attraction is already on this day");
            return;
        }
        list.push(attraction);
        self.redraw();
    }

    fn remove_attraction(&mut self, attraction: Attraction)
    {
        match attraction.kind {
            AttractionKind::Hotel => {
                if self.hotel.as_ref() == Some(&attraction) {
                    self.hotel = None;
                }
            }
            AttractionKind::Restaurant => self.restaurants.retain(|a| *a != attraction),
            AttractionKind::Activity => self.activities.retain(|a| *a != attraction),
        }
        self.redraw();
    }
}

impl Display for TerminalDay
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let title = format!("Day {}", self.number);
        let title = title.as_str().bold();
        if self.is_button_visible() {
            writeln!(f, "{} {}", title, "[x remove]".red())?;
        } else {
            writeln!(f, "{}", title)?;
        }

        let hotel = self
            .hotel()
            .map(|hotel| hotel.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(f, "  {:<12} {}", "Hotel", hotel)?;
        writeln!(f, "  {:<12} {}", "Restaurants", join(self.restaurants()))?;
        write!(f, "  {:<12} {}", "Activities", join(self.activities()))
    }
}

fn to_attractions(kind: AttractionKind, attraction_records: &[AttractionRecord]) -> Vec<Attraction>
{
    attraction_records
        .iter()
        .map(|attraction_record| Attraction::from_record(kind, attraction_record))
        .collect()
}

fn join(attractions: &[Attraction]) -> String
{
    if attractions.is_empty() {
        return "-".to_string();
    }
    attractions
        .iter()
        .map(|attraction| attraction.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDayFactory;

impl DayFactory for TerminalDayFactory
{
    type Day = TerminalDay;

    fn create(&self, day_record: DayRecord, number: u32) -> TerminalDay
    {
        TerminalDay::new(day_record, number)
    }
}
