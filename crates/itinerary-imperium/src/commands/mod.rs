pub mod session;

use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use itinerary_contracts::AttractionKind;
use itinerary_day_manager::AttractionMode;
use itinerary_day_manager::DayManagerError;
use itinerary_day_manager::DayManagerHandle;
use itinerary_day_manager::DayRequestMessage;
use itinerary_day_manager::DayResponseMessage;
use itinerary_day_manager::DayStatus;
use itinerary_day_manager::RemovalOutcome;

use crate::attraction::Attraction;
use crate::options_panel::OptionsPanel;

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(name = "itinerary", no_binary_name = true)]
pub struct SessionLine
{
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand
{
    /// Create a new day at the end of the itinerary
    #[command(visible_alias = "new")]
    AddDay,
    /// Remove the day that is currently shown
    RemoveDay,
    /// Show the day with the given number
    Switch
    {
        number: u32,
    },
    /// List the days of the itinerary
    Days,
    /// List the attractions that can be added
    Options
    {
        kind: Option<AttractionKind>,
    },
    /// Add an attraction from the options to the current day
    Add
    {
        kind: AttractionKind,
        choice: usize,
    },
    /// Remove an attraction from the current day
    Remove
    {
        kind: AttractionKind,
        choice: usize,
    },
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionFlow
{
    Continue,
    Quit,
}

impl SessionLine
{
    /// `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<SessionLine>, clap::Error>
    {
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            return Ok(None);
        }
        SessionLine::try_parse_from(words).map(Some)
    }
}

/// Only a stopped day manager ends the session with an error. Remote failures
/// are already logged by the manager and leave the itinerary as it was.
pub async fn execute(
    session_command: SessionCommand,
    handle: &DayManagerHandle<Attraction>,
    options_panel: &OptionsPanel,
) -> Result<SessionFlow>
{
    let request = match session_command {
        SessionCommand::Quit => return Ok(SessionFlow::Quit),
        SessionCommand::Options { kind } => {
            println!("{}", options_panel.listing(kind));
            return Ok(SessionFlow::Continue);
        }
        SessionCommand::AddDay => DayRequestMessage::AddDay,
        SessionCommand::RemoveDay => DayRequestMessage::RemoveCurrentDay,
        SessionCommand::Switch { number } => DayRequestMessage::SwitchToNumber(number),
        SessionCommand::Days => DayRequestMessage::Status,
        SessionCommand::Add { kind, choice } => {
            match attraction_request(options_panel, kind, choice, AttractionMode::Add) {
                Some(request) => request,
                None => return Ok(SessionFlow::Continue),
            }
        }
        SessionCommand::Remove { kind, choice } => {
            match attraction_request(options_panel, kind, choice, AttractionMode::Remove) {
                Some(request) => request,
                None => return Ok(SessionFlow::Continue),
            }
        }
    };

    match handle.request(request).await {
        Ok(day_response_message) => report(day_response_message),
        Err(DayManagerError::ManagerStopped) => return Err(DayManagerError::ManagerStopped.into()),
        Err(day_manager_error) if day_manager_error.is_remote_failure() => (),
        Err(day_manager_error) => eprintln!("{}", day_manager_error),
    }
    Ok(SessionFlow::Continue)
}

fn attraction_request(
    options_panel: &OptionsPanel,
    kind: AttractionKind,
    choice: usize,
    mode: AttractionMode,
) -> Option<DayRequestMessage<Attraction>>
{
    match options_panel.select(kind, choice) {
        Some(attraction) => Some(DayRequestMessage::Attraction { attraction, mode }),
        None => {
            eprintln!("there is no {} with number {}", kind, choice);
            None
        }
    }
}

fn report(day_response_message: DayResponseMessage)
{
    match day_response_message {
        DayResponseMessage::Removed(RemovalOutcome::Refused) => {
            eprintln!("the last day of an itinerary can not be removed")
        }
        DayResponseMessage::Switched(false) => eprintln!("there is no such day"),
        DayResponseMessage::Dispatched(false) => eprintln!("there is no current day"),
        DayResponseMessage::Status(day_status) => println!("{}", day_listing(&day_status)),
        DayResponseMessage::Loaded(_)
        | DayResponseMessage::Added(_)
        | DayResponseMessage::Removed(_)
        | DayResponseMessage::Switched(true)
        | DayResponseMessage::Dispatched(true) => (),
    }
}

fn day_listing(day_status: &DayStatus) -> String
{
    if day_status.days.is_empty() {
        return "no days".to_string();
    }
    day_status
        .days
        .iter()
        .map(|day_summary| {
            let line = format!("Day {}", day_summary.number);
            if day_status.current.as_ref() == Some(&day_summary.id) {
                format!("{} {}", line.as_str().bold(), "(current)".green())
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
