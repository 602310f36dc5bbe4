use itinerary_contracts::DayId;

use crate::error::DayManagerError;
use crate::manager::LoadOutcome;
use crate::manager::RemovalOutcome;
use crate::traits::AttractionMode;

/// Triggers coming from the user interface. `A` is the attraction type of the
/// days behind the manager.
#[derive(Debug, Clone)]
pub enum DayRequestMessage<A>
{
    Load,
    AddDay,
    RemoveCurrentDay,
    SwitchTo(DayId),
    SwitchToNumber(u32),
    Attraction
    {
        attraction: A,
        mode: AttractionMode,
    },
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayResponseMessage
{
    Loaded(LoadOutcome),
    Added(DayId),
    Removed(RemovalOutcome),
    Switched(bool),
    Dispatched(bool),
    Status(DayStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary
{
    pub id: DayId,
    pub number: u32,
}

/// Snapshot of the collection as it is after every message handled so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayStatus
{
    pub days: Vec<DaySummary>,
    pub current: Option<DayId>,
}

pub type DayReply = Result<DayResponseMessage, DayManagerError>;

pub struct DayManagerMessage<A>
{
    pub request: DayRequestMessage<A>,
    pub reply: Option<flume::Sender<DayReply>>,
}
