use std::fmt::Display;
use std::fmt::{self};

use itinerary_contracts::DayId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation
{
    ListDays,
    CreateDay,
    DeleteDay,
}

impl Display for RemoteOperation
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            RemoteOperation::ListDays => write!(f, "list days"),
            RemoteOperation::CreateDay => write!(f, "create day"),
            RemoteOperation::DeleteDay => write!(f, "delete day"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DayManagerError
{
    #[error("remote day store could not {operation}")]
    RemoteFailure
    {
        operation: RemoteOperation,
        #[source]
        source: anyhow::Error,
    },
    #[error("remote day store returned day {0} which is already in the itinerary")]
    DuplicateDay(DayId),
    #[error("the day manager is no longer running")]
    ManagerStopped,
}

impl DayManagerError
{
    pub fn is_remote_failure(&self) -> bool
    {
        matches!(self, DayManagerError::RemoteFailure { .. })
    }
}
