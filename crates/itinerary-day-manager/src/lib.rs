//! The day collection of a trip itinerary.
//!
//! [`DayCollectionManager`] owns the ordered days and the current-day
//! selection and only changes them after the [`RemoteDayStore`] has confirmed
//! a create or delete. [`DayManagerActor`] puts the manager behind a queue so
//! that every trigger coming from the user interface is applied one at a time.
pub mod actor;
pub mod error;
pub mod manager;
pub mod messages;
pub mod traits;

#[cfg(test)]
mod testing;

pub use actor::DayManagerActor;
pub use actor::DayManagerHandle;
pub use error::DayManagerError;
pub use error::RemoteOperation;
pub use manager::DayCollectionManager;
pub use manager::LoadOutcome;
pub use manager::RemovalOutcome;
pub use messages::DayRequestMessage;
pub use messages::DayResponseMessage;
pub use messages::DayStatus;
pub use traits::AttractionCatalog;
pub use traits::AttractionMode;
pub use traits::AttractionOf;
pub use traits::DayEntity;
pub use traits::DayFactory;
pub use traits::RemoteDayStore;
