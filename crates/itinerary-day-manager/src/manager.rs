use itinerary_contracts::DayId;
use itinerary_contracts::DayRecord;
use tracing::Level;
use tracing::event;
use tracing::instrument;

use crate::error::DayManagerError;
use crate::error::RemoteOperation;
use crate::messages::DayStatus;
use crate::messages::DaySummary;
use crate::traits::AttractionMode;
use crate::traits::AttractionOf;
use crate::traits::DayEntity;
use crate::traits::DayFactory;
use crate::traits::RemoteDayStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome
{
    /// The store had days; this many were appended.
    Loaded(usize),
    /// The store was empty and this day was created so that there is one.
    Seeded(DayId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome
{
    Removed
    {
        removed: DayId,
        current: DayId,
    },
    /// There was no current day or it was the only day left.
    Refused,
}

/// Holds the days of the itinerary in order together with the current day.
///
/// Invariants after every operation:
/// * the day at index `i` has number `i + 1`
/// * when there are days, exactly one of them is current
/// * once there are days, there is always at least one
///
/// The local state is only changed after the store has answered, so a failed
/// remote call leaves the collection exactly as it was.
pub struct DayCollectionManager<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    store: S,
    factory: F,
    days: Vec<F::Day>,
    current: Option<usize>,
}

impl<S, F> DayCollectionManager<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    pub fn new(store: S, factory: F) -> Self
    {
        Self {
            store,
            factory,
            days: Vec::new(),
            current: None,
        }
    }

    /// Fetches every day from the store. An empty store gets a first day so
    /// the itinerary is never shown without one. Loading again only appends
    /// days that are not known yet and keeps the current day.
    #[instrument(level = "info", skip_all)]
    pub async fn load(&mut self) -> Result<LoadOutcome, DayManagerError>
    {
        let day_records = self
            .store
            .list_days()
            .await
            .map_err(|source| remote_failure(RemoteOperation::ListDays, source))?;

        if day_records.is_empty() && self.days.is_empty() {
            event!(Level::INFO, "remote store has no days, creating the first one");
            let day_id = self.add_day().await?;
            return Ok(LoadOutcome::Seeded(day_id));
        }

        let mut appended = 0;
        for day_record in day_records {
            if self.position(&day_record.id).is_some() {
                event!(
                    Level::WARN,
                    day_id = %day_record.id,
                    "remote store listed the same day twice, skipping it"
                );
                continue;
            }
            let day = self.create_day(day_record);
            self.days.push(day);
            appended += 1;
        }

        if self.current.is_none() && !self.days.is_empty() {
            self.switch_to_index(0);
        }

        event!(Level::INFO, days = appended, "loaded days from the remote store");
        Ok(LoadOutcome::Loaded(appended))
    }

    /// Creates a day in the store and appends it as the last day. The current
    /// day only changes when the new day is the first one.
    #[instrument(level = "info", skip_all)]
    pub async fn add_day(&mut self) -> Result<DayId, DayManagerError>
    {
        let day_record = self
            .store
            .create_day()
            .await
            .map_err(|source| remote_failure(RemoteOperation::CreateDay, source))?;

        if self.position(&day_record.id).is_some() {
            let error = DayManagerError::DuplicateDay(day_record.id);
            event!(Level::ERROR, error = %error, "rejected day from the remote store");
            return Err(error);
        }

        let day_id = day_record.id.clone();
        let day = self.create_day(day_record);
        self.days.push(day);

        if self.current.is_none() {
            self.switch_to_index(self.days.len() - 1);
        }

        event!(Level::INFO, day_id = %day_id, days = self.days.len(), "added day");
        Ok(day_id)
    }

    /// Deletes the current day in the store and then locally. The day that
    /// slides into its place becomes current, or the previous day when the
    /// last day was removed.
    #[instrument(level = "info", skip_all)]
    pub async fn remove_current_day(&mut self) -> Result<RemovalOutcome, DayManagerError>
    {
        let Some(current_index) = self.current else {
            return Ok(RemovalOutcome::Refused);
        };
        if self.days.len() < 2 {
            event!(Level::DEBUG, "refusing to remove the only day");
            return Ok(RemovalOutcome::Refused);
        }

        let removed_id = self.days[current_index].id().clone();

        self.store
            .delete_day(&removed_id)
            .await
            .map_err(|source| remote_failure(RemoteOperation::DeleteDay, source))?;

        // `&mut self` is held across the delete, so nothing has moved since
        // `current_index` was read.
        let mut removed_day = self.days.remove(current_index);
        let new_index = if current_index < self.days.len() {
            current_index
        } else {
            current_index - 1
        };

        self.renumber();

        removed_day.hide();
        self.current = Some(new_index);
        self.days[new_index].show();
        removed_day.hide_button();

        let current_id = self.days[new_index].id().clone();
        event!(
            Level::INFO,
            removed = %removed_id,
            current = %current_id,
            days = self.days.len(),
            "removed day"
        );
        Ok(RemovalOutcome::Removed {
            removed: removed_id,
            current: current_id,
        })
    }

    /// Makes the day with `day_id` current. Switching to the day that is
    /// already current hides and shows it again. Returns `false` when no such
    /// day is in the collection.
    pub fn switch_to(&mut self, day_id: &DayId) -> bool
    {
        match self.position(day_id) {
            Some(index) => {
                self.switch_to_index(index);
                true
            }
            None => {
                event!(Level::WARN, day_id = %day_id, "can not switch to a day that is not in the itinerary");
                false
            }
        }
    }

    /// Same as [`Self::switch_to`] but addresses the day by its number.
    pub fn switch_to_number(&mut self, number: u32) -> bool
    {
        let index = (number as usize).checked_sub(1);
        match index.filter(|index| *index < self.days.len()) {
            Some(index) => {
                self.switch_to_index(index);
                true
            }
            None => {
                event!(Level::WARN, number, days = self.days.len(), "there is no day with that number");
                false
            }
        }
    }

    /// Hands the attraction to the current day. Without a current day nothing
    /// happens and `false` is returned.
    pub fn dispatch_attraction(&mut self, attraction: AttractionOf<F>, mode: AttractionMode)
    -> bool
    {
        let Some(current_index) = self.current else {
            event!(Level::WARN, ?mode, "no current day to hand the attraction to");
            return false;
        };

        let day = &mut self.days[current_index];
        match mode {
            AttractionMode::Add => day.add_attraction(attraction),
            AttractionMode::Remove => day.remove_attraction(attraction),
        }
        true
    }

    pub fn add_to_current(&mut self, attraction: AttractionOf<F>) -> bool
    {
        self.dispatch_attraction(attraction, AttractionMode::Add)
    }

    pub fn remove_from_current(&mut self, attraction: AttractionOf<F>) -> bool
    {
        self.dispatch_attraction(attraction, AttractionMode::Remove)
    }

    pub fn days(&self) -> &[F::Day]
    {
        &self.days
    }

    pub fn current_index(&self) -> Option<usize>
    {
        self.current
    }

    pub fn current_day(&self) -> Option<&F::Day>
    {
        self.current.map(|index| &self.days[index])
    }

    pub fn len(&self) -> usize
    {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.days.is_empty()
    }

    pub fn status(&self) -> DayStatus
    {
        DayStatus {
            days: self
                .days
                .iter()
                .map(|day| DaySummary {
                    id: day.id().clone(),
                    number: day.number(),
                })
                .collect(),
            current: self.current_day().map(|day| day.id().clone()),
        }
    }

    fn switch_to_index(&mut self, index: usize)
    {
        if let Some(current_index) = self.current {
            self.days[current_index].hide();
        }
        self.current = Some(index);
        self.days[index].show();
    }

    fn create_day(&self, day_record: DayRecord) -> F::Day
    {
        let number = position_number(self.days.len());
        if let Some(remote_number) = day_record.number.filter(|n| *n != number) {
            event!(
                Level::WARN,
                day_id = %day_record.id,
                remote_number,
                number,
                "remote store numbers the day differently, using its position"
            );
        }
        self.factory.create(day_record, number)
    }

    fn renumber(&mut self)
    {
        for (index, day) in self.days.iter_mut().enumerate() {
            day.set_number(position_number(index));
        }
    }

    fn position(&self, day_id: &DayId) -> Option<usize>
    {
        self.days.iter().position(|day| day.id() == day_id)
    }
}

/// Saturates at `u32::MAX`; an itinerary never holds that many days.
fn position_number(index: usize) -> u32
{
    u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX)
}

fn remote_failure(operation: RemoteOperation, source: anyhow::Error) -> DayManagerError
{
    event!(
        Level::ERROR,
        %operation,
        error = format!("{:#}", source),
        "remote day store failed"
    );
    DayManagerError::RemoteFailure { operation, source }
}
