use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use anyhow::Result;
use anyhow::bail;
use itinerary_contracts::DayId;
use itinerary_contracts::DayRecord;
use tracing::Event;
use tracing::Level;
use tracing::Subscriber;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::prelude::*;

use crate::error::RemoteOperation;
use crate::traits::DayEntity;
use crate::traits::DayFactory;
use crate::traits::RemoteDayStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall
{
    List,
    Create,
    Delete(DayId),
}

#[derive(Default)]
struct FakeDayStoreState
{
    days: Vec<DayRecord>,
    next_id: u64,
    next_created_ids: VecDeque<DayId>,
    failing: HashSet<RemoteOperation>,
    calls: Vec<StoreCall>,
    create_gate: Option<flume::Receiver<()>>,
}

/// In-memory store. Clones share their state so a test can keep one and
/// hand the other to the manager.
#[derive(Clone, Default)]
pub struct FakeDayStore
{
    state: Arc<Mutex<FakeDayStoreState>>,
}

impl FakeDayStore
{
    pub fn with_days(ids: &[&str]) -> Self
    {
        Self::with_records(ids.iter().map(|id| DayRecord::new(*id)).collect())
    }

    pub fn with_records(day_records: Vec<DayRecord>) -> Self
    {
        let fake_day_store = Self::default();
        fake_day_store.state.lock().unwrap().days = day_records;
        fake_day_store
    }

    pub fn set_failing(&self, remote_operation: RemoteOperation, failing: bool)
    {
        let mut state = self.state.lock().unwrap();
        if failing {
            state.failing.insert(remote_operation);
        } else {
            state.failing.remove(&remote_operation);
        }
    }

    pub fn next_created_id(&self, id: &str)
    {
        self.state
            .lock()
            .unwrap()
            .next_created_ids
            .push_back(DayId::from(id));
    }

    /// Every `create_day` waits for one message on the returned sender.
    pub fn gate_creates(&self) -> flume::Sender<()>
    {
        let (sender, receiver) = flume::unbounded();
        self.state.lock().unwrap().create_gate = Some(receiver);
        sender
    }

    pub fn calls(&self) -> Vec<StoreCall>
    {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn create_calls(&self) -> usize
    {
        self.calls()
            .iter()
            .filter(|call| **call == StoreCall::Create)
            .count()
    }

    fn record(&self, store_call: StoreCall, remote_operation: RemoteOperation) -> Result<()>
    {
        let mut state = self.state.lock().unwrap();
        state.calls.push(store_call);
        if state.failing.contains(&remote_operation) {
            bail!("connection refused while trying to {}", remote_operation);
        }
        Ok(())
    }
}

impl RemoteDayStore for FakeDayStore
{
    async fn list_days(&self) -> Result<Vec<DayRecord>>
    {
        self.record(StoreCall::List, RemoteOperation::ListDays)?;
        Ok(self.state.lock().unwrap().days.clone())
    }

    async fn create_day(&self) -> Result<DayRecord>
    {
        let create_gate = self.state.lock().unwrap().create_gate.clone();
        self.record(StoreCall::Create, RemoteOperation::CreateDay)?;
        if let Some(create_gate) = create_gate {
            create_gate.recv_async().await?;
        }

        let mut state = self.state.lock().unwrap();
        let day_id = match state.next_created_ids.pop_front() {
            Some(day_id) => day_id,
            None => {
                state.next_id += 1;
                DayId::from(format!("created-{}", state.next_id))
            }
        };
        let day_record = DayRecord::new(day_id);
        state.days.push(day_record.clone());
        Ok(day_record)
    }

    async fn delete_day(&self, day_id: &DayId) -> Result<()>
    {
        self.record(StoreCall::Delete(day_id.clone()), RemoteOperation::DeleteDay)?;
        self.state
            .lock()
            .unwrap()
            .days
            .retain(|day_record| &day_record.id != day_id);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEvent
{
    Show(DayId),
    Hide(DayId),
    SetNumber(DayId, u32),
    HideButton(DayId),
}

pub type Journal = Arc<Mutex<Vec<DayEvent>>>;

pub struct RecordingDay
{
    id: DayId,
    number: u32,
    visible: bool,
    attractions: Vec<&'static str>,
    journal: Journal,
}

impl RecordingDay
{
    pub fn is_visible(&self) -> bool
    {
        self.visible
    }

    pub fn attractions(&self) -> &[&'static str]
    {
        &self.attractions
    }

    fn log(&self, day_event: DayEvent)
    {
        self.journal.lock().unwrap().push(day_event);
    }
}

impl DayEntity for RecordingDay
{
    type Attraction = &'static str;

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
        self.log(DayEvent::Show(self.id.clone()));
    }

    fn hide(&mut self)
    {
        self.visible = false;
        self.log(DayEvent::Hide(self.id.clone()));
    }

    fn set_number(&mut self, number: u32)
    {
        self.number = number;
        self.log(DayEvent::SetNumber(self.id.clone(), number));
    }

    fn hide_button(&mut self)
    {
        self.log(DayEvent::HideButton(self.id.clone()));
    }

    fn add_attraction(&mut self, attraction: Self::Attraction)
    {
        self.attractions.push(attraction);
    }

    fn remove_attraction(&mut self, attraction: Self::Attraction)
    {
        self.attractions.retain(|a| *a != attraction);
    }
}

#[derive(Clone, Default)]
pub struct RecordingDayFactory
{
    journal: Journal,
}

impl RecordingDayFactory
{
    pub fn journal(&self) -> Vec<DayEvent>
    {
        self.journal.lock().unwrap().clone()
    }

    pub fn clear_journal(&self)
    {
        self.journal.lock().unwrap().clear();
    }
}

impl DayFactory for RecordingDayFactory
{
    type Day = RecordingDay;

    fn create(&self, day_record: DayRecord, number: u32) -> RecordingDay
    {
        RecordingDay {
            id: day_record.id,
            number,
            visible: false,
            attractions: Vec::new(),
            journal: Arc::clone(&self.journal),
        }
    }
}

/// Counts the ERROR events emitted on the current thread while the returned
/// guard is alive. `#[tokio::test]` runs on one thread, so events from tasks
/// spawned by the test are counted too.
#[derive(Clone, Default)]
pub struct ErrorEventCounter
{
    count: Arc<AtomicUsize>,
}

impl ErrorEventCounter
{
    pub fn install() -> (ErrorEventCounter, DefaultGuard)
    {
        let error_event_counter = ErrorEventCounter::default();
        let default_guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(error_event_counter.clone()),
        );
        (error_event_counter, default_guard)
    }

    pub fn count(&self) -> usize
    {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S> Layer<S> for ErrorEventCounter
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>)
    {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
