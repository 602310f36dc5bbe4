use std::collections::VecDeque;

use anyhow::Context;
use anyhow::Result;
use flume::Receiver;
use flume::Sender;
use itinerary_configuration::AddDayPolicy;
use itinerary_contracts::DayId;
use tokio::task::JoinHandle;
use tracing::Level;
use tracing::event;

use crate::error::DayManagerError;
use crate::manager::DayCollectionManager;
use crate::messages::DayManagerMessage;
use crate::messages::DayReply;
use crate::messages::DayRequestMessage;
use crate::messages::DayResponseMessage;
use crate::traits::AttractionOf;
use crate::traits::DayFactory;
use crate::traits::RemoteDayStore;

/// Owns a [`DayCollectionManager`] and applies the messages from its queue
/// one at a time. Add and remove each await the store before the next message
/// is looked at, so the collection never changes shape while a remote call
/// is outstanding.
pub struct DayManagerActor<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    manager: DayCollectionManager<S, F>,
    receiver: Receiver<DayManagerMessage<AttractionOf<F>>>,
    add_day_policy: AddDayPolicy,
    backlog: VecDeque<DayManagerMessage<AttractionOf<F>>>,
}

impl<S, F> DayManagerActor<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    pub fn builder() -> DayManagerActorBuilder<S, F>
    {
        DayManagerActorBuilder {
            manager: None,
            add_day_policy: AddDayPolicy::default(),
        }
    }

    pub async fn run(mut self)
    {
        event!(Level::INFO, add_day_policy = ?self.add_day_policy, "day manager started");

        while let Some(day_manager_message) = self.next_message().await {
            self.handle(day_manager_message).await;
        }

        event!(Level::INFO, "every handle is dropped, day manager stops");
    }

    async fn next_message(&mut self) -> Option<DayManagerMessage<AttractionOf<F>>>
    {
        if let Some(day_manager_message) = self.backlog.pop_front() {
            return Some(day_manager_message);
        }
        self.receiver.recv_async().await.ok()
    }

    async fn handle(&mut self, day_manager_message: DayManagerMessage<AttractionOf<F>>)
    {
        let DayManagerMessage { request, reply } = day_manager_message;

        let day_reply = match request {
            DayRequestMessage::Load => self.manager.load().await.map(DayResponseMessage::Loaded),
            DayRequestMessage::AddDay => {
                let day_reply = self.manager.add_day().await.map(DayResponseMessage::Added);
                if let (AddDayPolicy::Coalesce, Ok(DayResponseMessage::Added(day_id))) =
                    (self.add_day_policy, &day_reply)
                {
                    self.coalesce_queued_adds(day_id);
                }
                day_reply
            }
            DayRequestMessage::RemoveCurrentDay => self
                .manager
                .remove_current_day()
                .await
                .map(DayResponseMessage::Removed),
            DayRequestMessage::SwitchTo(day_id) => {
                Ok(DayResponseMessage::Switched(self.manager.switch_to(&day_id)))
            }
            DayRequestMessage::SwitchToNumber(number) => Ok(DayResponseMessage::Switched(
                self.manager.switch_to_number(number),
            )),
            DayRequestMessage::Attraction { attraction, mode } => Ok(
                DayResponseMessage::Dispatched(self.manager.dispatch_attraction(attraction, mode)),
            ),
            DayRequestMessage::Status => Ok(DayResponseMessage::Status(self.manager.status())),
        };

        reply_to(reply, day_reply);
    }

    /// Answers the add triggers that queued up while `day_id` was being
    /// created with that same day. Stops at the first message that is not an
    /// add so the order of everything else is kept.
    fn coalesce_queued_adds(&mut self, day_id: &DayId)
    {
        self.backlog.extend(self.receiver.try_iter());

        let mut coalesced = 0;
        while self
            .backlog
            .front()
            .is_some_and(|queued| matches!(queued.request, DayRequestMessage::AddDay))
        {
            if let Some(queued) = self.backlog.pop_front() {
                reply_to(queued.reply, Ok(DayResponseMessage::Added(day_id.clone())));
                coalesced += 1;
            }
        }

        if coalesced > 0 {
            event!(Level::DEBUG, day_id = %day_id, coalesced, "folded queued add triggers into one day");
        }
    }
}

fn reply_to(reply: Option<Sender<DayReply>>, day_reply: DayReply)
{
    if let Some(reply) = reply {
        if reply.send(day_reply).is_err() {
            event!(Level::DEBUG, "requester stopped waiting for the reply");
        }
    }
}

pub struct DayManagerActorBuilder<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    manager: Option<DayCollectionManager<S, F>>,
    add_day_policy: AddDayPolicy,
}

impl<S, F> DayManagerActorBuilder<S, F>
where
    S: RemoteDayStore,
    F: DayFactory,
{
    pub fn manager(mut self, manager: DayCollectionManager<S, F>) -> Self
    {
        self.manager = Some(manager);
        self
    }

    pub fn add_day_policy(mut self, add_day_policy: AddDayPolicy) -> Self
    {
        self.add_day_policy = add_day_policy;
        self
    }

    /// Spawns the actor on the current tokio runtime. The actor stops when the
    /// last handle is dropped.
    pub fn build(self) -> Result<(DayManagerHandle<AttractionOf<F>>, JoinHandle<()>)>
    {
        let manager = self
            .manager
            .context("A DayManagerActor can not be built without a DayCollectionManager")?;

        let (sender, receiver) = flume::unbounded();

        let day_manager_actor = DayManagerActor {
            manager,
            receiver,
            add_day_policy: self.add_day_policy,
            backlog: VecDeque::new(),
        };

        let join_handle = tokio::spawn(day_manager_actor.run());

        Ok((DayManagerHandle { sender }, join_handle))
    }
}

/// Sending side of the manager queue, handed to everything that triggers a
/// change of the itinerary.
pub struct DayManagerHandle<A>
{
    sender: Sender<DayManagerMessage<A>>,
}

impl<A> Clone for DayManagerHandle<A>
{
    fn clone(&self) -> Self
    {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A> DayManagerHandle<A>
{
    /// Queues a request without waiting for it to be applied.
    pub fn send(&self, request: DayRequestMessage<A>) -> Result<(), DayManagerError>
    {
        self.sender
            .send(DayManagerMessage {
                request,
                reply: None,
            })
            .map_err(|_| DayManagerError::ManagerStopped)
    }

    /// Queues a request and returns the receiver its reply will arrive on.
    /// The request is in the queue when this returns.
    pub fn dispatch(
        &self,
        request: DayRequestMessage<A>,
    ) -> Result<Receiver<DayReply>, DayManagerError>
    {
        let (reply, receiver) = flume::bounded(1);
        self.sender
            .send(DayManagerMessage {
                request,
                reply: Some(reply),
            })
            .map_err(|_| DayManagerError::ManagerStopped)?;
        Ok(receiver)
    }

    pub async fn request(&self, request: DayRequestMessage<A>) -> DayReply
    {
        let receiver = self.dispatch(request)?;
        receiver
            .recv_async()
            .await
            .map_err(|_| DayManagerError::ManagerStopped)?
    }
}
