//! Dialogue state broadcast
//!
//! The dialogue UI publishes start/end on a [`DialogueChannel`]; movement and
//! camera listeners mirror the state into a [`DialogueFlag`] so they can
//! suppress input while a conversation is open.
//!
//! Everything here is single-threaded. Callbacks run synchronously inside
//! `publish_*` and may subscribe or unsubscribe freely.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::DialogueError;

type Callback = Rc<dyn Fn()>;

/// Handle returned by [`DialogueChannel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    on_start: Callback,
    on_end: Callback,
}

#[derive(Clone, Copy)]
enum DialogueEvent {
    Start,
    End,
}

/// Publish/subscribe broadcaster for dialogue start and end.
///
/// One channel lives per scene, shared as `Rc<DialogueChannel>`; listeners
/// keep a `Weak` so a scene reload drops it cleanly.
#[derive(Default)]
pub struct DialogueChannel {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

impl DialogueChannel {
    /// Create a new channel ready to be shared
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a pair of callbacks. Dispatch follows registration order.
    pub fn subscribe(
        &self,
        on_start: impl Fn() + 'static,
        on_end: impl Fn() + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.subscribers.borrow_mut().push(Subscriber {
            id,
            on_start: Rc::new(on_start),
            on_end: Rc::new(on_end),
        });
        debug!(id = id.0, "dialogue listener subscribed");
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;
        if removed {
            debug!(id = id.0, "dialogue listener unsubscribed");
        }
        removed
    }

    /// Whether a subscription is still registered
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow().iter().any(|s| s.id == id)
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Tell every listener a dialogue has opened
    pub fn publish_start(&self) {
        self.publish(DialogueEvent::Start);
    }

    /// Tell every listener the dialogue has closed
    pub fn publish_end(&self) {
        self.publish(DialogueEvent::End);
    }

    fn publish(&self, event: DialogueEvent) {
        // Snapshot so callbacks can change the subscriber list
        let snapshot: Vec<(SubscriptionId, Callback)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| {
                let callback = match event {
                    DialogueEvent::Start => Rc::clone(&s.on_start),
                    DialogueEvent::End => Rc::clone(&s.on_end),
                };
                (s.id, callback)
            })
            .collect();

        for (id, callback) in snapshot {
            // Skip anyone removed earlier in this broadcast
            if self.is_subscribed(id) {
                callback();
            }
        }
    }
}

/// Shared "dialogue is open" mirror kept current by a channel subscription
#[derive(Debug, Clone, Default)]
pub struct DialogueFlag(Rc<Cell<bool>>);

impl DialogueFlag {
    /// Create a flag that starts outside dialogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dialogue is currently open
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Subscribe this flag to a channel.
    ///
    /// Fails if the channel has already been dropped, so a listener never
    /// runs silently out of sync with the rest of the scene.
    pub fn listen(
        &self,
        channel: &Weak<DialogueChannel>,
    ) -> Result<DialogueSubscription, DialogueError> {
        let live = channel.upgrade().ok_or(DialogueError::ChannelMissing)?;

        let on_start = Rc::clone(&self.0);
        let on_end = Rc::clone(&self.0);
        let id = live.subscribe(move || on_start.set(true), move || on_end.set(false));

        Ok(DialogueSubscription {
            channel: Weak::clone(channel),
            id,
        })
    }
}

/// Keeps a listener registered; unsubscribes when dropped
pub struct DialogueSubscription {
    channel: Weak<DialogueChannel>,
    id: SubscriptionId,
}

impl Drop for DialogueSubscription {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.upgrade() {
            channel.unsubscribe(self.id);
        }
    }
}
