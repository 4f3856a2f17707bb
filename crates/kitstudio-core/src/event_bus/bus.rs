//! Event bus owned by a configurator.
//!
//! Handlers run synchronously on the publishing thread; async consumers
//! take a broadcast receiver instead. An optional log keeps the most recent
//! events with sequence numbers so a late consumer can catch up.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.0.simple().to_string();
        write!(f, "sub-{}", &id[..8])
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

impl From<EventCategory> for EventFilter {
    fn from(category: EventCategory) -> Self {
        EventFilter::Categories(vec![category])
    }
}

/// Bus tuning
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Capacity of the broadcast channel; slow receivers lag past it.
    pub channel_capacity: usize,
    /// Keep a log of published events.
    pub enable_history: bool,
    /// Maximum number of logged events.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            max_history_size: 100,
        }
    }
}

/// A logged event and its position in the publish order
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    /// Zero-based publish sequence number; keeps counting after eviction.
    pub seq: u64,
    pub event: AppEvent,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither a handler nor a receiver is attached
    #[error("No active subscribers")]
    NoSubscribers,
}

type Handler = Box<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscriber {
    filter: EventFilter,
    handler: Handler,
}

#[derive(Default)]
struct EventLog {
    entries: VecDeque<RecordedEvent>,
    next_seq: u64,
}

/// Carries configurator events to renderers and UI widgets
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscribers: RwLock<HashMap<SubscriptionId, Subscriber>>,
    log: Mutex<EventLog>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            subscribers: RwLock::new(HashMap::new()),
            log: Mutex::new(EventLog::default()),
            config,
        }
    }

    /// Delivers `event` to matching handlers, then to every receiver.
    ///
    /// Returns how many handlers and receivers got the event, or
    /// [`EventBusError::NoSubscribers`] when nothing is attached. Handlers
    /// must not subscribe or unsubscribe from inside the callback.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        if self.config.enable_history {
            self.record(&event);
        }

        let (handled, attached) = {
            let subscribers = self.subscribers.read();
            let mut handled = 0;
            for subscriber in subscribers.values() {
                if subscriber.filter.matches(&event) {
                    (subscriber.handler)(&event);
                    handled += 1;
                }
            }
            (handled, !subscribers.is_empty())
        };

        match self.sender.send(event) {
            Ok(receivers) => Ok(handled + receivers),
            Err(_) if attached => Ok(handled),
            Err(_) => Err(EventBusError::NoSubscribers),
        }
    }

    /// Registers `handler` for events matching `filter`.
    pub fn subscribe<F>(&self, filter: impl Into<EventFilter>, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().insert(
            id,
            Subscriber {
                filter: filter.into(),
                handler: Box::new(handler),
            },
        );
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Receiver for async consumers, e.g. a renderer task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Returns true if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Logged events with a sequence number greater than `after`, or all of them.
    ///
    /// Always empty when history is disabled.
    pub fn history(&self, after: Option<u64>) -> Vec<RecordedEvent> {
        let log = self.log.lock();
        log.entries
            .iter()
            .filter(|e| after.is_none_or(|seq| e.seq > seq))
            .cloned()
            .collect()
    }

    pub fn clear_history(&self) {
        self.log.lock().entries.clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &AppEvent) {
        let mut log = self.log.lock();
        let seq = log.next_seq;
        log.next_seq += 1;
        tracing::trace!("Event #{}: {}", seq, event.description());
        log.entries.push_back(RecordedEvent {
            seq,
            event: event.clone(),
        });
        while log.entries.len() > self.config.max_history_size {
            log.entries.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{FillEvent, LinkEvent, ProductEvent};
    use crate::types::{Area, HexColor};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn color_event() -> AppEvent {
        AppEvent::Fill(FillEvent::ColorChanged {
            area: Area::new("front"),
            color: HexColor::white(),
            propagated_to: vec![],
        })
    }

    fn counter(bus: &EventBus, filter: impl Into<EventFilter>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        bus.subscribe(filter, move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();
        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);
        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_subscription_id_display() {
        let bus = EventBus::new();
        let id = bus.subscribe(EventFilter::All, |_| {});
        let shown = id.to_string();
        assert!(shown.starts_with("sub-"));
        assert_eq!(shown.len(), 12);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert!(matches!(
            bus.publish(color_event()),
            Err(EventBusError::NoSubscribers)
        ));
    }

    #[test]
    fn test_publish_counts_handlers_and_receivers() {
        let bus = EventBus::new();
        let count = counter(&bus, EventFilter::All);
        let _rx = bus.receiver();

        assert_eq!(bus.publish(color_event()).unwrap(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_matching_handler_is_not_counted() {
        let bus = EventBus::new();
        let links = counter(&bus, EventCategory::Link);

        assert_eq!(bus.publish(color_event()).unwrap(), 0);
        assert_eq!(links.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let fills = counter(&bus, EventCategory::Fill);
        let links = counter(&bus, EventCategory::Link);
        let both = counter(
            &bus,
            EventFilter::Categories(vec![EventCategory::Fill, EventCategory::Link]),
        );

        bus.publish(color_event()).ok();
        bus.publish(AppEvent::Link(LinkEvent::Unlinked {
            source: Area::new("front"),
        }))
        .ok();
        bus.publish(AppEvent::Product(ProductEvent::Reset)).ok();

        assert_eq!(fills.load(Ordering::SeqCst), 1);
        assert_eq!(links.load(Ordering::SeqCst), 1);
        assert_eq!(both.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_history_is_bounded_and_sequenced() {
        let bus = EventBus::with_config(EventBusConfig {
            enable_history: true,
            max_history_size: 5,
            ..Default::default()
        });

        for _ in 0..10 {
            bus.publish(color_event()).ok();
        }
        let history = bus.history(None);
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].seq, 5);
        assert_eq!(history[4].seq, 9);

        let tail = bus.history(Some(7));
        assert_eq!(tail.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![8, 9]);

        bus.clear_history();
        assert!(bus.history(None).is_empty());
        bus.publish(color_event()).ok();
        assert_eq!(bus.history(None)[0].seq, 10);
    }

    #[test]
    fn test_history_disabled_by_default() {
        let bus = EventBus::new();
        bus.publish(color_event()).ok();
        assert!(bus.history(None).is_empty());
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        bus.publish(color_event()).ok();

        match receiver.recv().await {
            Ok(AppEvent::Fill(FillEvent::ColorChanged { area, .. })) => {
                assert_eq!(area.as_str(), "front");
            }
            other => panic!("Wrong event received: {:?}", other),
        }
    }
}
