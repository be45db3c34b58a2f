//! Event bus for notification pushes using tokio::broadcast
//!
//! Provides a publish-subscribe mechanism between the store and the SSE
//! endpoint: every connected client holds its own receiver.

use portal_types::Notification;
use tokio::sync::broadcast;

/// Events emitted by the notification store
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    /// A notification row was inserted
    Created(Notification),
}

/// Event bus for broadcasting notification events
pub struct EventBus {
    sender: broadcast::Sender<NotificationEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (256 events)
    pub fn default_capacity() -> Self {
        Self::new(256)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: NotificationEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::Notification;

    fn notification(id: i64, user_id: i64) -> Notification {
        Notification {
            id,
            user_id,
            message: format!("update {id}"),
            grievance_id: 1,
            is_read: false,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();

        bus.publish(NotificationEvent::Created(notification(1, 42)));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, NotificationEvent::Created(n) if n.id == 1 && n.user_id == 42));
    }

    #[tokio::test]
    async fn test_event_bus_multiple_subscribers() {
        let bus = EventBus::default_capacity();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(NotificationEvent::Created(notification(7, 1)));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();

        assert!(matches!(e1, NotificationEvent::Created(n) if n.id == 7));
        assert!(matches!(e2, NotificationEvent::Created(n) if n.id == 7));
    }

    #[test]
    fn test_event_bus_no_subscribers_ok() {
        let bus = EventBus::default_capacity();
        // Should not panic even with no subscribers
        bus.publish(NotificationEvent::Created(notification(1, 1)));
    }
}
