//! Server-Sent Events for notification pushes

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use portal_core::{EventBus, NotificationEvent};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Create an SSE stream scoped to one user's notifications
///
/// Takes the EventBus by value (cheap clone, channel handle internally) and
/// drops events belonging to other users before they reach the wire.
pub fn create_notification_stream(
    event_bus: EventBus,
    user_id: i64,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = event_bus.subscribe();
    let stream = BroadcastStream::new(rx);

    let sse_stream = stream.filter_map(move |result| {
        result.ok().and_then(|event| {
            let NotificationEvent::Created(notification) = event;
            if notification.user_id != user_id {
                return None;
            }

            let data = serde_json::to_string(&notification).unwrap_or_else(|_| "{}".to_string());
            Some(Ok(Event::default().event("notification_created").data(data)))
        })
    });

    Sse::new(sse_stream).keep_alive(KeepAlive::default())
}
