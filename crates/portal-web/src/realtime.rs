//! Realtime notification stream over Server-Sent Events
//!
//! One EventSource per subscribing scope, closed on cleanup so an unmounted
//! header never leaks its channel.

use leptos::prelude::*;
use portal_types::Notification;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, EventSource, MessageEvent};

/// Parse an SSE payload into a notification row
pub fn parse_notification_event(event_type: &str, data: &str) -> Option<Notification> {
    match event_type {
        "notification_created" => serde_json::from_str::<Notification>(data).ok(),
        _ => None,
    }
}

/// Subscribe to newly inserted notifications for the signed-in user.
///
/// Must be called within a reactive scope: the EventSource is stored for the
/// lifetime of that scope and explicitly closed when it is disposed. The
/// browser handles reconnection while the scope is alive.
pub fn use_notification_stream(on_insert: Callback<Notification>) {
    let source = match EventSource::new("/api/events") {
        Ok(es) => es,
        Err(e) => {
            leptos::logging::error!("Failed to open notification stream: {:?}", e);
            return;
        }
    };

    let on_open = Closure::wrap(Box::new(move |_: web_sys::Event| {
        leptos::logging::log!("Notification stream connected");
    }) as Box<dyn FnMut(_)>);
    source.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    on_open.forget();

    // EventSource reconnects on its own; errors are only logged
    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        leptos::logging::warn!("Notification stream error: {:?}", e.message());
    }) as Box<dyn FnMut(_)>);
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    let callback = Closure::wrap(Box::new(move |event: MessageEvent| {
        let data = event.data().as_string().unwrap_or_default();
        if let Some(notification) = parse_notification_event("notification_created", &data) {
            on_insert.run(notification);
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = source
        .add_event_listener_with_callback("notification_created", callback.as_ref().unchecked_ref())
    {
        leptos::logging::error!("Failed to add notification listener: {:?}", e);
    }
    callback.forget();

    // Structured teardown: release the channel when the scope is disposed
    on_cleanup(move || source.close());
}
