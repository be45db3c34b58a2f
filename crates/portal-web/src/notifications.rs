//! Notification state for the header: parent-owned or self-managed
//!
//! The header is polymorphic over its notification source. When the caller
//! supplies an `ExternalNotifications` bundle the header is a pure display
//! shell and performs no network or channel activity; otherwise it
//! provisions its own session-gated fetch and realtime subscription.

use crate::api;
use crate::realtime::use_notification_stream;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_types::Notification;

/// Parent-owned notification state and handlers (display-only mode)
#[derive(Clone)]
pub struct ExternalNotifications {
    pub items: Signal<Vec<Notification>>,
    pub dropdown_open: Signal<bool>,
    pub on_toggle: Callback<()>,
    pub on_mark_read: Callback<i64>,
}

/// Uniform surface the header renders against, whichever side owns the state
#[derive(Clone)]
pub struct NotificationsHandle {
    pub items: Signal<Vec<Notification>>,
    pub dropdown_open: Signal<bool>,
    pub toggle: Callback<()>,
    pub mark_read: Callback<i64>,
}

/// Select the notification provider at construction time
pub fn use_notifications(external: Option<ExternalNotifications>) -> NotificationsHandle {
    match external {
        Some(ext) => NotificationsHandle {
            items: ext.items,
            dropdown_open: ext.dropdown_open,
            toggle: ext.on_toggle,
            mark_read: ext.on_mark_read,
        },
        None => use_self_managed(),
    }
}

/// Self-managed provider: session gate, realtime subscription, bounded fetch
fn use_self_managed() -> NotificationsHandle {
    let (items, set_items) = signal(Vec::<Notification>::new());
    let (dropdown_open, set_dropdown_open) = signal(false);

    // No session, no subscription, no fetch - the list stays empty
    let session = LocalResource::new(api::fetch_session);

    Effect::new(move |_| {
        let Some(result) = session.get() else {
            return;
        };
        match result.as_ref() {
            Ok(Some(_)) => {
                // Channel first, then the bulk fetch. The two race: a realtime
                // insert arriving early is prepended, then overwritten when the
                // fetch resolves. Fetch is authoritative; no merge.
                use_notification_stream(Callback::new(move |incoming: Notification| {
                    set_items.update(|list| list.insert(0, incoming));
                }));
                spawn_local(async move {
                    match api::fetch_unread_notifications().await {
                        Ok(list) => set_items.set(list),
                        Err(e) => {
                            leptos::logging::error!("Failed to fetch notifications: {}", e);
                        }
                    }
                });
            }
            Ok(None) => {}
            Err(e) => leptos::logging::error!("Failed to resolve session: {}", e),
        }
    });

    let mark_read = Callback::new(move |id: i64| {
        spawn_local(async move {
            match api::mark_notification_read(id).await {
                // Evict by id only once the store accepted the update
                Ok(()) => set_items.update(|list| list.retain(|n| n.id != id)),
                Err(e) => leptos::logging::error!("Failed to mark notification read: {}", e),
            }
        });
    });

    let toggle = Callback::new(move |()| set_dropdown_open.update(|open| *open = !*open));

    NotificationsHandle {
        items: items.into(),
        dropdown_open: dropdown_open.into(),
        toggle,
        mark_read,
    }
}
