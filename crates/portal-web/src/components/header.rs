//! Page header with navigation, notification dropdown, and logout

use crate::api;
use crate::app::ViewRefresh;
use crate::notifications::{use_notifications, ExternalNotifications};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portal_types::{Notification, Role};

/// A single navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation entries for a role; the profile link is employee-only
pub fn nav_links(role: Role) -> Vec<NavLink> {
    match role {
        Role::User => vec![
            NavLink { label: "Home", href: "/" },
            NavLink { label: "My Grievances", href: "/grievances" },
            NavLink { label: "Submit Grievance", href: "/grievances/new" },
        ],
        Role::Employee => vec![
            NavLink { label: "Home", href: "/" },
            NavLink { label: "Assigned Grievances", href: "/assigned" },
            NavLink { label: "Profile", href: "/profile" },
        ],
        Role::Admin => vec![
            NavLink { label: "Home", href: "/" },
            NavLink { label: "All Grievances", href: "/grievances" },
            NavLink { label: "Administration", href: "/admin" },
        ],
    }
}

/// Badge text for the unread count; absent at zero
pub fn badge_label(unread: usize) -> Option<String> {
    (unread > 0).then(|| unread.to_string())
}

/// Header with navigation links, live notification dropdown, and logout.
///
/// Passing `notifications` puts the header in display-only mode: all
/// notification state and actions stay with the parent and the header opens
/// no network connection of its own.
#[component]
pub fn Header(
    /// Role of the signed-in user, drives which links render
    role: Role,
    /// Parent-owned notification state; omit to let the header manage its own
    #[prop(optional)]
    notifications: Option<ExternalNotifications>,
) -> impl IntoView {
    let handle = use_notifications(notifications);
    let items = handle.items;
    let dropdown_open = handle.dropdown_open;
    let toggle = handle.toggle;
    let mark_read = handle.mark_read;

    let refresh = expect_context::<ViewRefresh>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            // Sign-out failures never block leaving the page
            if let Err(e) = api::sign_out().await {
                leptos::logging::error!("Sign out failed: {}", e);
            }
            navigate("/", Default::default());
            refresh.notify();
        });
    };

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"Grievance Portal"</h1>
            </div>

            <nav class="nav">
                <ul class="nav-list">
                    {nav_links(role)
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li class="nav-item">
                                    <A href=link.href attr:class="nav-link">{link.label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <div class="header-actions">
                <button
                    class="bell"
                    on:click=move |_| toggle.run(())
                    aria-label="Toggle notifications"
                    aria-expanded=move || dropdown_open.get().to_string()
                >
                    <span class="bell-icon">"🔔"</span>
                    {move || {
                        badge_label(items.get().len())
                            .map(|label| view! { <span class="badge">{label}</span> })
                    }}
                </button>
                <button class="logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>

            <Show when=move || dropdown_open.get()>
                <div class="notification-dropdown">
                    <NotificationList items=items mark_read=mark_read />
                </div>
            </Show>
        </header>
    }
}

/// Dropdown body: unread notifications with a mark-as-read control
#[component]
fn NotificationList(items: Signal<Vec<Notification>>, mark_read: Callback<i64>) -> impl IntoView {
    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=|| view! { <p class="notification-empty">"No new notifications"</p> }
        >
            <ul class="notification-list">
                <For
                    each=move || items.get()
                    key=|n| n.id
                    children=move |n: Notification| {
                        let id = n.id;
                        let href = format!("/grievances/{}", n.grievance_id);
                        view! {
                            <li class="notification-item">
                                <A href=href attr:class="notification-message">
                                    {n.message.clone()}
                                </A>
                                <button
                                    class="notification-mark-read"
                                    on:click=move |_| mark_read.run(id)
                                    aria-label="Mark as read"
                                >
                                    "Mark as read"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
