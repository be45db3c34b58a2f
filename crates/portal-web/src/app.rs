//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use portal_types::Role;

use crate::api;
use crate::components::Header;
use crate::pages::{
    Admin, Assigned, GrievanceDetail, Grievances, Home, Profile, SubmitGrievance,
};

/// App-wide refresh handle: actions bump the version, resources track it and
/// refetch. Stands in for a router-level "reload current view data".
#[derive(Clone, Copy)]
pub struct ViewRefresh(RwSignal<u32>);

impl ViewRefresh {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Ask every tracking resource to refetch
    pub fn notify(&self) {
        self.0.update(|version| *version += 1);
    }

    /// Subscribe the current reactive scope to refresh requests
    pub fn track(&self) {
        self.0.track();
    }
}

impl Default for ViewRefresh {
    fn default() -> Self {
        Self::new()
    }
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    provide_context(ViewRefresh::new());

    // Role for the header; least-privileged links while loading or signed out
    let session = LocalResource::new(api::fetch_session);
    let role = Signal::derive(move || {
        session
            .get()
            .and_then(|result| result.as_ref().ok().cloned())
            .flatten()
            .map(|info| info.role)
            .unwrap_or(Role::User)
    });

    view! {
        <Router>
            <div class="app">
                {move || view! { <Header role=role.get() /> }}
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/grievances") view=Grievances />
                        <Route path=path!("/grievances/new") view=SubmitGrievance />
                        <Route path=path!("/grievances/:id") view=GrievanceDetail />
                        <Route path=path!("/assigned") view=Assigned />
                        <Route path=path!("/profile") view=Profile />
                        <Route path=path!("/admin") view=Admin />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
