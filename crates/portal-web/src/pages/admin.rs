//! Administration page

use leptos::prelude::*;

/// Admin dashboard: employees, categories, escalations
#[component]
pub fn Admin() -> impl IntoView {
    view! {
        <div class="page admin-page">
            <h2>"Administration"</h2>
            <p class="hint">"Manage employees, grievance categories, and escalation rules."</p>
        </div>
    }
}
