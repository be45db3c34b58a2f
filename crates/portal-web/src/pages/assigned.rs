//! Assigned grievances page (employee view)

use leptos::prelude::*;

/// Grievances assigned to the signed-in employee
#[component]
pub fn Assigned() -> impl IntoView {
    view! {
        <div class="page assigned-page">
            <h2>"Assigned Grievances"</h2>
            <p class="hint">"Grievances routed to you, oldest open first."</p>
        </div>
    }
}
