//! Grievance list page

use leptos::prelude::*;

/// Grievance list for the signed-in user (all grievances for admins)
#[component]
pub fn Grievances() -> impl IntoView {
    view! {
        <div class="page grievances-page">
            <h2>"Grievances"</h2>
            <p class="hint">
                "Your filed grievances appear here. Status changes show up in the bell menu as they happen."
            </p>
        </div>
    }
}
