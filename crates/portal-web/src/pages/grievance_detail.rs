//! Single grievance page, the target of notification links

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Detail view for one grievance
#[component]
pub fn GrievanceDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="page grievance-detail-page">
            <h2>{move || format!("Grievance #{}", id())}</h2>
            <p class="hint">"Timeline, comments, and status history for this grievance."</p>
        </div>
    }
}
