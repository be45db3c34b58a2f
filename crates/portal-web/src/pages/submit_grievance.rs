//! Grievance submission page

use leptos::prelude::*;

/// Form entry point for filing a new grievance
#[component]
pub fn SubmitGrievance() -> impl IntoView {
    view! {
        <div class="page submit-page">
            <h2>"Submit a Grievance"</h2>
            <p class="hint">"Describe the issue; an employee will be assigned to it."</p>
        </div>
    }
}
