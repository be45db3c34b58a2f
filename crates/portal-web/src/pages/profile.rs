//! Employee profile page

use leptos::prelude::*;

/// Profile settings for employees
#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <div class="page profile-page">
            <h2>"Profile"</h2>
            <p class="hint">"Department, availability, and notification preferences."</p>
        </div>
    }
}
