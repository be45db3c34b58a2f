//! Landing page

use crate::api;
use crate::app::ViewRefresh;
use leptos::prelude::*;

/// Landing page; greets the signed-in user and refetches on refresh requests
#[component]
pub fn Home() -> impl IntoView {
    let refresh = expect_context::<ViewRefresh>();
    let session = LocalResource::new(move || {
        refresh.track();
        api::fetch_session()
    });

    view! {
        <div class="page home-page">
            <h2>"Welcome to the Grievance Portal"</h2>
            <p class="subtitle">"File grievances, follow their progress, get notified on updates."</p>
            <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
                {move || {
                    session
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(Some(info)) => {
                                view! {
                                    <p class="session-state">
                                        {format!("Signed in as {}", info.display_name)}
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! { <p class="session-state">"You are signed out."</p> }
                                    .into_any()
                            }
                            Err(e) => {
                                leptos::logging::error!("Failed to resolve session: {}", e);
                                view! { <p class="session-state">"You are signed out."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
