use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::auth::SessionCtx;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = SessionCtx::use_ctx();

    let display_name = move || {
        session
            .user()
            .map(|u| u.full_name)
            .or_else(|| session.role().map(|r| r.to_string()))
            .unwrap_or_default()
    };

    // Local session goes first; the server call is best-effort.
    let logout = move |_| {
        let client = session.api();
        session.clear();
        spawn_local(async move {
            let _ = api::auth::logout(&client).await;
        });
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <header class="navbar">
            <div></div>
            <div class="navbar-user">
                <span class="who">{display_name}</span>
                <button class="btn btn-secondary btn-sm" on:click=logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
