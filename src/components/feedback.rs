use leptos::*;

/// Dismissible banner for request failures. The page keeps its snapshot;
/// only the banner appears.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="error-banner">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="banner-dismiss" on:click=move |_| error.set(None)>
                    "\u{00d7}"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner"></div> }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}
