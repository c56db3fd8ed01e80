use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="login-wrap">
            <div class="card login-card">
                <h1>"Page not found"</h1>
                <p class="tagline">"The page you are looking for does not exist."</p>
                <A class="btn btn-primary" href="/dashboard">
                    "Back to the dashboard"
                </A>
            </div>
        </div>
    }
}
