use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::api;
use crate::api::ApiClient;
use crate::auth::SessionCtx;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let query = use_query_map();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    // Signed-in visitors skip the form; this also completes the login
    // flow once `establish` lands.
    create_effect(move |_| {
        if session.is_authenticated() {
            let target = query
                .with_untracked(|q| q.get("redirect").cloned())
                .filter(|t| t.starts_with('/'))
                .unwrap_or_else(|| "/dashboard".to_string());
            let navigate = use_navigate();
            navigate(&target, Default::default());
        }
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email = email.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        busy.set(true);
        spawn_local(async move {
            let anonymous = ApiClient::new(None);
            match api::auth::login(&anonymous, &email, &password).await {
                Ok(granted) => {
                    session.establish(granted.token, granted.role);
                    let client = session.api();
                    match api::auth::profile(&client).await {
                        Ok(user) => session.set_user(user),
                        Err(err) => log::error!("profile fetch after login failed: {err}"),
                    }
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-wrap">
            <div class="card login-card">
                <h1>"Employee Management System"</h1>
                <p class="tagline">"Sign in to continue"</p>
                <form on:submit=submit>
                    {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                    <div class="form-field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width:100%"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
