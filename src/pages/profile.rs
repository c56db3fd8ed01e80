use leptos::*;

use super::report_error;
use crate::api;
use crate::api::ApiError;
use crate::auth::SessionCtx;
use crate::components::{EmptyState, ErrorBanner, Layout, Spinner};
use crate::model::User;

/// Own account details. Starts from the cached session copy and
/// refreshes it from the profile endpoint.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let user = create_rw_signal(session.user());
    let loading = create_rw_signal(session.user().is_none());
    let error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            match api::auth::profile(&client).await {
                Ok(fresh) => {
                    session.set_user(fresh.clone());
                    let _ = user.try_set(Some(fresh));
                }
                Err(err) => {
                    // The cached copy still renders unless the session
                    // itself is gone or there is nothing to fall back to.
                    if matches!(err, ApiError::Unauthorized)
                        || user.try_get_untracked().flatten().is_none()
                    {
                        report_error(session, error, &err);
                    } else {
                        log::error!("profile refresh failed: {err}");
                    }
                }
            }
            let _ = loading.try_set(false);
        });
    }

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"My Profile"</h1>
            </div>
            <ErrorBanner error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                {move || match user.get() {
                    Some(u) => view! { <ProfileCard user=u/> }.into_view(),
                    None => view! { <EmptyState message="Profile unavailable"/> }.into_view(),
                }}
            </Show>
        </Layout>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let role = move || {
        session
            .role()
            .map(|r| r.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="card">
            <dl class="detail-list">
                <dt>"Full name"</dt>
                <dd>{user.full_name.clone()}</dd>
                <dt>"Email"</dt>
                <dd>{user.email.clone()}</dd>
                <dt>"Phone"</dt>
                <dd>{user.phone_number.clone()}</dd>
                <dt>"Company"</dt>
                <dd>{user.company_name.clone()}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
        </div>
    }
}
