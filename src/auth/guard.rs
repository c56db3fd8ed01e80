//! Route guard for the authenticated area.

use leptos::*;
use leptos_router::{use_location, use_navigate};

use super::session::SessionCtx;
use crate::model::Role;

/// Wraps a routed page. Without a session the visitor is sent to the
/// login screen with the attempted path as `?redirect=`; with the wrong
/// role they land back on the dashboard. Children render only while the
/// session satisfies the requirement, so a forced logout mid-page also
/// unmounts the page.
#[component]
pub fn RequireAuth(
    #[prop(optional)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let location = use_location();

    let allowed = move || {
        session
            .get()
            .map(|s| role.map_or(true, |required| s.role == required))
            .unwrap_or(false)
    };

    create_effect(move |_| {
        let navigate = use_navigate();
        match session.get() {
            None => {
                let target = format!("/login?redirect={}", location.pathname.get());
                navigate(&target, Default::default());
            }
            Some(s) => {
                if let Some(required) = role {
                    if s.role != required {
                        navigate("/dashboard", Default::default());
                    }
                }
            }
        }
    });

    view! {
        <Show when=allowed fallback=|| ()>
            {children()}
        </Show>
    }
}
