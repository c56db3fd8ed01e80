use leptos::RwSignal;
use leptos::SignalSet;

use crate::api::ApiError;
use crate::auth::SessionCtx;

pub mod analytics;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod leaves;
pub mod login;
pub mod messages;
pub mod messaging;
pub mod my_leave;
pub mod my_salary;
pub mod not_found;
pub mod profile;
pub mod salaries;

/// Routes an API failure to the right surface: a 401 tears down the
/// session (the route guard then redirects), everything else lands in
/// the page's banner. Writes go through `try_set`, so a response that
/// arrives after the page was left is dropped.
pub(crate) fn report_error(session: SessionCtx, error: RwSignal<Option<String>>, err: &ApiError) {
    match err {
        ApiError::Unauthorized => session.clear(),
        _ => {
            let _ = error.try_set(Some(err.to_string()));
        }
    }
}

/// Browser confirmation before destructive actions.
pub(crate) fn confirmed(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
