use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::{EmptyState, ErrorBanner, Layout, Spinner};
use crate::logic::format::{date_input_value, format_date};
use crate::logic::leave::{leave_duration_days, validate_leave_window};
use crate::logic::FieldError;
use crate::model::{Leave, LeaveDraft, LeaveStatus};

fn status_badge(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "badge badge-yellow",
        LeaveStatus::Approved => "badge badge-green",
        LeaveStatus::Denied => "badge badge-red",
    }
}

/// Own leave history plus an inline request form. A created request
/// comes back PENDING from the server and is prepended to the history.
#[component]
pub fn MyLeavePage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let leaves = create_rw_signal(Vec::<Leave>::new());
    let my_id = create_rw_signal(0_u64);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let today = date_input_value(Utc::now().date_naive());
    let start_date = create_rw_signal(today.clone());
    let end_date = create_rw_signal(today.clone());
    let reason = create_rw_signal(String::new());
    let field_error = create_rw_signal(None::<FieldError>);
    let busy = create_rw_signal(false);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    {
        let client = session.api();
        let cached = session.user();
        spawn_local(async move {
            let me = match cached {
                Some(user) => Some(user),
                None => match api::auth::profile(&client).await {
                    Ok(user) => {
                        session.set_user(user.clone());
                        Some(user)
                    }
                    Err(err) => {
                        report_error(session, error, &err);
                        None
                    }
                },
            };
            if let Some(me) = me {
                let _ = my_id.try_set(me.id);
                match api::leave::list(&client).await {
                    Ok(list) => {
                        // The API scopes the collection to the caller for
                        // this role; keep only own rows either way.
                        let own: Vec<Leave> =
                            list.into_iter().filter(|l| l.employee_id == me.id).collect();
                        let _ = leaves.try_set(own);
                    }
                    Err(err) => report_error(session, error, &err),
                }
            }
            let _ = loading.try_set(false);
        });
    }

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        let employee_id = my_id.get();
        if employee_id == 0 {
            error.set(Some("Your profile is still loading, try again".to_string()));
            return;
        }
        let (start, end, reason_text) =
            match validate_leave_window(&start_date.get(), &end_date.get(), &reason.get()) {
                Ok(window) => window,
                Err(e) => {
                    field_error.set(Some(e));
                    return;
                }
            };

        let draft = LeaveDraft {
            employee_id,
            start_date: start,
            end_date: end,
            reason: reason_text,
        };
        let client = session.api();
        busy.set(true);
        spawn_local(async move {
            match api::leave::create(&client, &draft).await {
                Ok(created) => {
                    let _ = leaves.try_update(|l| l.insert(0, created));
                    let _ = reason.try_set(String::new());
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"My Leave"</h1>
            </div>
            <ErrorBanner error=error/>
            <div class="card">
                <h2 class="chart-title">"Request leave"</h2>
                <form on:submit=submit>
                    <div class="form-field">
                        <label>"Start date"</label>
                        <input
                            type="date"
                            min=today.clone()
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                        {move || {
                            error_for("startDate")
                                .map(|m| view! { <div class="field-error">{m}</div> })
                        }}
                    </div>
                    <div class="form-field">
                        <label>"End date"</label>
                        <input
                            type="date"
                            min=move || start_date.get()
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                        {move || {
                            error_for("endDate").map(|m| view! { <div class="field-error">{m}</div> })
                        }}
                    </div>
                    <div class="form-field">
                        <label>"Reason"</label>
                        <textarea
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        ></textarea>
                        {move || {
                            error_for("reason").map(|m| view! { <div class="field-error">{m}</div> })
                        }}
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Submit request" }}
                        </button>
                    </div>
                </form>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !leaves.get().is_empty()
                    fallback=|| view! { <EmptyState message="No leave requests yet"/> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Duration"</th>
                                <th>"Reason"</th>
                                <th>"Status"</th>
                                <th>"Requested"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || leaves.get()
                                key=|l| (l.id, l.status)
                                children=move |l: Leave| {
                                    let days = leave_duration_days(l.start_date, l.end_date);
                                    let duration = if days == 1 {
                                        "1 day".to_string()
                                    } else {
                                        format!("{days} days")
                                    };
                                    view! {
                                        <tr>
                                            <td>{format_date(l.start_date)}</td>
                                            <td>{format_date(l.end_date)}</td>
                                            <td>{duration}</td>
                                            <td>{l.reason.clone()}</td>
                                            <td>
                                                <span class=status_badge(
                                                    l.status,
                                                )>{l.status.to_string()}</span>
                                            </td>
                                            <td>{format_date(l.created_at.date_naive())}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </Layout>
    }
}
