use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::forms::LeaveForm;
use crate::components::{EmptyState, ErrorBanner, Layout, Modal, Spinner};
use crate::logic::filters::filter_leaves;
use crate::logic::format::format_date;
use crate::logic::leave::{can_transition, leave_duration_days};
use crate::model::{Employee, Leave, LeaveDraft, LeaveStatus};

fn status_badge(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "badge badge-yellow",
        LeaveStatus::Approved => "badge badge-green",
        LeaveStatus::Denied => "badge badge-red",
    }
}

/// Manager view over every leave request. Unlike the other tables this
/// page re-syncs wholesale after each mutation: approvals can shift
/// server-side aggregates, so patching a single row is not enough.
#[component]
pub fn LeavesPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let leaves = create_rw_signal(Vec::<Leave>::new());
    let employees = create_rw_signal(Vec::<Employee>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let status_filter = create_rw_signal("ALL".to_string());
    let employee_filter = create_rw_signal(0_u64);

    let show_form = create_rw_signal(false);
    let form_busy = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            let (requests, staff) = futures::join!(
                api::leave::list(&client),
                api::employee::list(&client)
            );
            match requests {
                Ok(list) => {
                    let _ = leaves.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            match staff {
                Ok(list) => {
                    let _ = employees.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = loading.try_set(false);
        });
    }

    let refetch = move || {
        let client = session.api();
        spawn_local(async move {
            match api::leave::list(&client).await {
                Ok(list) => {
                    let _ = leaves.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
        });
    };

    let filtered = move || {
        let status = LeaveStatus::from_wire(&status_filter.get());
        let employee = (employee_filter.get() != 0).then(|| employee_filter.get());
        filter_leaves(&leaves.get(), status, employee)
    };

    let active_employees = move || -> Vec<Employee> {
        employees
            .get_untracked()
            .into_iter()
            .filter(|e| e.is_active)
            .collect()
    };

    let close_form = move || {
        show_form.set(false);
        form_error.set(None);
    };

    let submit = move |draft: LeaveDraft| {
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            match api::leave::create(&client, &draft).await {
                Ok(_) => {
                    refetch();
                    let _ = show_form.try_set(false);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    let decide = move |leave: Leave, status: LeaveStatus| {
        let client = session.api();
        spawn_local(async move {
            match api::leave::set_status(&client, leave.id, status).await {
                Ok(_) => refetch(),
                Err(err) => report_error(session, error, &err),
            }
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Leave Management"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        form_error.set(None);
                        show_form.set(true);
                    }
                >
                    "New request"
                </button>
            </div>
            <ErrorBanner error=error/>
            <div class="toolbar">
                <select
                    class="select-input"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All statuses"</option>
                    <option value="PENDING">"Pending"</option>
                    <option value="APPROVED">"Approved"</option>
                    <option value="DENIED">"Denied"</option>
                </select>
                <select
                    class="select-input"
                    prop:value=move || employee_filter.get().to_string()
                    on:change=move |ev| {
                        employee_filter.set(event_target_value(&ev).parse().unwrap_or(0));
                    }
                >
                    <option value="0">"All employees"</option>
                    {move || {
                        employees
                            .get()
                            .iter()
                            .map(|e| {
                                view! { <option value=e.id.to_string()>{e.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <EmptyState message="No leave requests found"/> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Employee"</th>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Duration"</th>
                                <th>"Reason"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|l| (l.id, l.status)
                                children=move |l: Leave| {
                                    let days = leave_duration_days(l.start_date, l.end_date);
                                    let duration = if days == 1 {
                                        "1 day".to_string()
                                    } else {
                                        format!("{days} days")
                                    };
                                    let approve_target = l.clone();
                                    let deny_target = l.clone();
                                    // Approved and Denied are terminal; no controls.
                                    let pending = can_transition(l.status);
                                    view! {
                                        <tr>
                                            <td>{l.employee_name.clone()}</td>
                                            <td>{format_date(l.start_date)}</td>
                                            <td>{format_date(l.end_date)}</td>
                                            <td>{duration}</td>
                                            <td>{l.reason.clone()}</td>
                                            <td>
                                                <span class=status_badge(
                                                    l.status,
                                                )>{l.status.to_string()}</span>
                                            </td>
                                            <td>
                                                <Show when=move || pending fallback=|| ()>
                                                    <div class="row-actions">
                                                        <button
                                                            class="btn btn-success btn-sm"
                                                            on:click={
                                                                let target = approve_target.clone();
                                                                move |_| decide(target.clone(), LeaveStatus::Approved)
                                                            }
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            class="btn btn-danger btn-sm"
                                                            on:click={
                                                                let target = deny_target.clone();
                                                                move |_| decide(target.clone(), LeaveStatus::Denied)
                                                            }
                                                        >
                                                            "Deny"
                                                        </button>
                                                    </div>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
            <Show when=move || show_form.get() fallback=|| ()>
                <Modal title="New leave request" on_close=move |_| close_form()>
                    <LeaveForm
                        employees=active_employees()
                        busy=form_busy
                        error=form_error
                        on_submit=submit
                        on_cancel=move |_| close_form()
                    />
                </Modal>
            </Show>
        </Layout>
    }
}
