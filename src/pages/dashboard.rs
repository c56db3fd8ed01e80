use leptos::*;
use leptos_router::A;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::{ErrorBanner, Layout, Spinner};
use crate::logic::format::format_money;
use crate::model::{Analytics, Role};

/// Landing screen of the authenticated area. Managers get the company
/// overview, employees get shortcuts to their own records.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let analytics = create_rw_signal(None::<Analytics>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    if session.role().map(Role::is_manager).unwrap_or(false) {
        let client = session.api();
        spawn_local(async move {
            match api::analytics::fetch(&client).await {
                Ok(data) => {
                    let _ = analytics.try_set(Some(data));
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = loading.try_set(false);
        });
    } else {
        loading.set(false);
    }

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
            </div>
            <ErrorBanner error=error/>
            {move || match session.role() {
                Some(Role::Manager) => {
                    view! { <ManagerOverview analytics=analytics loading=loading/> }.into_view()
                }
                Some(Role::Employee) => view! { <EmployeeOverview/> }.into_view(),
                None => ().into_view(),
            }}
        </Layout>
    }
}

#[component]
fn ManagerOverview(
    analytics: RwSignal<Option<Analytics>>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
            {move || {
                analytics
                    .get()
                    .map(|a| {
                        let staff = a.employee_distribution.clone();
                        let leave = a.leave_status.clone();
                        let pay = a.salary_data.clone();
                        view! {
                            <div class="card-grid">
                                <div class="card">
                                    <div class="stat-label">"Employees"</div>
                                    <div class="stat-value">{staff.total()}</div>
                                    <div class="stat-sub">
                                        "Active " <b>{staff.count_for("Active")}</b>
                                        " / Inactive " <b>{staff.count_for("Inactive")}</b>
                                    </div>
                                </div>
                                <div class="card">
                                    <div class="stat-label">"Total payroll (gross)"</div>
                                    <div class="stat-value">{format_money(pay.total_gross)}</div>
                                    <div class="stat-sub">
                                        "Net " <b>{format_money(pay.total_net)}</b> " / Average "
                                        <b>{format_money(pay.average_salary)}</b>
                                    </div>
                                </div>
                                <div class="card">
                                    <div class="stat-label">"Leave requests"</div>
                                    <div class="stat-value">{leave.total()}</div>
                                    <div class="stat-sub">
                                        "Pending " <b>{leave.count_for("Pending")}</b>
                                        " / Approved " <b>{leave.count_for("Approved")}</b>
                                        " / Denied " <b>{leave.count_for("Denied")}</b>
                                    </div>
                                </div>
                            </div>
                            <div class="card-grid">
                                <A class="card" href="/dashboard/employees">
                                    <div class="stat-label">"Manage"</div>
                                    <div class="stat-value">"Employees"</div>
                                </A>
                                <A class="card" href="/dashboard/leaves">
                                    <div class="stat-label">"Review"</div>
                                    <div class="stat-value">"Leave requests"</div>
                                </A>
                                <A class="card" href="/dashboard/analytics">
                                    <div class="stat-label">"Explore"</div>
                                    <div class="stat-value">"Analytics"</div>
                                </A>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
fn EmployeeOverview() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}", u.full_name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div>
            <p class="stat-sub">{greeting}</p>
            <div class="card-grid">
                <A class="card" href="/dashboard/my-salary">
                    <div class="stat-label">"View"</div>
                    <div class="stat-value">"My Salary"</div>
                </A>
                <A class="card" href="/dashboard/my-leave">
                    <div class="stat-label">"Request"</div>
                    <div class="stat-value">"My Leave"</div>
                </A>
                <A class="card" href="/dashboard/messages">
                    <div class="stat-label">"Read"</div>
                    <div class="stat-value">"Messages"</div>
                </A>
                <A class="card" href="/dashboard/profile">
                    <div class="stat-label">"Update"</div>
                    <div class="stat-value">"My Profile"</div>
                </A>
            </div>
        </div>
    }
}
