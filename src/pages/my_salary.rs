use leptos::*;

use super::report_error;
use crate::api;
use crate::api::ApiError;
use crate::auth::SessionCtx;
use crate::components::{EmptyState, ErrorBanner, Layout, Spinner};
use crate::logic::format::format_money;
use crate::logic::payroll::deduction_amount;
use crate::model::Salary;

/// Own salary breakdown. The itemized amounts are recomputed with the
/// same function the salary form previews with, so the row amounts and
/// the stored net always agree.
#[component]
pub fn MySalaryPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let salaries = create_rw_signal(Vec::<Salary>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

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
                match api::salary::for_employee(&client, me.id).await {
                    Ok(list) => {
                        let _ = salaries.try_set(list);
                    }
                    // No salary on record renders the empty state.
                    Err(ApiError::NotFound) => {}
                    Err(err) => report_error(session, error, &err),
                }
            }
            let _ = loading.try_set(false);
        });
    }

    // Records arrive newest first; the breakdown shows the current one.
    let current = move || salaries.get().first().cloned();

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"My Salary"</h1>
            </div>
            <ErrorBanner error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                {move || match current() {
                    Some(salary) => view! { <SalaryBreakdown salary=salary/> }.into_view(),
                    None => {
                        view! { <EmptyState message="No salary on record yet"/> }.into_view()
                    }
                }}
            </Show>
        </Layout>
    }
}

#[component]
fn SalaryBreakdown(salary: Salary) -> impl IntoView {
    let gross = salary.gross_salary;
    let rows = salary
        .deductions
        .iter()
        .map(|d| {
            let shown = if d.is_percentage {
                format!("{}%", d.value)
            } else {
                format_money(d.value)
            };
            view! {
                <tr>
                    <td>{d.name.clone()}</td>
                    <td>{d.kind.to_string()}</td>
                    <td>{shown}</td>
                    <td>{format!("-{}", format_money(deduction_amount(gross, d)))}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card-grid">
            <div class="card">
                <div class="stat-label">"Gross salary"</div>
                <div class="stat-value">{format_money(salary.gross_salary)}</div>
            </div>
            <div class="card">
                <div class="stat-label">"Net salary"</div>
                <div class="stat-value">{format_money(salary.net_salary)}</div>
            </div>
            <div class="card">
                <div class="stat-label">"Department"</div>
                <div class="stat-value">{salary.department_name.clone()}</div>
            </div>
        </div>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Deduction"</th>
                    <th>"Type"</th>
                    <th>"Rate"</th>
                    <th>"Amount"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
