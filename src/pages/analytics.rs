use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::charts::{palette_color, BarChart, DonutChart, LineChart, Series};
use crate::components::{ErrorBanner, Layout, Spinner};
use crate::logic::format::format_money;
use crate::model::Analytics;

/// Renders the pre-aggregated analytics snapshot. Everything shown here
/// is either a field of the payload or a label lookup over it; no
/// client-side aggregation happens.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let analytics = create_rw_signal(None::<Analytics>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    {
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
    }

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Analytics"</h1>
            </div>
            <ErrorBanner error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                {move || analytics.get().map(|a| view! { <AnalyticsCharts analytics=a/> })}
            </Show>
        </Layout>
    }
}

fn as_f64(counts: &[u32]) -> Vec<f64> {
    counts.iter().map(|&c| f64::from(c)).collect()
}

#[component]
fn AnalyticsCharts(analytics: Analytics) -> impl IntoView {
    let a = analytics;

    let budget_labels = a.department_budget.labels.clone();
    let budget_series = vec![
        Series::new("Budget", palette_color(0), a.department_budget.budget.clone()),
        Series::new("Actual", palette_color(1), a.department_budget.actual.clone()),
    ];

    let salary_share: Vec<(String, f64)> = a
        .salary_data
        .department_salaries
        .iter()
        .map(|d| (d.department.clone(), d.total_salary))
        .collect();

    let employee_slices: Vec<(String, f64)> = a
        .employee_distribution
        .pairs()
        .into_iter()
        .map(|(label, count)| (label, f64::from(count)))
        .collect();
    let leave_slices: Vec<(String, f64)> = a
        .leave_status
        .pairs()
        .into_iter()
        .map(|(label, count)| (label, f64::from(count)))
        .collect();

    let role_labels = a.role_distribution.labels.clone();
    let role_series = vec![Series::new(
        "Employees",
        palette_color(4),
        as_f64(&a.role_distribution.counts),
    )];
    let contract_labels = a.contract_type_distribution.labels.clone();
    let contract_series = vec![Series::new(
        "Employees",
        palette_color(5),
        as_f64(&a.contract_type_distribution.counts),
    )];

    let timeline_labels = a.employee_timeline.months.clone();
    let timeline_series = vec![
        Series::new("Active", palette_color(1), as_f64(&a.employee_timeline.active)),
        Series::new("Inactive", palette_color(3), as_f64(&a.employee_timeline.inactive)),
    ];

    view! {
        <div class="card-grid">
            <div class="card">
                <div class="stat-label">"Total payroll (gross)"</div>
                <div class="stat-value">{format_money(a.salary_data.total_gross)}</div>
            </div>
            <div class="card">
                <div class="stat-label">"Total payroll (net)"</div>
                <div class="stat-value">{format_money(a.salary_data.total_net)}</div>
            </div>
            <div class="card">
                <div class="stat-label">"Average salary"</div>
                <div class="stat-value">{format_money(a.salary_data.average_salary)}</div>
            </div>
        </div>
        <div class="chart-grid">
            <div class="chart-card card">
                <h2 class="chart-title">"Budget vs actual by department"</h2>
                <BarChart labels=budget_labels series=budget_series/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Salary share by department"</h2>
                <DonutChart slices=salary_share/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Employee status"</h2>
                <DonutChart slices=employee_slices/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Leave requests"</h2>
                <DonutChart slices=leave_slices/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Roles"</h2>
                <BarChart labels=role_labels series=role_series/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Contract types"</h2>
                <BarChart labels=contract_labels series=contract_series/>
            </div>
            <div class="chart-card card">
                <h2 class="chart-title">"Headcount over time"</h2>
                <LineChart labels=timeline_labels series=timeline_series/>
            </div>
        </div>
    }
}
