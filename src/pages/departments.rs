use leptos::*;

use super::{confirmed, report_error};
use crate::api;
use crate::auth::SessionCtx;
use crate::components::forms::DepartmentForm;
use crate::components::{EmptyState, ErrorBanner, Layout, Modal, Spinner};
use crate::logic::budget::{budget_band, usage_percent, BudgetBand};
use crate::logic::filters::filter_departments;
use crate::logic::format::format_money;
use crate::logic::lists;
use crate::model::{Department, DepartmentDraft};

#[derive(Clone)]
enum DeptModal {
    Create,
    Edit(Department),
}

fn band_classes(band: BudgetBand) -> (&'static str, &'static str, &'static str) {
    match band {
        BudgetBand::Healthy => ("progress-fill ok", "badge badge-green", "On track"),
        BudgetBand::Warning => ("progress-fill warn", "badge badge-yellow", "High"),
        BudgetBand::Over => ("progress-fill over", "badge badge-red", "Over budget"),
    }
}

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let departments = create_rw_signal(Vec::<Department>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let search = create_rw_signal(String::new());
    let modal = create_rw_signal(None::<DeptModal>);
    let form_busy = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            match api::department::list(&client).await {
                Ok(list) => {
                    let _ = departments.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = loading.try_set(false);
        });
    }

    let filtered = move || filter_departments(&departments.get(), &search.get());

    let close_modal = move || {
        modal.set(None);
        form_error.set(None);
    };

    let save = move |draft: DepartmentDraft| {
        let target = match modal.get_untracked() {
            Some(DeptModal::Edit(d)) => Some(d.id),
            _ => None,
        };
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::department::update(&client, id, &draft).await,
                None => api::department::create(&client, &draft).await,
            };
            match result {
                Ok(saved) => {
                    let _ = departments.try_update(|l| *l = lists::upsert(l, saved));
                    let _ = modal.try_set(None);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    let delete = move |department: Department| {
        if !confirmed("Are you sure you want to delete this department?") {
            return;
        }
        let client = session.api();
        spawn_local(async move {
            match api::department::delete(&client, department.id).await {
                Ok(()) => {
                    let _ = departments.try_update(|l| *l = lists::remove(l, department.id));
                }
                Err(err) => report_error(session, error, &err),
            }
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Departments"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        form_error.set(None);
                        modal.set(Some(DeptModal::Create));
                    }
                >
                    "Add department"
                </button>
            </div>
            <ErrorBanner error=error/>
            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <EmptyState message="No departments found"/> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Budget"</th>
                                <th>"Type"</th>
                                <th>"Expenses"</th>
                                <th>"Usage"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|d| d.id
                                children=move |d: Department| {
                                    let percent = usage_percent(d.current_expenses, d.budget);
                                    let (fill, badge, label) = band_classes(budget_band(percent));
                                    let width = format!("width:{:.0}%", percent.min(100.0));
                                    let edit_target = d.clone();
                                    let delete_target = d.clone();
                                    view! {
                                        <tr>
                                            <td>{d.name.clone()}</td>
                                            <td>{format_money(d.budget)}</td>
                                            <td>{d.budget_type.to_string()}</td>
                                            <td>{format_money(d.current_expenses)}</td>
                                            <td>
                                                <div class="progress-track">
                                                    <div class=fill style=width></div>
                                                </div>
                                                <span class=badge>
                                                    {format!("{:.0}% {label}", percent)}
                                                </span>
                                            </td>
                                            <td>
                                                <div class="row-actions">
                                                    <button
                                                        class="btn btn-secondary btn-sm"
                                                        on:click=move |_| {
                                                            form_error.set(None);
                                                            modal.set(Some(DeptModal::Edit(edit_target.clone())));
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn-danger btn-sm"
                                                        on:click=move |_| delete(delete_target.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
            {move || {
                modal
                    .get()
                    .map(|m| {
                        let initial = match &m {
                            DeptModal::Edit(d) => Some(d.clone()),
                            DeptModal::Create => None,
                        };
                        let title = if initial.is_some() {
                            "Edit department"
                        } else {
                            "New department"
                        };
                        view! {
                            <Modal title=title on_close=move |_| close_modal()>
                                <DepartmentForm
                                    initial=initial
                                    busy=form_busy
                                    error=form_error
                                    on_submit=save
                                    on_cancel=move |_| close_modal()
                                />
                            </Modal>
                        }
                    })
            }}
        </Layout>
    }
}
