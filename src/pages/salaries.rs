use leptos::*;

use super::report_error;
use crate::api;
use crate::auth::SessionCtx;
use crate::components::forms::SalaryForm;
use crate::components::{EmptyState, ErrorBanner, Layout, Modal, Spinner};
use crate::logic::filters::{department_names, filter_salaries};
use crate::logic::format::format_money;
use crate::logic::lists;
use crate::model::{Employee, Salary, SalaryDraft};

#[derive(Clone)]
enum SalaryModal {
    Create,
    Edit(Salary),
}

#[component]
pub fn SalariesPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let salaries = create_rw_signal(Vec::<Salary>::new());
    let employees = create_rw_signal(Vec::<Employee>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let search = create_rw_signal(String::new());
    // Empty string means every department.
    let department_filter = create_rw_signal(String::new());

    let modal = create_rw_signal(None::<SalaryModal>);
    let form_busy = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            let (pay, staff) = futures::join!(
                api::salary::list(&client),
                api::employee::list(&client)
            );
            match pay {
                Ok(list) => {
                    let _ = salaries.try_set(list);
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

    let filtered = move || {
        let department = department_filter.get();
        let department = (!department.is_empty()).then_some(department);
        filter_salaries(&salaries.get(), &search.get(), department.as_deref())
    };

    // Only active employees may be put on payroll.
    let active_employees = move || -> Vec<Employee> {
        employees
            .get_untracked()
            .into_iter()
            .filter(|e| e.is_active)
            .collect()
    };

    let close_modal = move || {
        modal.set(None);
        form_error.set(None);
    };

    let save = move |draft: SalaryDraft| {
        let target = match modal.get_untracked() {
            Some(SalaryModal::Edit(s)) => Some(s.id),
            _ => None,
        };
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::salary::update(&client, id, &draft).await,
                None => api::salary::create(&client, &draft).await,
            };
            match result {
                Ok(saved) => {
                    let _ = salaries.try_update(|l| *l = lists::upsert(l, saved));
                    let _ = modal.try_set(None);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Salaries"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        form_error.set(None);
                        modal.set(Some(SalaryModal::Create));
                    }
                >
                    "Add salary"
                </button>
            </div>
            <ErrorBanner error=error/>
            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by employee or department"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="select-input"
                    prop:value=move || department_filter.get()
                    on:change=move |ev| department_filter.set(event_target_value(&ev))
                >
                    <option value="">"All departments"</option>
                    {move || {
                        department_names(&employees.get())
                            .into_iter()
                            .map(|name| {
                                view! { <option value=name.clone()>{name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <EmptyState message="No salaries found"/> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Employee"</th>
                                <th>"Department"</th>
                                <th>"Gross"</th>
                                <th>"Deductions"</th>
                                <th>"Net"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|s| s.id
                                children=move |s: Salary| {
                                    let edit_target = s.clone();
                                    let deductions = if s.deductions.len() == 1 {
                                        "1 item".to_string()
                                    } else {
                                        format!("{} items", s.deductions.len())
                                    };
                                    view! {
                                        <tr>
                                            <td>{s.employee_name.clone()}</td>
                                            <td>{s.department_name.clone()}</td>
                                            <td>{format_money(s.gross_salary)}</td>
                                            <td>{deductions}</td>
                                            <td>
                                                <b>{format_money(s.net_salary)}</b>
                                            </td>
                                            <td>
                                                <div class="row-actions">
                                                    <button
                                                        class="btn btn-secondary btn-sm"
                                                        on:click=move |_| {
                                                            form_error.set(None);
                                                            modal.set(Some(SalaryModal::Edit(edit_target.clone())));
                                                        }
                                                    >
                                                        "Edit"
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
                            SalaryModal::Edit(s) => Some(s.clone()),
                            SalaryModal::Create => None,
                        };
                        let title = if initial.is_some() { "Edit salary" } else { "New salary" };
                        view! {
                            <Modal title=title on_close=move |_| close_modal()>
                                <SalaryForm
                                    initial=initial
                                    employees=active_employees()
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
