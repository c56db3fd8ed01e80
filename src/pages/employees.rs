use leptos::*;

use super::{confirmed, report_error};
use crate::api;
use crate::auth::SessionCtx;
use crate::components::forms::{EmployeeForm, StatusForm};
use crate::components::{EmptyState, ErrorBanner, Layout, Modal, Spinner};
use crate::logic::filters::filter_employees;
use crate::logic::format::format_date;
use crate::logic::lists;
use crate::model::{Department, Employee, EmployeeDraft, StatusChange};

#[derive(Clone)]
enum EmpModal {
    Create,
    Edit(Employee),
    Status(Employee),
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = SessionCtx::use_ctx();
    let employees = create_rw_signal(Vec::<Employee>::new());
    let departments = create_rw_signal(Vec::<Department>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let search = create_rw_signal(String::new());
    let department_filter = create_rw_signal(0_u64);
    let status_filter = create_rw_signal("ALL".to_string());

    let modal = create_rw_signal(None::<EmpModal>);
    let form_busy = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);

    {
        let client = session.api();
        spawn_local(async move {
            let (staff, depts) = futures::join!(
                api::employee::list(&client),
                api::department::list(&client)
            );
            match staff {
                Ok(list) => {
                    let _ = employees.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            match depts {
                Ok(list) => {
                    let _ = departments.try_set(list);
                }
                Err(err) => report_error(session, error, &err),
            }
            let _ = loading.try_set(false);
        });
    }

    let filtered = move || {
        let department = (department_filter.get() != 0).then(|| department_filter.get());
        let active = match status_filter.get().as_str() {
            "ACTIVE" => Some(true),
            "INACTIVE" => Some(false),
            _ => None,
        };
        filter_employees(&employees.get(), &search.get(), department, active)
    };

    let close_modal = move || {
        modal.set(None);
        form_error.set(None);
    };

    let save = move |draft: EmployeeDraft| {
        let target = match modal.get_untracked() {
            Some(EmpModal::Edit(e)) => Some(e.id),
            _ => None,
        };
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::employee::update(&client, id, &draft).await,
                None => api::employee::create(&client, &draft).await,
            };
            match result {
                Ok(saved) => {
                    let _ = employees.try_update(|l| *l = lists::upsert(l, saved));
                    let _ = modal.try_set(None);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    let save_status = move |change: StatusChange| {
        let Some(EmpModal::Status(target)) = modal.get_untracked() else {
            return;
        };
        let client = session.api();
        form_busy.set(true);
        form_error.set(None);
        spawn_local(async move {
            match api::employee::set_status(&client, target.id, &change).await {
                Ok(saved) => {
                    let _ = employees.try_update(|l| *l = lists::upsert(l, saved));
                    let _ = modal.try_set(None);
                }
                Err(err) => report_error(session, form_error, &err),
            }
            let _ = form_busy.try_set(false);
        });
    };

    let delete = move |employee: Employee| {
        if !confirmed("Are you sure you want to delete this employee?") {
            return;
        }
        let client = session.api();
        spawn_local(async move {
            match api::employee::delete(&client, employee.id).await {
                Ok(()) => {
                    let _ = employees.try_update(|l| *l = lists::remove(l, employee.id));
                }
                Err(err) => report_error(session, error, &err),
            }
        });
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1 class="page-title">"Employees"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        form_error.set(None);
                        modal.set(Some(EmpModal::Create));
                    }
                >
                    "Add employee"
                </button>
            </div>
            <ErrorBanner error=error/>
            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search name, email or job title"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="select-input"
                    prop:value=move || department_filter.get().to_string()
                    on:change=move |ev| {
                        department_filter.set(event_target_value(&ev).parse().unwrap_or(0));
                    }
                >
                    <option value="0">"All departments"</option>
                    {move || {
                        departments
                            .get()
                            .iter()
                            .map(|d| {
                                view! { <option value=d.id.to_string()>{d.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    class="select-input"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All statuses"</option>
                    <option value="ACTIVE">"Active"</option>
                    <option value="INACTIVE">"Inactive"</option>
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <EmptyState message="No employees found"/> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Department"</th>
                                <th>"Job title"</th>
                                <th>"Contract"</th>
                                <th>"Started"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=filtered
                                key=|e| e.id
                                children=move |e: Employee| {
                                    let (badge, label) = if e.is_active {
                                        ("badge badge-green", "Active")
                                    } else {
                                        ("badge badge-gray", "Inactive")
                                    };
                                    let edit_target = e.clone();
                                    let status_target = e.clone();
                                    let delete_target = e.clone();
                                    view! {
                                        <tr>
                                            <td>{e.name.clone()}</td>
                                            <td>{e.email.clone()}</td>
                                            <td>{e.department_name.clone()}</td>
                                            <td>{e.role.clone()}</td>
                                            <td>{e.contract_type.to_string()}</td>
                                            <td>{format_date(e.start_date)}</td>
                                            <td>
                                                <span class=badge>{label}</span>
                                            </td>
                                            <td>
                                                <div class="row-actions">
                                                    <button
                                                        class="btn btn-secondary btn-sm"
                                                        on:click=move |_| {
                                                            form_error.set(None);
                                                            modal.set(Some(EmpModal::Edit(edit_target.clone())));
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn-secondary btn-sm"
                                                        on:click=move |_| {
                                                            form_error.set(None);
                                                            modal.set(Some(EmpModal::Status(status_target.clone())));
                                                        }
                                                    >
                                                        "Status"
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
                    .map(|m| match m {
                        EmpModal::Create => {
                            view! {
                                <Modal title="New employee" on_close=move |_| close_modal()>
                                    <EmployeeForm
                                        initial=None
                                        departments=departments.get_untracked()
                                        busy=form_busy
                                        error=form_error
                                        on_submit=save
                                        on_cancel=move |_| close_modal()
                                    />
                                </Modal>
                            }
                        }
                        EmpModal::Edit(e) => {
                            view! {
                                <Modal title="Edit employee" on_close=move |_| close_modal()>
                                    <EmployeeForm
                                        initial=Some(e)
                                        departments=departments.get_untracked()
                                        busy=form_busy
                                        error=form_error
                                        on_submit=save
                                        on_cancel=move |_| close_modal()
                                    />
                                </Modal>
                            }
                        }
                        EmpModal::Status(e) => {
                            view! {
                                <Modal title="Change status" on_close=move |_| close_modal()>
                                    <StatusForm
                                        employee=e
                                        busy=form_busy
                                        error=form_error
                                        on_submit=save_status
                                        on_cancel=move |_| close_modal()
                                    />
                                </Modal>
                            }
                        }
                    })
            }}
        </Layout>
    }
}
