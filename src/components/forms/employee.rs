use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::*;
use strum::IntoEnumIterator;

use crate::logic::format::{date_input_value, parse_date};
use crate::logic::FieldError;
use crate::model::{ContractType, Department, Employee, EmployeeDraft};

#[component]
pub fn EmployeeForm(
    initial: Option<Employee>,
    departments: Vec<Department>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<EmployeeDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let first_department = departments.first().map(|d| d.id).unwrap_or(0);

    let name = create_rw_signal(initial.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let email = create_rw_signal(initial.as_ref().map(|e| e.email.clone()).unwrap_or_default());
    let phone = create_rw_signal(initial.as_ref().map(|e| e.phone.clone()).unwrap_or_default());
    let job_title = create_rw_signal(initial.as_ref().map(|e| e.role.clone()).unwrap_or_default());
    let department_id = create_rw_signal(
        initial
            .as_ref()
            .map(|e| e.department_id)
            .unwrap_or(first_department),
    );
    let contract_type = create_rw_signal(
        initial
            .as_ref()
            .map(|e| e.contract_type)
            .unwrap_or(ContractType::FullTime),
    );
    let start_date = create_rw_signal(
        initial
            .as_ref()
            .map(|e| date_input_value(e.start_date))
            .unwrap_or_else(|| date_input_value(Utc::now().date_naive())),
    );
    let end_date = create_rw_signal(
        initial
            .as_ref()
            .and_then(|e| e.end_date)
            .map(date_input_value)
            .unwrap_or_default(),
    );
    let is_active = create_rw_signal(initial.as_ref().map(|e| e.is_active).unwrap_or(true));
    let field_error = create_rw_signal(None::<FieldError>);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    let department_options = departments
        .iter()
        .map(|d| view! { <option value=d.id.to_string()>{d.name.clone()}</option> })
        .collect_view();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        let name = name.get();
        let name = name.trim();
        if name.is_empty() {
            field_error.set(Some(FieldError::new("name", "Name is required")));
            return;
        }
        let email = email.get();
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            field_error.set(Some(FieldError::new("email", "A valid email is required")));
            return;
        }
        if department_id.get() == 0 {
            field_error.set(Some(FieldError::new("departmentId", "Select a department")));
            return;
        }
        let Some(start) = parse_date(&start_date.get()) else {
            field_error.set(Some(FieldError::new("startDate", "Start date is required")));
            return;
        };

        on_submit.call(EmployeeDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.get().trim().to_string(),
            role: job_title.get().trim().to_string(),
            department_id: department_id.get(),
            contract_type: contract_type.get(),
            start_date: start,
            end_date: parse_date(&end_date.get()),
            is_active: is_active.get(),
        });
    };

    view! {
        <form on:submit=submit>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="form-field">
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                {move || error_for("name").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-field">
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || error_for("email").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-field">
                <label>"Phone"</label>
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>"Job title"</label>
                <input
                    type="text"
                    placeholder="Developer"
                    prop:value=move || job_title.get()
                    on:input=move |ev| job_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label>"Department"</label>
                <select
                    prop:value=move || department_id.get().to_string()
                    on:change=move |ev| {
                        department_id.set(event_target_value(&ev).parse().unwrap_or(0));
                    }
                >
                    {department_options}
                </select>
                {move || {
                    error_for("departmentId").map(|m| view! { <div class="field-error">{m}</div> })
                }}
            </div>
            <div class="form-field">
                <label>"Contract type"</label>
                <select
                    prop:value=move || contract_type.get().as_wire()
                    on:change=move |ev| {
                        if let Some(ct) = ContractType::from_wire(&event_target_value(&ev)) {
                            contract_type.set(ct);
                        }
                    }
                >
                    {ContractType::iter()
                        .map(|ct| view! { <option value=ct.as_wire()>{ct.to_string()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-field">
                <label>"Start date"</label>
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                {move || {
                    error_for("startDate").map(|m| view! { <div class="field-error">{m}</div> })
                }}
            </div>
            <div class="form-field">
                <label>"End date (optional)"</label>
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
            </div>
            <label class="checkbox-field">
                <input
                    type="checkbox"
                    prop:checked=move || is_active.get()
                    on:change=move |ev| is_active.set(event_target_checked(&ev))
                />
                "Active employee"
            </label>
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
