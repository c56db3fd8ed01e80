use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::logic::format::date_input_value;
use crate::logic::leave::validate_leave;
use crate::logic::FieldError;
use crate::model::{Employee, LeaveDraft};

#[component]
pub fn LeaveForm(
    /// Active employees eligible for leave. An empty list renders a
    /// notice instead of the form.
    employees: Vec<Employee>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<LeaveDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    if employees.is_empty() {
        return view! {
            <div>
                <p class="stat-sub">"No active employees available."</p>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.call(())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        }
        .into_view();
    }

    let today = date_input_value(Utc::now().date_naive());
    let first_employee = employees.first().map(|e| e.id).unwrap_or(0);

    let employee_id = create_rw_signal(first_employee);
    let start_date = create_rw_signal(today.clone());
    let end_date = create_rw_signal(today);
    let reason = create_rw_signal(String::new());
    let field_error = create_rw_signal(None::<FieldError>);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    let employee_options = employees
        .iter()
        .map(|e| view! { <option value=e.id.to_string()>{e.name.clone()}</option> })
        .collect_view();

    let roster = store_value(employees);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        let result = roster.with_value(|employees| {
            validate_leave(
                employee_id.get(),
                &start_date.get(),
                &end_date.get(),
                &reason.get(),
                employees,
            )
        });
        match result {
            Ok(draft) => on_submit.call(draft),
            Err(e) => field_error.set(Some(e)),
        }
    };

    view! {
        <form on:submit=submit>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="form-field">
                <label>"Employee"</label>
                <select
                    prop:value=move || employee_id.get().to_string()
                    on:change=move |ev| {
                        employee_id.set(event_target_value(&ev).parse().unwrap_or(0));
                    }
                >
                    {employee_options}
                </select>
                {move || {
                    error_for("employeeId").map(|m| view! { <div class="field-error">{m}</div> })
                }}
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
                <label>"End date"</label>
                <input
                    type="date"
                    min=move || start_date.get()
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                {move || error_for("endDate").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-field">
                <label>"Reason"</label>
                <textarea
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                ></textarea>
                {move || error_for("reason").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit request" }}
                </button>
            </div>
        </form>
    }
    .into_view()
}
