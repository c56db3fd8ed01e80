use leptos::ev::SubmitEvent;
use leptos::*;

use crate::logic::messages::validate_message;
use crate::logic::FieldError;
use crate::model::{Employee, MessageDraft};

#[component]
pub fn MessageForm(
    /// Active employees selectable as recipients.
    employees: Vec<Employee>,
    /// Preselected recipient, e.g. when replying from a history group.
    #[prop(optional)]
    initial_employee: Option<u64>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<MessageDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let first_employee = employees.first().map(|e| e.id).unwrap_or(0);
    let employee_id = create_rw_signal(initial_employee.unwrap_or(first_employee));
    let subject = create_rw_signal(String::new());
    let content = create_rw_signal(String::new());
    let field_error = create_rw_signal(None::<FieldError>);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    let employee_options = employees
        .iter()
        .map(|e| view! { <option value=e.id.to_string()>{e.name.clone()}</option> })
        .collect_view();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        if employee_id.get() == 0 {
            field_error.set(Some(FieldError::new("employeeId", "Select a recipient")));
            return;
        }
        if let Err(e) = validate_message(&subject.get(), &content.get()) {
            field_error.set(Some(e));
            return;
        }

        on_submit.call(MessageDraft {
            employee_id: employee_id.get(),
            subject: subject.get().trim().to_string(),
            content: content.get().trim().to_string(),
        });
    };

    view! {
        <form on:submit=submit>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="form-field">
                <label>"To"</label>
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
                <label>"Subject"</label>
                <input
                    type="text"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                {move || error_for("subject").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-field">
                <label>"Message"</label>
                <textarea
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                {move || error_for("content").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </form>
    }
}
