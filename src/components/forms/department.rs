use leptos::ev::SubmitEvent;
use leptos::*;
use strum::IntoEnumIterator;

use crate::logic::FieldError;
use crate::model::{BudgetType, Department, DepartmentDraft};

#[component]
pub fn DepartmentForm(
    initial: Option<Department>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<DepartmentDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let name = create_rw_signal(
        initial.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
    );
    let budget = create_rw_signal(
        initial
            .as_ref()
            .map(|d| d.budget.to_string())
            .unwrap_or_default(),
    );
    let budget_type = create_rw_signal(
        initial
            .as_ref()
            .map(|d| d.budget_type)
            .unwrap_or(BudgetType::Monthly),
    );
    let field_error = create_rw_signal(None::<FieldError>);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        let name = name.get();
        let name = name.trim();
        if name.is_empty() {
            field_error.set(Some(FieldError::new("name", "Department name is required")));
            return;
        }
        let Ok(budget) = budget.get().trim().parse::<f64>() else {
            field_error.set(Some(FieldError::new("budget", "Budget must be a number")));
            return;
        };
        if budget < 0.0 {
            field_error.set(Some(FieldError::new("budget", "Budget cannot be negative")));
            return;
        }

        on_submit.call(DepartmentDraft {
            name: name.to_string(),
            budget,
            budget_type: budget_type.get(),
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
                <label>"Budget"</label>
                <input
                    type="number"
                    min="0"
                    step="1000"
                    prop:value=move || budget.get()
                    on:input=move |ev| budget.set(event_target_value(&ev))
                />
                {move || error_for("budget").map(|m| view! { <div class="field-error">{m}</div> })}
            </div>
            <div class="form-field">
                <label>"Budget type"</label>
                <select
                    prop:value=move || budget_type.get().as_wire()
                    on:change=move |ev| {
                        if let Some(bt) = BudgetType::from_wire(&event_target_value(&ev)) {
                            budget_type.set(bt);
                        }
                    }
                >
                    {BudgetType::iter()
                        .map(|bt| view! { <option value=bt.as_wire()>{bt.to_string()}</option> })
                        .collect_view()}
                </select>
            </div>
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
