use leptos::ev::SubmitEvent;
use leptos::*;

use crate::logic::format::{date_input_value, parse_date};
use crate::model::{Employee, StatusChange};

/// Activate/deactivate an employee. When deactivating, an optional
/// planned inactive window can be entered; the window is submitted as
/// typed, without ordering checks.
#[component]
pub fn StatusForm(
    employee: Employee,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<StatusChange>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_active = create_rw_signal(employee.is_active);
    let inactive_from = create_rw_signal(
        employee.inactive_from.map(date_input_value).unwrap_or_default(),
    );
    let inactive_to = create_rw_signal(
        employee.inactive_to.map(date_input_value).unwrap_or_default(),
    );

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let active = is_active.get();
        on_submit.call(StatusChange {
            is_active: active,
            inactive_from: (!active)
                .then(|| parse_date(&inactive_from.get()))
                .flatten(),
            inactive_to: (!active).then(|| parse_date(&inactive_to.get())).flatten(),
        });
    };

    view! {
        <form on:submit=submit>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <p class="stat-sub">{format!("Set the status of {}.", employee.name)}</p>
            <label class="checkbox-field">
                <input
                    type="checkbox"
                    prop:checked=move || is_active.get()
                    on:change=move |ev| is_active.set(event_target_checked(&ev))
                />
                "Active"
            </label>
            <Show when=move || !is_active.get() fallback=|| ()>
                <div class="form-field">
                    <label>"Inactive from"</label>
                    <input
                        type="date"
                        prop:value=move || inactive_from.get()
                        on:input=move |ev| inactive_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Inactive until"</label>
                    <input
                        type="date"
                        prop:value=move || inactive_to.get()
                        on:input=move |ev| inactive_to.set(event_target_value(&ev))
                    />
                </div>
            </Show>
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
