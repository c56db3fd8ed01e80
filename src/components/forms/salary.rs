use leptos::ev::SubmitEvent;
use leptos::*;
use strum::IntoEnumIterator;

use crate::logic::format::format_money;
use crate::logic::payroll::{deduction_amount, net_salary, validate_deduction, validate_gross};
use crate::logic::FieldError;
use crate::model::{Deduction, DeductionType, Employee, Salary, SalaryDraft};

fn default_deductions() -> Vec<Deduction> {
    vec![
        Deduction {
            id: None,
            kind: DeductionType::Tax,
            name: "Income Tax".into(),
            value: 20.0,
            is_percentage: true,
        },
        Deduction {
            id: None,
            kind: DeductionType::Insurance,
            name: "Health Insurance".into(),
            value: 5.0,
            is_percentage: true,
        },
    ]
}

#[component]
pub fn SalaryForm(
    initial: Option<Salary>,
    /// Active employees offered in the select.
    employees: Vec<Employee>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<SalaryDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = initial.is_some();
    let first_employee = employees.first().map(|e| e.id).unwrap_or(0);

    let employee_id = create_rw_signal(
        initial
            .as_ref()
            .map(|s| s.employee_id)
            .unwrap_or(first_employee),
    );
    let gross = create_rw_signal(
        initial
            .as_ref()
            .map(|s| s.gross_salary.to_string())
            .unwrap_or_default(),
    );
    let deductions = create_rw_signal(
        initial
            .as_ref()
            .map(|s| s.deductions.clone())
            .unwrap_or_else(default_deductions),
    );

    // Row under construction, appended via "Add".
    let nd_kind = create_rw_signal(DeductionType::Custom);
    let nd_name = create_rw_signal(String::new());
    let nd_value = create_rw_signal(String::new());
    let nd_percentage = create_rw_signal(true);

    let field_error = create_rw_signal(None::<FieldError>);
    let error_for =
        move |field: &'static str| field_error.get().and_then(|e| e.for_field(field));

    let parsed_gross = move || gross.get().trim().parse::<f64>().unwrap_or(0.0);
    let net_preview = move || net_salary(parsed_gross(), &deductions.get());

    let add_deduction = move |_| {
        field_error.set(None);
        let name = nd_name.get();
        let value = nd_value.get().trim().parse::<f64>().unwrap_or(0.0);
        if let Err(e) = validate_deduction(&name, value) {
            field_error.set(Some(e));
            return;
        }
        deductions.update(|list| {
            list.push(Deduction {
                id: None,
                kind: nd_kind.get(),
                name: name.trim().to_string(),
                value,
                is_percentage: nd_percentage.get(),
            });
        });
        nd_kind.set(DeductionType::Custom);
        nd_name.set(String::new());
        nd_value.set(String::new());
        nd_percentage.set(true);
    };

    let remove_deduction = move |index: usize| {
        deductions.update(|list| {
            if index < list.len() {
                list.remove(index);
            }
        });
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);

        if employee_id.get() == 0 {
            field_error.set(Some(FieldError::new("employeeId", "Select an employee")));
            return;
        }
        let gross = parsed_gross();
        if let Err(e) = validate_gross(gross) {
            field_error.set(Some(e));
            return;
        }

        on_submit.call(SalaryDraft {
            employee_id: employee_id.get(),
            gross_salary: gross,
            deductions: deductions.get(),
        });
    };

    let employee_options = employees
        .iter()
        .map(|e| view! { <option value=e.id.to_string()>{e.name.clone()}</option> })
        .collect_view();

    view! {
        <form on:submit=submit>
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="form-field">
                <label>"Employee"</label>
                <select
                    disabled=editing
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
                <label>"Gross salary"</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || gross.get()
                    on:input=move |ev| gross.set(event_target_value(&ev))
                />
                {move || {
                    error_for("grossSalary").map(|m| view! { <div class="field-error">{m}</div> })
                }}
            </div>

            <div class="form-field">
                <label>"Deductions"</label>
                <ul class="deduction-list">
                    {move || {
                        let gross = parsed_gross();
                        deductions
                            .get()
                            .iter()
                            .enumerate()
                            .map(|(i, d)| {
                                let shown = if d.is_percentage {
                                    format!("{}%", d.value)
                                } else {
                                    format_money(d.value)
                                };
                                let amount = format_money(deduction_amount(gross, d));
                                view! {
                                    <li>
                                        <span>{format!("{} ({})", d.name, d.kind)}</span>
                                        <span>
                                            {format!("{shown} = {amount}")}
                                            <button
                                                type="button"
                                                class="btn btn-sm"
                                                on:click=move |_| remove_deduction(i)
                                            >
                                                "\u{00d7}"
                                            </button>
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <div class="deduction-row">
                    <select
                        prop:value=move || nd_kind.get().as_wire()
                        on:change=move |ev| {
                            if let Some(k) = DeductionType::from_wire(&event_target_value(&ev)) {
                                nd_kind.set(k);
                            }
                        }
                    >
                        {DeductionType::iter()
                            .map(|k| view! { <option value=k.as_wire()>{k.to_string()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || nd_name.get()
                        on:input=move |ev| nd_name.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Value"
                        prop:value=move || nd_value.get()
                        on:input=move |ev| nd_value.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || if nd_percentage.get() { "PERCENT" } else { "FLAT" }
                        on:change=move |ev| {
                            nd_percentage.set(event_target_value(&ev) == "PERCENT");
                        }
                    >
                        <option value="PERCENT">"Percentage"</option>
                        <option value="FLAT">"Flat amount"</option>
                    </select>
                    <button type="button" class="btn btn-secondary btn-sm" on:click=add_deduction>
                        "Add"
                    </button>
                </div>
                {move || {
                    error_for("deductionName")
                        .or_else(|| error_for("deductionValue"))
                        .map(|m| view! { <div class="field-error">{m}</div> })
                }}
            </div>

            <div class="net-preview">
                <span>"Net salary"</span>
                <span>{move || format_money(net_preview())}</span>
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
