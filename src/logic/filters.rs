//! Client-side list filtering. Every function is pure: it reads the
//! fetched snapshot and produces a fresh filtered view, so re-running on
//! each keystroke or dropdown change is free of ordering effects.

use crate::model::{Department, Employee, Leave, LeaveStatus, Salary};

/// Case-insensitive substring match over a set of text fields. A blank
/// query imposes no constraint.
pub fn text_match(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}

pub fn filter_departments(departments: &[Department], search: &str) -> Vec<Department> {
    departments
        .iter()
        .filter(|d| text_match(search, &[&d.name]))
        .cloned()
        .collect()
}

/// Search spans name, email and job title; the dropdowns match exactly.
/// All active constraints are ANDed.
pub fn filter_employees(
    employees: &[Employee],
    search: &str,
    department_id: Option<u64>,
    is_active: Option<bool>,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| text_match(search, &[&e.name, &e.email, &e.role]))
        .filter(|e| department_id.map_or(true, |id| e.department_id == id))
        .filter(|e| is_active.map_or(true, |a| e.is_active == a))
        .cloned()
        .collect()
}

pub fn filter_salaries(
    salaries: &[Salary],
    search: &str,
    department_name: Option<&str>,
) -> Vec<Salary> {
    salaries
        .iter()
        .filter(|s| text_match(search, &[&s.employee_name, &s.department_name]))
        .filter(|s| department_name.map_or(true, |d| s.department_name == d))
        .cloned()
        .collect()
}

pub fn filter_leaves(
    leaves: &[Leave],
    status: Option<LeaveStatus>,
    employee_id: Option<u64>,
) -> Vec<Leave> {
    leaves
        .iter()
        .filter(|l| status.map_or(true, |s| l.status == s))
        .filter(|l| employee_id.map_or(true, |id| l.employee_id == id))
        .cloned()
        .collect()
}

/// Distinct department names in first-seen order, for the salary page
/// dropdown.
pub fn department_names(employees: &[Employee]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for e in employees {
        if !names.contains(&e.department_name) {
            names.push(e.department_name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractType;
    use chrono::NaiveDate;

    fn emp(id: u64, name: &str, email: &str, role: &str, dept: u64, active: bool) -> Employee {
        Employee {
            id,
            name: name.into(),
            email: email.into(),
            phone: "555-0199".into(),
            role: role.into(),
            department_id: dept,
            department_name: if dept == 1 { "Engineering" } else { "Finance" }.into(),
            contract_type: ContractType::FullTime,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            end_date: None,
            is_active: active,
            inactive_from: None,
            inactive_to: None,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            emp(1, "Alice Winter", "alice@corp.test", "Developer", 1, true),
            emp(2, "Bob Summer", "bob@corp.test", "Accountant", 2, true),
            emp(3, "Carol Winters", "carol@corp.test", "Developer", 1, false),
        ]
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(text_match("", &["anything"]));
        assert!(text_match("   ", &["anything"]));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let hits = filter_employees(&roster(), "WINT", None, None);
        assert_eq!(hits.len(), 2);
        let hits = filter_employees(&roster(), "accountant", None, None);
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn no_constraints_is_identity() {
        let all = filter_employees(&roster(), "", None, None);
        assert_eq!(all, roster());
    }

    #[test]
    fn dropdowns_match_exactly_and_compose_with_and() {
        let hits = filter_employees(&roster(), "", Some(1), Some(true));
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
        let hits = filter_employees(&roster(), "winter", Some(1), Some(false));
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn filter_order_does_not_matter() {
        // Applying the dropdown constraint to the search result must equal
        // applying the search to the dropdown result.
        let roster = roster();
        let search_first: Vec<Employee> =
            filter_employees(&filter_employees(&roster, "winter", None, None), "", Some(1), None);
        let dept_first: Vec<Employee> =
            filter_employees(&filter_employees(&roster, "", Some(1), None), "winter", None, None);
        assert_eq!(search_first, dept_first);
        assert_eq!(search_first, filter_employees(&roster, "winter", Some(1), None));
    }

    #[test]
    fn department_names_keep_first_seen_order() {
        assert_eq!(department_names(&roster()), vec!["Engineering", "Finance"]);
    }
}
