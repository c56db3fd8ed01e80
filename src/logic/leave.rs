//! Leave request rules: inclusive duration, request validation and the
//! pending-only status lifecycle.

use chrono::NaiveDate;

use super::format::parse_date;
use super::FieldError;
use crate::model::{Employee, LeaveDraft, LeaveStatus};

/// Inclusive day count of a leave window. Start and end on the same day
/// counts as one day.
pub fn leave_duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Whether a leave may still be approved or denied. Approved and Denied
/// are terminal; the UI renders no transition controls for them.
pub fn can_transition(status: LeaveStatus) -> bool {
    matches!(status, LeaveStatus::Pending)
}

/// Checks the date window and reason. Field values arrive as the raw
/// strings of the date inputs so a cleared input and a never-filled
/// input are the same case.
pub fn validate_leave_window(
    start: &str,
    end: &str,
    reason: &str,
) -> Result<(NaiveDate, NaiveDate, String), FieldError> {
    let start_date = parse_date(start)
        .ok_or_else(|| FieldError::new("startDate", "Start date is required"))?;
    let end_date =
        parse_date(end).ok_or_else(|| FieldError::new("endDate", "End date is required"))?;

    if end_date < start_date {
        return Err(FieldError::new("endDate", "End date must be after start date"));
    }

    let reason = reason.trim();
    if reason.is_empty() {
        return Err(FieldError::new("reason", "Reason is required"));
    }

    Ok((start_date, end_date, reason.to_string()))
}

/// Validates raw form input against the employee roster and builds the
/// create payload. Only known, active employees may take leave.
pub fn validate_leave(
    employee_id: u64,
    start: &str,
    end: &str,
    reason: &str,
    employees: &[Employee],
) -> Result<LeaveDraft, FieldError> {
    let known_active = employees.iter().any(|e| e.id == employee_id && e.is_active);
    if !known_active {
        return Err(FieldError::new("employeeId", "Select an active employee"));
    }

    let (start_date, end_date, reason) = validate_leave_window(start, end, reason)?;

    Ok(LeaveDraft {
        employee_id,
        start_date,
        end_date,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, true),
            employee(2, false),
        ]
    }

    fn employee(id: u64, is_active: bool) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            email: format!("e{id}@corp.test"),
            phone: "555-0100".into(),
            role: "Developer".into(),
            department_id: 1,
            department_name: "Engineering".into(),
            contract_type: ContractType::FullTime,
            start_date: d(2022, 1, 1),
            end_date: None,
            is_active,
            inactive_from: None,
            inactive_to: None,
        }
    }

    #[test]
    fn same_day_leave_is_one_day() {
        assert_eq!(leave_duration_days(d(2023, 5, 15), d(2023, 5, 15)), 1);
    }

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(leave_duration_days(d(2023, 5, 15), d(2023, 5, 20)), 6);
    }

    #[test]
    fn valid_request_builds_draft() {
        let draft =
            validate_leave(1, "2023-05-15", "2023-05-20", "  family event ", &staff()).unwrap();
        assert_eq!(draft.start_date, d(2023, 5, 15));
        assert_eq!(draft.end_date, d(2023, 5, 20));
        assert_eq!(draft.reason, "family event");
    }

    #[test]
    fn start_equal_to_end_is_accepted() {
        assert!(validate_leave(1, "2023-05-15", "2023-05-15", "checkup", &staff()).is_ok());
    }

    #[test]
    fn end_before_start_flags_the_end_field() {
        let err =
            validate_leave(1, "2023-05-20", "2023-05-15", "trip", &staff()).unwrap_err();
        assert_eq!(err.field, "endDate");
        assert_eq!(err.message, "End date must be after start date");
    }

    #[test]
    fn missing_dates_are_field_errors() {
        let err = validate_leave(1, "", "2023-05-20", "trip", &staff()).unwrap_err();
        assert_eq!(err.field, "startDate");
        let err = validate_leave(1, "2023-05-15", "", "trip", &staff()).unwrap_err();
        assert_eq!(err.field, "endDate");
    }

    #[test]
    fn blank_reason_is_rejected() {
        let err = validate_leave(1, "2023-05-15", "2023-05-16", "   ", &staff()).unwrap_err();
        assert_eq!(err.field, "reason");
        assert_eq!(err.message, "Reason is required");
    }

    #[test]
    fn inactive_or_unknown_employee_is_rejected() {
        let err = validate_leave(2, "2023-05-15", "2023-05-16", "trip", &staff()).unwrap_err();
        assert_eq!(err.field, "employeeId");
        assert!(validate_leave(99, "2023-05-15", "2023-05-16", "trip", &staff()).is_err());
    }

    #[test]
    fn only_pending_can_transition() {
        assert!(can_transition(LeaveStatus::Pending));
        assert!(!can_transition(LeaveStatus::Approved));
        assert!(!can_transition(LeaveStatus::Denied));
    }
}
