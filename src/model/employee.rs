use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Job title, free text ("Developer", "HR Specialist", ...).
    pub role: String,
    pub department_id: u64,
    pub department_name: String,
    pub contract_type: ContractType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub inactive_from: Option<NaiveDate>,
    pub inactive_to: Option<NaiveDate>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    #[strum(serialize = "Full Time")]
    FullTime,
    #[strum(serialize = "Part Time")]
    PartTime,
    #[strum(serialize = "Remote")]
    Remote,
}

impl ContractType {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "FULL_TIME" => Some(ContractType::FullTime),
            "PART_TIME" => Some(ContractType::PartTime),
            "REMOTE" => Some(ContractType::Remote),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            ContractType::FullTime => "FULL_TIME",
            ContractType::PartTime => "PART_TIME",
            ContractType::Remote => "REMOTE",
        }
    }
}

/// Create/update payload for `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department_id: u64,
    pub contract_type: ContractType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Payload for `PATCH /employees/{id}/status`. The inactive window is
/// passed through as entered; ordering is the server's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub is_active: bool,
    pub inactive_from: Option<NaiveDate>,
    pub inactive_to: Option<NaiveDate>,
}
