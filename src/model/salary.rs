use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub id: u64,
    pub employee_id: u64,
    pub employee_name: String,
    pub department_name: String,
    pub gross_salary: f64,
    pub net_salary: f64,
    pub deductions: Vec<Deduction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: DeductionType,
    pub name: String,
    pub value: f64,
    pub is_percentage: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeductionType {
    Tax,
    Insurance,
    Custom,
}

impl DeductionType {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "TAX" => Some(DeductionType::Tax),
            "INSURANCE" => Some(DeductionType::Insurance),
            "CUSTOM" => Some(DeductionType::Custom),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            DeductionType::Tax => "TAX",
            DeductionType::Insurance => "INSURANCE",
            DeductionType::Custom => "CUSTOM",
        }
    }
}

/// Create/update payload for `POST /salaries` and `PUT /salaries/{id}`.
/// The server recomputes and stores the net amount from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDraft {
    pub employee_id: u64,
    pub gross_salary: f64,
    pub deductions: Vec<Deduction>,
}
