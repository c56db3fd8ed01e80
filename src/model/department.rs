use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: u64,
    pub name: String,
    pub budget: f64,
    pub budget_type: BudgetType,
    pub current_expenses: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetType {
    Monthly,
    Yearly,
}

impl BudgetType {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "MONTHLY" => Some(BudgetType::Monthly),
            "YEARLY" => Some(BudgetType::Yearly),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            BudgetType::Monthly => "MONTHLY",
            BudgetType::Yearly => "YEARLY",
        }
    }
}

/// Create/update payload for `POST /departments` and `PUT /departments/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
    pub budget: f64,
    pub budget_type: BudgetType,
}
