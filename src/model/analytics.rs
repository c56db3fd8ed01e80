use serde::{Deserialize, Serialize};

/// Aggregated dashboard payload from `GET /analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub department_budget: DepartmentBudget,
    pub salary_data: SalaryTotals,
    pub employee_distribution: LabeledCounts,
    pub leave_status: LabeledCounts,
    pub role_distribution: LabeledCounts,
    pub contract_type_distribution: LabeledCounts,
    pub employee_timeline: EmployeeTimeline,
}

/// Parallel label/count arrays. Counts are addressed by label, never by
/// position; an absent label reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledCounts {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
}

impl LabeledCounts {
    pub fn count_for(&self, label: &str) -> u32 {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|i| self.counts.get(i).copied())
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Label/count pairs in wire order, for chart rendering.
    pub fn pairs(&self) -> Vec<(String, u32)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.counts.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBudget {
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub budget: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryTotals {
    pub total_gross: f64,
    pub total_net: f64,
    pub average_salary: f64,
    pub department_salaries: Vec<DepartmentSalary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSalary {
    pub department: String,
    pub total_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTimeline {
    pub months: Vec<String>,
    pub active: Vec<u32>,
    pub inactive: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> LabeledCounts {
        LabeledCounts {
            labels: vec!["Pending".into(), "Approved".into(), "Denied".into()],
            counts: vec![5, 12, 2],
        }
    }

    #[test]
    fn count_for_scans_by_label() {
        let c = counts();
        assert_eq!(c.count_for("Approved"), 12);
        assert_eq!(c.count_for("Pending"), 5);
        assert_eq!(c.count_for("Denied"), 2);
    }

    #[test]
    fn unknown_label_reads_zero() {
        assert_eq!(counts().count_for("Cancelled"), 0);
        assert_eq!(counts().count_for("approved"), 0);
    }

    #[test]
    fn total_is_sum_of_counts() {
        assert_eq!(counts().total(), 19);
    }

    #[test]
    fn ragged_arrays_read_zero_past_the_end() {
        let c = LabeledCounts {
            labels: vec!["Active".into(), "Inactive".into()],
            counts: vec![7],
        };
        assert_eq!(c.count_for("Active"), 7);
        assert_eq!(c.count_for("Inactive"), 0);
    }

    #[test]
    fn decodes_wire_payload() {
        let json = r#"{
            "departmentBudget": {"labels": ["Engineering"], "actual": [40000.0], "budget": [50000.0]},
            "salaryData": {
                "totalGross": 125000.0,
                "totalNet": 98000.0,
                "averageSalary": 5200.0,
                "departmentSalaries": [{"department": "Engineering", "totalSalary": 60000.0}]
            },
            "employeeDistribution": {"labels": ["Active", "Inactive"], "counts": [18, 3]},
            "leaveStatus": {"labels": ["Pending", "Approved", "Denied"], "counts": [5, 12, 2]},
            "roleDistribution": {"labels": ["Manager", "Developer"], "counts": [4, 11]},
            "contractTypeDistribution": {"labels": ["Full Time", "Remote"], "counts": [14, 7]},
            "employeeTimeline": {"months": ["Jan", "Feb"], "active": [15, 16], "inactive": [2, 2]}
        }"#;
        let a: Analytics = serde_json::from_str(json).expect("analytics payload");
        assert_eq!(a.employee_distribution.count_for("Active"), 18);
        assert_eq!(a.salary_data.department_salaries[0].department, "Engineering");
        assert_eq!(a.employee_timeline.months.len(), 2);
    }
}
