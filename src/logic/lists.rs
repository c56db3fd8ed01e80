//! Snapshot patching. Pages that merge a confirmed mutation into their
//! in-memory list do it through these helpers, so the merge is a pure
//! list-in/list-out step.

use crate::model::{Department, Employee, Leave, Message, Salary};

pub trait HasId {
    fn id(&self) -> u64;
}

macro_rules! impl_has_id {
    ($($t:ty),+) => {
        $(impl HasId for $t {
            fn id(&self) -> u64 {
                self.id
            }
        })+
    };
}

impl_has_id!(Department, Employee, Salary, Leave, Message);

/// Replaces the entry with the same id, or appends when none exists.
pub fn upsert<T: HasId + Clone>(list: &[T], item: T) -> Vec<T> {
    let mut out = list.to_vec();
    match out.iter().position(|x| x.id() == item.id()) {
        Some(i) => out[i] = item,
        None => out.push(item),
    }
    out
}

pub fn remove<T: HasId + Clone>(list: &[T], id: u64) -> Vec<T> {
    list.iter().filter(|x| x.id() != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BudgetType, DepartmentDraft};

    fn dept(id: u64, name: &str, budget: f64) -> Department {
        Department {
            id,
            name: name.into(),
            budget,
            budget_type: BudgetType::Monthly,
            current_expenses: 0.0,
        }
    }

    #[test]
    fn upsert_appends_unknown_ids() {
        let list = vec![dept(1, "Engineering", 50000.0)];
        let out = upsert(&list, dept(2, "Finance", 30000.0));
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name, "Finance");
    }

    #[test]
    fn upsert_replaces_in_place() {
        let list = vec![dept(1, "Engineering", 50000.0), dept(2, "Finance", 30000.0)];
        let out = upsert(&list, dept(1, "Platform", 60000.0));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Platform");
        assert_eq!(out[1].name, "Finance");
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let list = vec![dept(1, "Engineering", 50000.0), dept(2, "Finance", 30000.0)];
        let out = remove(&list, 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
        assert_eq!(remove(&out, 99), out);
    }

    #[test]
    fn created_department_survives_the_wire_and_the_merge() {
        // Draft -> request body -> response body (id assigned server-side)
        // -> merged list, preserving what the user entered.
        let draft = DepartmentDraft {
            name: "Research".into(),
            budget: 75000.0,
            budget_type: BudgetType::Yearly,
        };
        let mut body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["budgetType"], "YEARLY");
        body["id"] = 7.into();
        body["currentExpenses"] = 0.into();
        let created: Department = serde_json::from_value(body).unwrap();

        let merged = upsert(&[dept(1, "Engineering", 50000.0)], created);
        let found = merged.iter().find(|d| d.id == 7).unwrap();
        assert_eq!(found.name, "Research");
        assert_eq!(found.budget, 75000.0);
        assert_eq!(found.budget_type, BudgetType::Yearly);
    }
}
