pub mod analytics;
pub mod department;
pub mod employee;
pub mod leave;
pub mod message;
pub mod role;
pub mod salary;
pub mod user;

pub use analytics::{Analytics, DepartmentBudget, DepartmentSalary, EmployeeTimeline, LabeledCounts, SalaryTotals};
pub use department::{BudgetType, Department, DepartmentDraft};
pub use employee::{ContractType, Employee, EmployeeDraft, StatusChange};
pub use leave::{Leave, LeaveDraft, LeaveStatus};
pub use message::{Message, MessageDraft, MessageStatus};
pub use role::Role;
pub use salary::{Deduction, DeductionType, Salary, SalaryDraft};
pub use user::User;
