pub mod department;
pub mod employee;
pub mod leave;
pub mod message;
pub mod salary;
pub mod status;

pub use department::DepartmentForm;
pub use employee::EmployeeForm;
pub use leave::LeaveForm;
pub use message::MessageForm;
pub use salary::SalaryForm;
pub use status::StatusForm;
