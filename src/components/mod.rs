pub mod charts;
pub mod feedback;
pub mod forms;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod sidebar;

pub use feedback::{EmptyState, ErrorBanner, Spinner};
pub use layout::Layout;
pub use modal::Modal;
