use derive_more::{Display, Error};

pub mod budget;
pub mod filters;
pub mod format;
pub mod leave;
pub mod lists;
pub mod messages;
pub mod payroll;

/// Validation failure tied to a single form field, rendered inline next
/// to the input it names.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(fmt = "{}", message)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The message when this error belongs to `field`, otherwise None.
    /// Lets forms place each error under its own input.
    pub fn for_field(&self, field: &str) -> Option<String> {
        (self.field == field).then(|| self.message.clone())
    }
}
