//! Submit collaborator for the registration form

use crate::validation::FieldValues;
use tracing::info;

/// Trait for the submit handler, enabling mocking in tests. Only invoked
/// with a fully valid form.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn submit(&mut self, values: &FieldValues);
}

/// Diagnostic handler that logs the submission and does nothing else
#[derive(Debug, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn submit(&mut self, values: &FieldValues) {
        // Passwords are never written to the log
        info!(email = %values.email, "registration submitted");
    }
}
