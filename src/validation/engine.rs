//! Form engine: field values, touched tracking, derived errors, and the
//! edge-triggered ready-to-submit event
//!
//! All operations are synchronous; the error map is recomputed before a
//! call returns, so reads always observe the effect of the last change.
//! Errors are computed eagerly for every field (submit gating needs them),
//! but callers display them only for touched fields via [`FormEngine::visible_error`].

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::field::{FieldId, FieldValues};
use super::schema::Schema;

/// Events emitted by the engine, drained by the caller via
/// [`FormEngine::poll_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The form became valid while the repeat-password field is non-empty.
    /// Fires once per transition, not on every recomputation.
    ReadyToSubmit,
}

#[derive(Debug)]
pub struct FormEngine {
    schema: Schema,
    values: FieldValues,
    touched: HashSet<FieldId>,
    errors: HashMap<FieldId, &'static str>,
    ready: bool,
    events: VecDeque<EngineEvent>,
}

impl FormEngine {
    pub fn new(schema: Schema) -> Self {
        let values = FieldValues::default();
        let errors = schema.evaluate_all(&values);
        Self {
            schema,
            values,
            touched: HashSet::new(),
            errors,
            ready: false,
            events: VecDeque::new(),
        }
    }

    /// Record a new raw value for `field`. Marks the field touched,
    /// re-evaluates it together with its dependents from the schema's
    /// dependency map, and updates the ready edge-trigger.
    pub fn handle_change(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.touched.insert(field);
        self.revalidate(field);
        self.update_ready();
    }

    /// Mark `field` touched without changing its value. Idempotent.
    pub fn handle_blur(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    fn revalidate(&mut self, changed: FieldId) {
        self.apply(changed);
        let dependents = self.schema.dependents(changed).to_vec();
        for dependent in dependents {
            self.apply(dependent);
        }
    }

    fn apply(&mut self, field: FieldId) {
        match self.schema.evaluate(field, &self.values) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn update_ready(&mut self) {
        let ready = self.errors.is_empty() && !self.values.repeat_password.is_empty();
        if ready && !self.ready {
            debug!("form became valid, signalling ready to submit");
            self.events.push_back(EngineEvent::ReadyToSubmit);
        }
        self.ready = ready;
    }

    /// All current errors, touched or not
    pub fn errors(&self) -> &HashMap<FieldId, &'static str> {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Error for `field`, gated on the field having been touched. Display
    /// is gated by touched state; computation is not.
    pub fn visible_error(&self, field: FieldId) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Drain pending events, oldest first
    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    /// Return to the freshly-mounted state: empty values, nothing touched,
    /// edge-trigger re-armed
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.touched.clear();
        self.errors = self.schema.evaluate_all(&self.values);
        self.ready = false;
        self.events.clear();
    }
}
