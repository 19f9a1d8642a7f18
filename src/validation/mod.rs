//! Validation micro-engine: declarative schema, per-field and cross-field
//! rules, touched tracking, and the ready-to-submit edge trigger

mod engine;
mod field;
pub mod rules;
mod schema;

pub use engine::{EngineEvent, FormEngine};
pub use field::{FieldId, FieldValues};
pub use schema::Schema;
