//! Form domain layer
//!
//! Field editing rules per widget and focus handling within a wizard step.

mod field;
mod form_state;

pub use form_state::{Form, FormFocus, StepForm};
