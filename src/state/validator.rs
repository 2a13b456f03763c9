//! Per-step required field check

use super::draft::{ApplicationDraft, FieldId};
use super::schema::StepSchema;
use std::fmt;

/// A step could not be left because required fields are empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub step: usize,
    /// Empty fields in display order. Empty when the step itself is unknown.
    pub missing: Vec<FieldId>,
}

impl ValidationFailure {
    /// Comma separated list of missing field labels
    pub fn missing_labels(&self) -> String {
        self.missing
            .iter()
            .map(FieldId::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing.is_empty() {
            write!(f, "step {} is not part of this application", self.step)
        } else {
            write!(f, "step {} is missing: {}", self.step, self.missing_labels())
        }
    }
}

/// Check that every required field of `step` is filled in `draft`.
///
/// Steps outside the schema never validate.
pub fn validate_step(
    schema: &StepSchema,
    step: usize,
    draft: &ApplicationDraft,
) -> Result<(), ValidationFailure> {
    let Some(descriptor) = schema.step(step) else {
        return Err(ValidationFailure {
            step,
            missing: Vec::new(),
        });
    };

    let missing: Vec<FieldId> = descriptor
        .required_fields()
        .filter(|field| !draft.is_filled(*field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { step, missing })
    }
}

pub fn is_step_valid(schema: &StepSchema, step: usize, draft: &ApplicationDraft) -> bool {
    validate_step(schema, step, draft).is_ok()
}
