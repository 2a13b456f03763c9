//! Focus handling within a wizard step

use crate::state::draft::FieldId;
use crate::state::schema::{FieldDescriptor, StepDescriptor};

/// Trait for common form focus operations
pub trait Form {
    /// Number of focusable rows, including the buttons row
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldId),
    Buttons,
}

/// Focus state for the fields of one step followed by the navigation buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepForm {
    pub active_field_index: usize,
    fields: Vec<FieldId>,
    /// Which navigation button is selected (0=Back, 1=Next/Submit)
    pub selected_button: usize,
}

impl StepForm {
    pub const BACK_BUTTON: usize = 0;
    pub const FORWARD_BUTTON: usize = 1;
    const BUTTON_COUNT: usize = 2;

    pub fn for_step(step: &StepDescriptor) -> Self {
        Self {
            active_field_index: 0,
            fields: step.fields.iter().map(|d| d.field).collect(),
            selected_button: Self::FORWARD_BUTTON,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn focus(&self) -> FormFocus {
        match self.fields.get(self.active_field_index) {
            Some(field) => FormFocus::Field(*field),
            None => FormFocus::Buttons,
        }
    }

    /// Descriptor of the focused field, `None` on the buttons row
    pub fn active_descriptor<'a>(&self, step: &'a StepDescriptor) -> Option<&'a FieldDescriptor> {
        match self.focus() {
            FormFocus::Field(field) => step.descriptor(field),
            FormFocus::Buttons => None,
        }
    }

    /// Jump focus to a field of this step
    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(index) = self.fields.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    pub fn focus_buttons(&mut self) {
        self.active_field_index = self.fields.len();
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % Self::BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = Self::BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Form for StepForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}
