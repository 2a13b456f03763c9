//! Widget-specific editing of draft fields

use crate::state::draft::{ApplicationDraft, Attachment};
use crate::state::schema::{FieldDescriptor, FieldWidget, SelectOption};

impl FieldDescriptor {
    /// Currently selected option of a select field
    pub fn selected_option(&self, draft: &ApplicationDraft) -> Option<&'static SelectOption> {
        let value = draft.text(self.field)?;
        self.widget.options().iter().find(|o| o.value == value)
    }

    /// Raw editable text; attachments edit their path
    pub fn raw_value(&self, draft: &ApplicationDraft) -> String {
        match self.widget {
            FieldWidget::File { .. } => draft
                .attachment(self.field)
                .map(|a| a.path().display().to_string())
                .unwrap_or_default(),
            _ => draft.text(self.field).unwrap_or_default().to_string(),
        }
    }

    /// Value shown when the field is not being edited
    pub fn display_value(&self, draft: &ApplicationDraft) -> String {
        match self.widget {
            FieldWidget::Select(_) => self
                .selected_option(draft)
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
            FieldWidget::File { .. } => draft
                .attachment(self.field)
                .map(Attachment::file_name)
                .unwrap_or_default(),
            _ => self.raw_value(draft),
        }
    }

    /// Character counter for text areas, `(used, budget)`
    pub fn char_count(&self, draft: &ApplicationDraft) -> Option<(usize, usize)> {
        match self.widget {
            FieldWidget::TextArea { soft_limit } => {
                let used = draft.text(self.field).map_or(0, |t| t.chars().count());
                Some((used, soft_limit))
            }
            _ => None,
        }
    }

    /// Type a character into the field. Select fields ignore typing.
    pub fn push_char(&self, draft: &mut ApplicationDraft, c: char) {
        match self.widget {
            FieldWidget::Select(_) => {}
            FieldWidget::File { .. } => {
                let mut path = self.raw_value(draft);
                path.push(c);
                draft.set_attachment(self.field, Some(Attachment::from_path(path)));
            }
            _ => draft.push_char(self.field, c),
        }
    }

    /// Backspace. Clears a select field, shortens a path until the attachment is removed.
    pub fn pop_char(&self, draft: &mut ApplicationDraft) {
        match self.widget {
            FieldWidget::Select(_) => {
                draft.set_text(self.field, "");
            }
            FieldWidget::File { .. } => {
                let mut path = self.raw_value(draft);
                path.pop();
                let attachment = (!path.is_empty()).then(|| Attachment::from_path(path));
                draft.set_attachment(self.field, attachment);
            }
            _ => draft.pop_char(self.field),
        }
    }

    /// Insert a line break; only text areas accept one
    pub fn push_newline(&self, draft: &mut ApplicationDraft) -> bool {
        if self.widget.is_multiline() {
            draft.push_char(self.field, '\n');
            true
        } else {
            false
        }
    }

    /// Move a select field to the next or previous option, wrapping around.
    /// An empty select starts at the first (forward) or last (backward) option.
    pub fn cycle_option(&self, draft: &mut ApplicationDraft, forward: bool) {
        let options = self.widget.options();
        if options.is_empty() {
            return;
        }
        let current = draft
            .text(self.field)
            .and_then(|value| options.iter().position(|o| o.value == value));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        draft.set_text(self.field, options[next].value);
    }
}
