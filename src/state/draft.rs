//! Application draft value type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifies a single field of the application draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Position,
    Company,
    Experience,
    Education,
    Location,
    Skills,
    Portfolio,
    CoverLetter,
    Resume,
    ProfilePhoto,
}

impl FieldId {
    /// Human readable name, used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Position => "Position",
            Self::Company => "Target Company",
            Self::Experience => "Years of Experience",
            Self::Education => "Education",
            Self::Location => "Preferred Work Location",
            Self::Skills => "Key Skills",
            Self::Portfolio => "Portfolio URL",
            Self::CoverLetter => "Cover Letter",
            Self::Resume => "Resume",
            Self::ProfilePhoto => "Profile Photo",
        }
    }

    /// Attachment fields hold a file handle instead of text
    pub fn is_attachment(&self) -> bool {
        matches!(self, Self::Resume | Self::ProfilePhoto)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque handle to a user-selected file.
///
/// Only the path is kept; the file is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub path: PathBuf,
}

impl Attachment {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name shown in place of the upload prompt
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// All values entered during one application session.
///
/// The default value is the empty draft a session starts from and is reset to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub company: String,
    pub experience: String,
    pub education: String,
    pub location: String,
    pub skills: String,
    pub portfolio: String,
    pub cover_letter: String,
    pub resume: Option<Attachment>,
    pub profile_photo: Option<Attachment>,
}

impl ApplicationDraft {
    /// Text value of a field, `None` for attachment fields
    pub fn text(&self, field: FieldId) -> Option<&str> {
        let value = match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Position => &self.position,
            FieldId::Company => &self.company,
            FieldId::Experience => &self.experience,
            FieldId::Education => &self.education,
            FieldId::Location => &self.location,
            FieldId::Skills => &self.skills,
            FieldId::Portfolio => &self.portfolio,
            FieldId::CoverLetter => &self.cover_letter,
            FieldId::Resume | FieldId::ProfilePhoto => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let value = match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Position => &mut self.position,
            FieldId::Company => &mut self.company,
            FieldId::Experience => &mut self.experience,
            FieldId::Education => &mut self.education,
            FieldId::Location => &mut self.location,
            FieldId::Skills => &mut self.skills,
            FieldId::Portfolio => &mut self.portfolio,
            FieldId::CoverLetter => &mut self.cover_letter,
            FieldId::Resume | FieldId::ProfilePhoto => return None,
        };
        Some(value)
    }

    /// Attachment value of a field, `None` if unset or not an attachment field
    pub fn attachment(&self, field: FieldId) -> Option<&Attachment> {
        match field {
            FieldId::Resume => self.resume.as_ref(),
            FieldId::ProfilePhoto => self.profile_photo.as_ref(),
            _ => None,
        }
    }

    /// Replace a text field. Returns false for attachment fields.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: FieldId, c: char) {
        if let Some(slot) = self.text_mut(field) {
            slot.push(c);
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: FieldId) {
        if let Some(slot) = self.text_mut(field) {
            slot.pop();
        }
    }

    /// Replace an attachment field. Returns false for text fields.
    pub fn set_attachment(&mut self, field: FieldId, attachment: Option<Attachment>) -> bool {
        match field {
            FieldId::Resume => self.resume = attachment,
            FieldId::ProfilePhoto => self.profile_photo = attachment,
            _ => return false,
        }
        true
    }

    /// Builder-style update, consumes and returns the draft
    #[cfg(test)]
    pub fn with_text(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    /// Presence check used by the validator.
    ///
    /// Text counts as present when non-empty, so whitespace-only input passes.
    pub fn is_filled(&self, field: FieldId) -> bool {
        match self.text(field) {
            Some(value) => !value.is_empty(),
            None => self.attachment(field).is_some(),
        }
    }
}
