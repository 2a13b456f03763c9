//! Declarative step schemas for the desktop and mobile wizards
//!
//! Each variant is an ordered list of steps; each step is an ordered list of
//! field descriptors. The validator, the wizard reducer and the renderer all
//! read from the same schema.

use super::draft::FieldId;
use serde::{Deserialize, Serialize};

/// Presentation variant of the application flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Desktop,
    Mobile,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    pub fn schema(&self) -> StepSchema {
        match self {
            Self::Desktop => StepSchema::desktop(),
            Self::Mobile => StepSchema::mobile(),
        }
    }
}

/// One entry of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Input widget used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    Text,
    Email,
    Phone,
    Url,
    Select(&'static [SelectOption]),
    /// Multiline input with a displayed (not enforced) character budget
    TextArea { soft_limit: usize },
    /// File picker; `accept` is a display hint only
    File { accept: &'static str },
}

impl FieldWidget {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::TextArea { .. })
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            Self::Select(options) => options,
            _ => &[],
        }
    }
}

/// A field shown on a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: FieldId,
    pub label: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
    pub hint: Option<&'static str>,
    pub widget: FieldWidget,
}

impl FieldDescriptor {
    fn new(field: FieldId, label: &'static str, widget: FieldWidget) -> Self {
        Self {
            field,
            label,
            required: false,
            placeholder: "",
            hint: None,
            widget,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Attachments are never required
    fn file(
        field: FieldId,
        label: &'static str,
        placeholder: &'static str,
        accept: &'static str,
    ) -> Self {
        Self::new(field, label, FieldWidget::File { accept }).placeholder(placeholder)
    }

    /// Label with the required/optional marker
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            format!("{} (Optional)", self.label)
        }
    }
}

/// One screen of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub fields: Vec<FieldDescriptor>,
}

impl StepDescriptor {
    /// Fields that must be filled before leaving this step, in display order
    pub fn required_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields
            .iter()
            .filter(|d| d.required && !d.field.is_attachment())
            .map(|d| d.field)
    }

    pub fn descriptor(&self, field: FieldId) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.field == field)
    }
}

/// Title and body of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub title: &'static str,
    pub description: &'static str,
}

/// Variant-specific wording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCopy {
    pub next_label: &'static str,
    pub previous_label: &'static str,
    /// Label of the back control on the first step, if it leaves the wizard
    pub exit_label: Option<&'static str>,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    pub next_invalid: Message,
    pub submit_invalid: Message,
    pub submitted: Message,
    pub submit_failed: Message,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub success_details: &'static [&'static str],
    pub response_time: Option<&'static str>,
    pub show_application_id: bool,
    pub back_home_label: Option<&'static str>,
}

/// Complete wizard definition for a variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    pub variant: Variant,
    pub steps: Vec<StepDescriptor>,
    pub copy: VariantCopy,
}

const DESKTOP_POSITIONS: &[SelectOption] = &[
    opt("frontend-developer", "Frontend Developer"),
    opt("backend-developer", "Backend Developer"),
    opt("fullstack-developer", "Full Stack Developer"),
    opt("ui-ux-designer", "UI/UX Designer"),
    opt("product-manager", "Product Manager"),
    opt("data-scientist", "Data Scientist"),
    opt("devops-engineer", "DevOps Engineer"),
    opt("marketing-specialist", "Marketing Specialist"),
];

const MOBILE_POSITIONS: &[SelectOption] = &[
    opt("frontend", "Frontend Developer"),
    opt("backend", "Backend Developer"),
    opt("fullstack", "Full Stack Developer"),
    opt("mobile", "Mobile Developer"),
    opt("designer", "UI/UX Designer"),
    opt("product", "Product Manager"),
    opt("data", "Data Scientist"),
    opt("devops", "DevOps Engineer"),
    opt("marketing", "Marketing Specialist"),
    opt("sales", "Sales Representative"),
];

const DESKTOP_EXPERIENCE: &[SelectOption] = &[
    opt("0-1", "0-1 years (Entry Level)"),
    opt("2-3", "2-3 years (Junior)"),
    opt("4-6", "4-6 years (Mid-Level)"),
    opt("7-10", "7-10 years (Senior)"),
    opt("10+", "10+ years (Expert)"),
];

const MOBILE_EXPERIENCE: &[SelectOption] = &[
    opt("0-1", "0-1 years (Entry Level)"),
    opt("2-3", "2-3 years (Junior)"),
    opt("4-6", "4-6 years (Mid-Level)"),
    opt("7-10", "7-10 years (Senior)"),
    opt("10+", "10+ years (Expert/Lead)"),
];

const DESKTOP_LOCATIONS: &[SelectOption] = &[
    opt("remote", "Remote"),
    opt("hybrid", "Hybrid"),
    opt("onsite-nyc", "On-site (New York)"),
    opt("onsite-sf", "On-site (San Francisco)"),
    opt("onsite-la", "On-site (Los Angeles)"),
    opt("onsite-chicago", "On-site (Chicago)"),
];

const MOBILE_LOCATIONS: &[SelectOption] = &[
    opt("remote", "Remote"),
    opt("hybrid", "Hybrid"),
    opt("onsite-nyc", "On-site (New York)"),
    opt("onsite-sf", "On-site (San Francisco)"),
    opt("onsite-la", "On-site (Los Angeles)"),
    opt("onsite-chicago", "On-site (Chicago)"),
    opt("onsite-other", "On-site (Other)"),
];

const EDUCATION: &[SelectOption] = &[
    opt("high-school", "High School"),
    opt("bootcamp", "Coding Bootcamp"),
    opt("associate", "Associate Degree"),
    opt("bachelor", "Bachelor's Degree"),
    opt("master", "Master's Degree"),
    opt("phd", "PhD"),
    opt("self-taught", "Self-Taught"),
];

const PORTFOLIO_PLACEHOLDER: &str =
    "https://yourportfolio.com or https://linkedin.com/in/yourprofile";

/// Displayed cover letter budget
pub const COVER_LETTER_SOFT_LIMIT: usize = 500;

fn contact_fields(
    first: &'static str,
    last: &'static str,
    email: &'static str,
) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(FieldId::FirstName, "First Name", FieldWidget::Text)
            .required()
            .placeholder(first),
        FieldDescriptor::new(FieldId::LastName, "Last Name", FieldWidget::Text)
            .required()
            .placeholder(last),
        FieldDescriptor::new(FieldId::Email, "Email Address", FieldWidget::Email)
            .required()
            .placeholder(email),
        FieldDescriptor::new(FieldId::Phone, "Phone Number", FieldWidget::Phone)
            .required()
            .placeholder("+1 (555) 123-4567"),
    ]
}

fn cover_letter(placeholder: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(
        FieldId::CoverLetter,
        "Cover Letter",
        FieldWidget::TextArea {
            soft_limit: COVER_LETTER_SOFT_LIMIT,
        },
    )
    .required()
    .placeholder(placeholder)
}

impl StepSchema {
    /// Three-step flow: personal, professional, additional
    pub fn desktop() -> Self {
        let steps = vec![
            StepDescriptor {
                title: "Personal Information",
                subtitle: None,
                fields: contact_fields(
                    "Enter your first name",
                    "Enter your last name",
                    "your.email@example.com",
                ),
            },
            StepDescriptor {
                title: "Professional Details",
                subtitle: None,
                fields: vec![
                    FieldDescriptor::new(
                        FieldId::Position,
                        "Position Applied For",
                        FieldWidget::Select(DESKTOP_POSITIONS),
                    )
                    .required()
                    .placeholder("Select a position"),
                    FieldDescriptor::new(
                        FieldId::Experience,
                        "Years of Experience",
                        FieldWidget::Select(DESKTOP_EXPERIENCE),
                    )
                    .required()
                    .placeholder("Select experience level"),
                    FieldDescriptor::new(
                        FieldId::Location,
                        "Preferred Work Location",
                        FieldWidget::Select(DESKTOP_LOCATIONS),
                    )
                    .required()
                    .placeholder("Select work preference"),
                    FieldDescriptor::new(
                        FieldId::Portfolio,
                        "Portfolio/LinkedIn URL",
                        FieldWidget::Url,
                    )
                    .placeholder(PORTFOLIO_PLACEHOLDER),
                ],
            },
            StepDescriptor {
                title: "Additional Information",
                subtitle: None,
                fields: vec![
                    FieldDescriptor::file(
                        FieldId::Resume,
                        "Resume Upload",
                        "Type a path to your resume (PDF, DOC, DOCX)",
                        ".pdf,.doc,.docx",
                    ),
                    cover_letter(
                        "Tell us why you're interested in this position and what makes you a great fit for our team...",
                    ),
                ],
            },
        ];

        Self {
            variant: Variant::Desktop,
            steps,
            copy: VariantCopy {
                next_label: "Next",
                previous_label: "Previous",
                exit_label: None,
                submit_label: "Submit Application",
                submitting_label: "Submitting...",
                next_invalid: Message {
                    title: "Please fill in all required fields",
                    description: "Complete all fields before proceeding to the next step.",
                },
                submit_invalid: Message {
                    title: "Please fill in all required fields",
                    description: "Complete all fields before submitting.",
                },
                submitted: Message {
                    title: "Application submitted successfully!",
                    description: "We'll review your application and get back to you soon.",
                },
                submit_failed: Message {
                    title: "Submission failed",
                    description: "We couldn't submit your application. Your answers are kept, please try again.",
                },
                success_title: "Application Submitted!",
                success_body: "Thank you for your interest in joining our team. We've received your application and will review it carefully.",
                success_details: &[
                    "You'll receive a confirmation email shortly.",
                    "We typically respond within 3-5 business days.",
                ],
                response_time: None,
                show_application_id: false,
                back_home_label: None,
            },
        }
    }

    /// Four-step flow with company, education and skills, for narrow screens
    pub fn mobile() -> Self {
        let mut personal = vec![FieldDescriptor::file(
            FieldId::ProfilePhoto,
            "Profile Photo",
            "Add a professional photo",
            "image/*",
        )];
        personal.extend(contact_fields("John", "Doe", "john.doe@example.com"));

        let steps = vec![
            StepDescriptor {
                title: "Personal Info",
                subtitle: Some("Let's start with the basics"),
                fields: personal,
            },
            StepDescriptor {
                title: "Job Details",
                subtitle: Some("Tell us about your target role"),
                fields: vec![
                    FieldDescriptor::new(
                        FieldId::Position,
                        "Position Applied For",
                        FieldWidget::Select(MOBILE_POSITIONS),
                    )
                    .required()
                    .placeholder("Select a position"),
                    FieldDescriptor::new(FieldId::Company, "Target Company", FieldWidget::Text)
                        .required()
                        .placeholder("Company name or 'Open to opportunities'"),
                    FieldDescriptor::new(
                        FieldId::Experience,
                        "Years of Experience",
                        FieldWidget::Select(MOBILE_EXPERIENCE),
                    )
                    .required()
                    .placeholder("Select experience level"),
                ],
            },
            StepDescriptor {
                title: "Background",
                subtitle: Some("Your education and skills"),
                fields: vec![
                    FieldDescriptor::new(
                        FieldId::Education,
                        "Education",
                        FieldWidget::Select(EDUCATION),
                    )
                    .required()
                    .placeholder("Select education level"),
                    FieldDescriptor::new(
                        FieldId::Location,
                        "Preferred Work Location",
                        FieldWidget::Select(MOBILE_LOCATIONS),
                    )
                    .required()
                    .placeholder("Select work preference"),
                    FieldDescriptor::new(FieldId::Skills, "Key Skills", FieldWidget::Text)
                        .required()
                        .placeholder("React, Node.js, Python, TypeScript, AWS...")
                        .hint("Separate skills with commas"),
                ],
            },
            StepDescriptor {
                title: "Final Details",
                subtitle: Some("Cover letter and documents"),
                fields: vec![
                    FieldDescriptor::file(
                        FieldId::Resume,
                        "Resume Upload",
                        "Type a path to your resume",
                        ".pdf,.doc,.docx",
                    ),
                    cover_letter(
                        "Tell us why you're interested in this position and what makes you a great fit...",
                    ),
                ],
            },
        ];

        Self {
            variant: Variant::Mobile,
            steps,
            copy: VariantCopy {
                next_label: "Continue",
                previous_label: "Back",
                exit_label: Some("Home"),
                submit_label: "Submit Application",
                submitting_label: "Submitting...",
                next_invalid: Message {
                    title: "Missing Information",
                    description: "Please fill in all required fields to continue.",
                },
                submit_invalid: Message {
                    title: "Incomplete Application",
                    description: "Please complete all required fields.",
                },
                submitted: Message {
                    title: "Application Submitted! 🎉",
                    description: "We'll be in touch within 24 hours.",
                },
                submit_failed: Message {
                    title: "Submission Failed",
                    description: "Check your connection and try again.",
                },
                success_title: "You're All Set!",
                success_body: "Your application has been submitted successfully. We'll review it and get back to you soon.",
                success_details: &[],
                response_time: Some("24-48 hours"),
                show_application_id: true,
                back_home_label: Some("Back to Home"),
            },
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step descriptor by 1-based index
    pub fn step(&self, step: usize) -> Option<&StepDescriptor> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    /// Whether "back" on the first step leaves the wizard
    pub fn back_exits_on_first_step(&self) -> bool {
        self.copy.exit_label.is_some()
    }
}
