//! Wizard state machine
//!
//! All navigation and submission flows through [`Wizard::dispatch`], which
//! applies one [`WizardAction`] and reports what happened as an [`Effect`].
//! Side effects (spawning the submission, showing notifications, leaving the
//! wizard) are left to the caller.

use super::draft::ApplicationDraft;
use super::schema::{StepDescriptor, StepSchema};
use super::validator::{validate_step, ValidationFailure};
use crate::submission::{SubmissionReceipt, SubmitError};
use uuid::Uuid;

/// Where the wizard is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    /// Waiting for the backend, input and navigation are locked
    Submitting,
    Submitted(SubmissionReceipt),
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
    Submit,
    SubmissionSucceeded(SubmissionReceipt),
    SubmissionFailed(SubmitError),
    /// "Submit another application"
    Reset,
}

/// Outcome of a dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    StepChanged { from: usize, to: usize },
    /// The current step has empty required fields
    ValidationFailed(ValidationFailure),
    /// Back was pressed on the first step of a variant that leaves the wizard
    ExitRequested,
    /// The caller must now submit `draft()` and report back
    StartSubmission,
    Submitted(SubmissionReceipt),
    SubmissionFailed(SubmitError),
    Reset,
}

/// One application session: schema, draft, step and phase
#[derive(Debug, Clone)]
pub struct Wizard {
    schema: StepSchema,
    draft: ApplicationDraft,
    step: usize,
    phase: Phase,
    session_id: Uuid,
}

impl Wizard {
    pub fn new(schema: StepSchema) -> Self {
        Self {
            schema,
            draft: ApplicationDraft::default(),
            step: 1,
            phase: Phase::Editing,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Mutable draft access, only while editing
    pub fn draft_mut(&mut self) -> Option<&mut ApplicationDraft> {
        match self.phase {
            Phase::Editing => Some(&mut self.draft),
            Phase::Submitting | Phase::Submitted(_) => None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.schema.total_steps()
    }

    pub fn current_step(&self) -> Option<&StepDescriptor> {
        self.schema.step(self.step)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.phase {
            Phase::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// Completion ratio for the progress bar, in `(0, 1]`
    pub fn progress(&self) -> f64 {
        self.step as f64 / self.total_steps().max(1) as f64
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: WizardAction) -> Effect {
        let editing = matches!(self.phase, Phase::Editing);
        let submitting = self.is_submitting();
        let submitted = self.receipt().is_some();

        let effect = match action {
            WizardAction::Next if editing => self.next(),
            WizardAction::Previous if editing => self.previous(),
            WizardAction::Submit if editing => self.submit(),
            WizardAction::SubmissionSucceeded(receipt) if submitting => {
                self.phase = Phase::Submitted(receipt.clone());
                Effect::Submitted(receipt)
            }
            WizardAction::SubmissionFailed(err) if submitting => {
                self.phase = Phase::Editing;
                Effect::SubmissionFailed(err)
            }
            WizardAction::Reset if submitted => {
                self.draft = ApplicationDraft::default();
                self.step = 1;
                self.phase = Phase::Editing;
                self.session_id = Uuid::new_v4();
                Effect::Reset
            }
            _ => Effect::None,
        };

        if effect != Effect::None {
            tracing::debug!(
                session_id = %self.session_id,
                variant = self.schema.variant.label(),
                step = self.step,
                ?effect,
                "wizard transition"
            );
        }
        effect
    }

    fn next(&mut self) -> Effect {
        if let Err(failure) = validate_step(&self.schema, self.step, &self.draft) {
            return Effect::ValidationFailed(failure);
        }
        let from = self.step;
        self.step = (self.step + 1).min(self.total_steps());
        if self.step == from {
            Effect::None
        } else {
            Effect::StepChanged { from, to: self.step }
        }
    }

    fn previous(&mut self) -> Effect {
        if self.step <= 1 {
            return if self.schema.back_exits_on_first_step() {
                Effect::ExitRequested
            } else {
                Effect::None
            };
        }
        let from = self.step;
        self.step -= 1;
        Effect::StepChanged { from, to: self.step }
    }

    fn submit(&mut self) -> Effect {
        if !self.is_final_step() {
            return Effect::None;
        }
        if let Err(failure) = validate_step(&self.schema, self.step, &self.draft) {
            return Effect::ValidationFailed(failure);
        }
        self.phase = Phase::Submitting;
        Effect::StartSubmission
    }
}
