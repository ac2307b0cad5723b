//! Multi-step wizard for adding an exercise.
//!
//! A [`Wizard`] is created for each run and dropped when the user leaves it. It owns the
//! draft store, the current step and the overview state.

mod overview;
mod state;
mod step;
mod variation;

use liftlog_domain::ExerciseSubmissionService;

pub use overview::{Overview, OverviewError, SubmissionState};
pub use state::{
    Action, DraftError, ExerciseDraft, PendingImage, TranslationDraft, TranslationSlot,
    WizardStore, reduce,
};
pub use step::WizardStep;
pub use variation::{Candidate, VariationStep};

#[derive(Debug, Default)]
pub struct Wizard {
    store: WizardStore,
    step: WizardStep,
    overview: Overview,
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ExerciseDraft {
        self.store.draft()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn overview(&self) -> &Overview {
        &self.overview
    }

    /// Applies an action to the draft.
    ///
    /// Once the submission has started only [`Action::Reset`] has an effect.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Reset => self.reset(),
            action if self.overview.can_go_back() => self.store.dispatch(action),
            _ => {}
        }
    }

    /// Discards the draft and starts over at the first step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to the next step if the current step is complete.
    pub fn go_next(&mut self) -> Result<WizardStep, DraftError> {
        self.step.validate(self.store.draft())?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves to the previous step unless the submission has started.
    pub fn go_back(&mut self) -> Option<WizardStep> {
        if !self.overview.can_go_back() {
            return None;
        }
        self.step = self.step.previous()?;
        Some(self.step)
    }

    pub async fn submit<S: ExerciseSubmissionService>(
        &mut self,
        service: &S,
        author: &str,
    ) -> Result<(), OverviewError> {
        self.overview
            .submit(service, self.store.draft(), author)
            .await?;
        if matches!(self.overview.state(), SubmissionState::Done(_)) {
            self.store.dispatch(Action::Reset);
        }
        Ok(())
    }
}
