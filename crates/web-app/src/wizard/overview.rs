//! Final wizard step that submits the exercise.
//!
//! The submission runs at most once per wizard: `Initial` → `Loading` → `Done` or `Failed`.
//! Both end states are terminal. Going back to earlier steps is only possible before the
//! submission has started.

use liftlog_domain::{self as domain, ExerciseSubmissionService};
use log::info;

use super::state::{DraftError, ExerciseDraft};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Initial,
    Loading,
    Done(domain::Committed),
    Failed {
        stage: domain::SubmissionStage,
        committed: domain::Committed,
        message: String,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OverviewError {
    #[error("exercise was already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Draft(#[from] DraftError),
}

#[derive(Debug, Default)]
pub struct Overview {
    state: SubmissionState,
}

impl Overview {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Initial
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.state == SubmissionState::Initial
    }

    /// Leaves the initial state and returns the submission to send.
    ///
    /// An incomplete draft keeps the overview in its initial state.
    pub fn begin(
        &mut self,
        draft: &ExerciseDraft,
        author: &str,
    ) -> Result<domain::ExerciseSubmission, OverviewError> {
        if !self.can_submit() {
            return Err(OverviewError::AlreadySubmitted);
        }
        let submission = draft.to_submission(author)?;
        self.state = SubmissionState::Loading;
        Ok(submission)
    }

    pub fn finish(&mut self, result: Result<domain::Committed, domain::SubmissionError>) {
        if self.state != SubmissionState::Loading {
            return;
        }
        self.state = match result {
            Ok(committed) => {
                info!("exercise created (base {:?})", committed.base);
                SubmissionState::Done(committed)
            }
            Err(err) => SubmissionState::Failed {
                stage: err.stage,
                message: err.to_string(),
                committed: err.committed,
            },
        };
    }

    pub async fn submit<S: ExerciseSubmissionService>(
        &mut self,
        service: &S,
        draft: &ExerciseDraft,
        author: &str,
    ) -> Result<(), OverviewError> {
        let submission = self.begin(draft, author)?;
        let result = service.submit_exercise(submission).await;
        self.finish(result);
        Ok(())
    }
}
