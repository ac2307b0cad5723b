use strum::{Display, EnumIter, IntoEnumIterator};

use super::state::{DraftError, ExerciseDraft};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter)]
pub enum WizardStep {
    #[default]
    Basics,
    Variations,
    Description,
    Translations,
    Images,
    Overview,
}

impl WizardStep {
    /// Checks the fields the step is responsible for.
    pub fn validate(self, draft: &ExerciseDraft) -> Result<(), DraftError> {
        match self {
            WizardStep::Basics => draft.validate_basics(),
            WizardStep::Description => draft.validate_description(),
            WizardStep::Translations => draft.validate_secondary(),
            WizardStep::Variations | WizardStep::Images | WizardStep::Overview => Ok(()),
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        WizardStep::iter().skip_while(|s| *s != self).nth(1)
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        WizardStep::iter().take_while(|s| *s != self).last()
    }

    #[must_use]
    pub fn index(self) -> usize {
        WizardStep::iter().take_while(|s| *s != self).count()
    }
}
