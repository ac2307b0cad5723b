//! Exercise draft shared by all wizard steps.
//!
//! Steps never mutate the draft directly. They dispatch [`Action`]s to the [`WizardStore`],
//! which applies them through the pure [`reduce`] function.

use liftlog_domain::{self as domain, VariationChoice};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationDraft {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub notes: Vec<String>,
}

/// Image selected by the user, identified until it is uploaded on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub id: Uuid,
    pub file: domain::MediaFile,
}

impl PendingImage {
    #[must_use]
    pub fn new(file: domain::MediaFile) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub category: Option<domain::CategoryID>,
    pub equipment: Vec<domain::EquipmentID>,
    pub muscles: Vec<domain::MuscleID>,
    pub muscles_secondary: Vec<domain::MuscleID>,
    pub variation: VariationChoice,
    /// Language of the optional second translation.
    pub language: Option<domain::LanguageID>,
    pub english: TranslationDraft,
    pub secondary: TranslationDraft,
    pub images: Vec<PendingImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSlot {
    English,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCategory(domain::CategoryID),
    SetEquipment(Vec<domain::EquipmentID>),
    SetMuscles(Vec<domain::MuscleID>),
    SetMusclesSecondary(Vec<domain::MuscleID>),
    ToggleVariation(domain::VariationID),
    ToggleNewVariationBase(domain::ExerciseBaseID),
    SetLanguage(Option<domain::LanguageID>),
    SetName(TranslationSlot, String),
    SetDescription(TranslationSlot, String),
    AddAlias(TranslationSlot, String),
    RemoveAlias(TranslationSlot, usize),
    AddNote(TranslationSlot, String),
    RemoveNote(TranslationSlot, usize),
    AddImage(PendingImage),
    RemoveImage(Uuid),
    Reset,
}

#[must_use]
pub fn reduce(mut draft: ExerciseDraft, action: Action) -> ExerciseDraft {
    match action {
        Action::SetCategory(category) => draft.category = Some(category),
        Action::SetEquipment(equipment) => draft.equipment = equipment,
        Action::SetMuscles(muscles) => {
            draft.muscles_secondary.retain(|m| !muscles.contains(m));
            draft.muscles = muscles;
        }
        Action::SetMusclesSecondary(muscles) => {
            draft.muscles.retain(|m| !muscles.contains(m));
            draft.muscles_secondary = muscles;
        }
        Action::ToggleVariation(id) => draft.variation = draft.variation.toggle_existing(id),
        Action::ToggleNewVariationBase(base) => draft.variation = draft.variation.toggle_new(base),
        Action::SetLanguage(language) => {
            if language != draft.language {
                draft.secondary = TranslationDraft::default();
            }
            draft.language = language;
        }
        Action::SetName(slot, name) => draft.translation_mut(slot).name = name,
        Action::SetDescription(slot, description) => {
            draft.translation_mut(slot).description = description;
        }
        Action::AddAlias(slot, alias) => {
            let alias = alias.trim();
            let aliases = &mut draft.translation_mut(slot).aliases;
            if !alias.is_empty() && !aliases.iter().any(|a| a == alias) {
                aliases.push(alias.to_string());
            }
        }
        Action::RemoveAlias(slot, index) => remove(&mut draft.translation_mut(slot).aliases, index),
        Action::AddNote(slot, note) => {
            let note = note.trim();
            if !note.is_empty() {
                draft.translation_mut(slot).notes.push(note.to_string());
            }
        }
        Action::RemoveNote(slot, index) => remove(&mut draft.translation_mut(slot).notes, index),
        Action::AddImage(image) => draft.images.push(image),
        Action::RemoveImage(id) => draft.images.retain(|i| i.id != id),
        Action::Reset => return ExerciseDraft::default(),
    }
    draft
}

fn remove<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Category is required")]
    MissingCategory,
    #[error("Primary muscles are required")]
    MissingMuscles,
    #[error("{slot:?} name: {message}")]
    InvalidName {
        slot: TranslationSlot,
        message: String,
    },
    #[error("Description is required")]
    MissingDescription(TranslationSlot),
    #[error("Second language must differ from English")]
    DuplicateLanguage,
}

impl ExerciseDraft {
    #[must_use]
    pub fn translation(&self, slot: TranslationSlot) -> &TranslationDraft {
        match slot {
            TranslationSlot::English => &self.english,
            TranslationSlot::Secondary => &self.secondary,
        }
    }

    fn translation_mut(&mut self, slot: TranslationSlot) -> &mut TranslationDraft {
        match slot {
            TranslationSlot::English => &mut self.english,
            TranslationSlot::Secondary => &mut self.secondary,
        }
    }

    pub fn validate_basics(&self) -> Result<(), DraftError> {
        self.validate_name(TranslationSlot::English)?;
        if self.category.is_none() {
            return Err(DraftError::MissingCategory);
        }
        if self.muscles.is_empty() {
            return Err(DraftError::MissingMuscles);
        }
        Ok(())
    }

    pub fn validate_description(&self) -> Result<(), DraftError> {
        validate_description(&self.english, TranslationSlot::English)
    }

    pub fn validate_secondary(&self) -> Result<(), DraftError> {
        match self.language {
            None => Ok(()),
            Some(domain::LanguageID::ENGLISH) => Err(DraftError::DuplicateLanguage),
            Some(_) => {
                self.validate_name(TranslationSlot::Secondary)?;
                validate_description(&self.secondary, TranslationSlot::Secondary)
            }
        }
    }

    fn validate_name(&self, slot: TranslationSlot) -> Result<domain::Name, DraftError> {
        domain::Name::new(&self.translation(slot).name).map_err(|err| DraftError::InvalidName {
            slot,
            message: err.to_string(),
        })
    }

    /// Collects the draft into a submission, rejecting drafts with missing required fields.
    pub fn to_submission(&self, author: &str) -> Result<domain::ExerciseSubmission, DraftError> {
        self.validate_basics()?;
        self.validate_description()?;
        self.validate_secondary()?;
        let category = self.category.ok_or(DraftError::MissingCategory)?;

        let english = domain::TranslationSubmission {
            language: domain::LanguageID::ENGLISH,
            name: self.validate_name(TranslationSlot::English)?.to_string(),
            description: self.english.description.trim().to_string(),
            aliases: self.english.aliases.clone(),
            notes: self.english.notes.clone(),
        };
        let secondary = match self.language {
            Some(language) => Some(domain::TranslationSubmission {
                language,
                name: self.validate_name(TranslationSlot::Secondary)?.to_string(),
                description: self.secondary.description.trim().to_string(),
                aliases: self.secondary.aliases.clone(),
                notes: self.secondary.notes.clone(),
            }),
            None => None,
        };

        Ok(domain::ExerciseSubmission {
            category,
            equipment: self.equipment.clone(),
            muscles: self.muscles.clone(),
            muscles_secondary: self.muscles_secondary.clone(),
            variation: self.variation,
            author: author.to_string(),
            images: self.images.iter().map(|i| i.file.clone()).collect(),
            english,
            secondary,
        })
    }
}

fn validate_description(
    translation: &TranslationDraft,
    slot: TranslationSlot,
) -> Result<(), DraftError> {
    if translation.description.trim().is_empty() {
        Err(DraftError::MissingDescription(slot))
    } else {
        Ok(())
    }
}

/// Owner of the draft for the lifetime of one wizard run.
#[derive(Debug, Default)]
pub struct WizardStore {
    draft: ExerciseDraft,
}

impl WizardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ExerciseDraft {
        &self.draft
    }

    pub fn dispatch(&mut self, action: Action) {
        self.draft = reduce(std::mem::take(&mut self.draft), action);
    }
}
