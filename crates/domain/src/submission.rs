//! Exercise submission
//!
//! A new exercise is assembled from several remote records that depend on each other: an
//! optional variation grouping, the language-independent base, one translation per language and
//! the aliases, notes and images attached to them. The records are created strictly one after
//! another. A failing stage aborts the remaining stages. Records created before the failure are
//! not removed again, but are reported as part of the error.

use std::fmt;

use log::{debug, info};

use crate::{
    AliasID, CategoryID, CreateError, EquipmentID, ExerciseBaseID, ExerciseRepository, ImageID,
    LanguageID, MediaFile, MuscleID, NewExerciseBase, NewTranslation, NoteID, TranslationID,
    VariationID,
};

#[allow(async_fn_in_trait)]
pub trait ExerciseSubmissionService {
    async fn submit_exercise(
        &self,
        submission: ExerciseSubmission,
    ) -> Result<Committed, SubmissionError>;
}

/// Relation of a new exercise to existing exercises.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VariationChoice {
    #[default]
    None,
    /// Join the existing variation grouping.
    Existing(VariationID),
    /// Create a new variation grouping together with the given base, which has none yet.
    New(ExerciseBaseID),
}

impl VariationChoice {
    #[must_use]
    pub fn toggle_existing(self, id: VariationID) -> Self {
        if self == VariationChoice::Existing(id) {
            VariationChoice::None
        } else {
            VariationChoice::Existing(id)
        }
    }

    #[must_use]
    pub fn toggle_new(self, base: ExerciseBaseID) -> Self {
        if self == VariationChoice::New(base) {
            VariationChoice::None
        } else {
            VariationChoice::New(base)
        }
    }

    #[must_use]
    pub fn variation_id(&self) -> Option<VariationID> {
        match self {
            VariationChoice::Existing(id) => Some(*id),
            VariationChoice::None | VariationChoice::New(_) => None,
        }
    }

    #[must_use]
    pub fn new_variation_base_id(&self) -> Option<ExerciseBaseID> {
        match self {
            VariationChoice::New(base) => Some(*base),
            VariationChoice::None | VariationChoice::Existing(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSubmission {
    pub category: CategoryID,
    pub equipment: Vec<EquipmentID>,
    pub muscles: Vec<MuscleID>,
    pub muscles_secondary: Vec<MuscleID>,
    pub variation: VariationChoice,
    pub author: String,
    pub images: Vec<MediaFile>,
    pub english: TranslationSubmission,
    pub secondary: Option<TranslationSubmission>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSubmission {
    pub language: LanguageID,
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Variation,
    LinkVariation,
    Base,
    Translation { language: LanguageID },
    Alias { language: LanguageID, index: usize },
    Image { index: usize },
    Note { language: LanguageID, index: usize },
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmissionStage::Variation => write!(f, "variation"),
            SubmissionStage::LinkVariation => write!(f, "variation link"),
            SubmissionStage::Base => write!(f, "base"),
            SubmissionStage::Translation { language } => {
                write!(f, "translation (language {language})")
            }
            SubmissionStage::Alias { language, index } => {
                write!(f, "alias {} (language {language})", index + 1)
            }
            SubmissionStage::Image { index } => write!(f, "image {}", index + 1),
            SubmissionStage::Note { language, index } => {
                write!(f, "note {} (language {language})", index + 1)
            }
        }
    }
}

/// Remote records created by a submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Committed {
    pub variation: Option<VariationID>,
    /// Existing base moved into the newly created variation.
    pub linked_base: Option<ExerciseBaseID>,
    pub base: Option<ExerciseBaseID>,
    pub translations: Vec<TranslationID>,
    pub aliases: Vec<AliasID>,
    pub images: Vec<ImageID>,
    pub notes: Vec<NoteID>,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to submit {stage}: {source}")]
pub struct SubmissionError {
    pub stage: SubmissionStage,
    pub committed: Committed,
    #[source]
    pub source: CreateError,
}

macro_rules! stage {
    ($committed: ident, $stage: expr, $call: expr) => {{
        let stage = $stage;
        debug!("submitting {stage}");
        match $call.await {
            Ok(value) => value,
            Err(err) => {
                return Err(SubmissionError {
                    stage,
                    committed: $committed,
                    source: err.into(),
                });
            }
        }
    }};
}

pub async fn submit_exercise<R: ExerciseRepository>(
    repository: &R,
    submission: ExerciseSubmission,
) -> Result<Committed, SubmissionError> {
    let mut committed = Committed::default();

    let variation = match submission.variation {
        VariationChoice::None => None,
        VariationChoice::Existing(id) => Some(id),
        VariationChoice::New(other_base) => {
            let id = stage!(
                committed,
                SubmissionStage::Variation,
                repository.create_variation()
            );
            committed.variation = Some(id);
            stage!(
                committed,
                SubmissionStage::LinkVariation,
                repository.modify_base_variation(other_base, id)
            );
            committed.linked_base = Some(other_base);
            Some(id)
        }
    };

    let base = stage!(
        committed,
        SubmissionStage::Base,
        repository.create_exercise_base(NewExerciseBase {
            category: submission.category,
            equipment: submission.equipment,
            muscles: submission.muscles,
            muscles_secondary: submission.muscles_secondary,
            variation,
            author: submission.author.clone(),
        })
    );
    committed.base = Some(base);

    let english = submission.english;
    let translation = stage!(
        committed,
        SubmissionStage::Translation {
            language: english.language
        },
        repository.create_translation(NewTranslation {
            base,
            language: english.language,
            name: english.name,
            description: english.description,
            author: submission.author.clone(),
        })
    );
    committed.translations.push(translation.id);

    for (index, alias) in english.aliases.into_iter().enumerate() {
        let alias = stage!(
            committed,
            SubmissionStage::Alias {
                language: english.language,
                index
            },
            repository.create_alias(translation.id, alias)
        );
        committed.aliases.push(alias.id);
    }

    for (index, image) in submission.images.into_iter().enumerate() {
        let image = stage!(
            committed,
            SubmissionStage::Image { index },
            repository.upload_image(base, submission.author.clone(), image)
        );
        committed.images.push(image.id);
    }

    for (index, note) in english.notes.into_iter().enumerate() {
        let note = stage!(
            committed,
            SubmissionStage::Note {
                language: english.language,
                index
            },
            repository.create_note(translation.id, note)
        );
        committed.notes.push(note.id);
    }

    if let Some(secondary) = submission.secondary {
        let translation = stage!(
            committed,
            SubmissionStage::Translation {
                language: secondary.language
            },
            repository.create_translation(NewTranslation {
                base,
                language: secondary.language,
                name: secondary.name,
                description: secondary.description,
                author: submission.author.clone(),
            })
        );
        committed.translations.push(translation.id);

        for (index, alias) in secondary.aliases.into_iter().enumerate() {
            let alias = stage!(
                committed,
                SubmissionStage::Alias {
                    language: secondary.language,
                    index
                },
                repository.create_alias(translation.id, alias)
            );
            committed.aliases.push(alias.id);
        }

        for (index, note) in secondary.notes.into_iter().enumerate() {
            let note = stage!(
                committed,
                SubmissionStage::Note {
                    language: secondary.language,
                    index
                },
                repository.create_note(translation.id, note)
            );
            committed.notes.push(note.id);
        }
    }

    info!("exercise {base} created");

    Ok(committed)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use futures_util::FutureExt;
    use pretty_assertions::assert_eq;

    use crate::{
        Alias, DeleteError, Equipment, ExerciseBase, ExerciseCategory, ExerciseImage,
        ExerciseTranslation, ExerciseVideo, Language, Muscle, Note, ReadError, StorageError,
        UpdateError, VideoID,
    };

    use super::*;

    #[derive(Default)]
    pub struct MockExerciseRepository {
        pub calls: RefCell<Vec<String>>,
        pub fail_at: Option<&'static str>,
        next_id: Cell<u32>,
    }

    impl MockExerciseRepository {
        pub fn failing_at(call: &'static str) -> Self {
            Self {
                fail_at: Some(call),
                ..Self::default()
            }
        }

        fn call(&self, name: &'static str, details: String) -> Result<u32, StorageError> {
            self.calls.borrow_mut().push(format!("{name} {details}"));
            if self.fail_at == Some(name) {
                return Err(StorageError::Status {
                    status: 500,
                    body: "Internal Server Error".to_string(),
                });
            }
            self.next_id.set(self.next_id.get() + 1);
            Ok(self.next_id.get())
        }

        pub fn call_names(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|c| c.split(' ').next().unwrap_or_default().to_string())
                .collect()
        }
    }

    impl ExerciseRepository for MockExerciseRepository {
        async fn read_categories(&self) -> Result<Vec<ExerciseCategory>, ReadError> {
            Ok(vec![])
        }
        async fn read_equipment(&self) -> Result<Vec<Equipment>, ReadError> {
            Ok(vec![])
        }
        async fn read_muscles(&self) -> Result<Vec<Muscle>, ReadError> {
            Ok(vec![])
        }
        async fn read_languages(&self) -> Result<Vec<Language>, ReadError> {
            Ok(vec![])
        }
        async fn read_exercise_bases(&self) -> Result<Vec<ExerciseBase>, ReadError> {
            Ok(vec![])
        }
        async fn create_variation(&self) -> Result<VariationID, CreateError> {
            Ok(self.call("create_variation", String::new())?.into())
        }
        async fn modify_base_variation(
            &self,
            base: ExerciseBaseID,
            variation: VariationID,
        ) -> Result<ExerciseBaseID, UpdateError> {
            self.call("modify_base_variation", format!("{base} {variation}"))?;
            Ok(base)
        }
        async fn create_exercise_base(
            &self,
            base: NewExerciseBase,
        ) -> Result<ExerciseBaseID, CreateError> {
            Ok(self
                .call(
                    "create_exercise_base",
                    format!(
                        "{} {}",
                        base.author,
                        base.variation.map(|v| v.to_string()).unwrap_or_default()
                    ),
                )?
                .into())
        }
        async fn create_translation(
            &self,
            translation: NewTranslation,
        ) -> Result<ExerciseTranslation, CreateError> {
            let id = self.call(
                "create_translation",
                format!(
                    "{} {} {}",
                    translation.base, translation.language, translation.name
                ),
            )?;
            Ok(ExerciseTranslation {
                id: id.into(),
                base: translation.base,
                language: translation.language,
                name: translation.name,
                description: translation.description,
            })
        }
        async fn create_alias(
            &self,
            translation: TranslationID,
            alias: String,
        ) -> Result<Alias, CreateError> {
            let id = self.call("create_alias", format!("{translation} {alias}"))?;
            Ok(Alias {
                id: id.into(),
                translation,
                alias,
            })
        }
        async fn create_note(
            &self,
            translation: TranslationID,
            comment: String,
        ) -> Result<Note, CreateError> {
            let id = self.call("create_note", format!("{translation} {comment}"))?;
            Ok(Note {
                id: id.into(),
                translation,
                comment,
            })
        }
        async fn upload_image(
            &self,
            base: ExerciseBaseID,
            author: String,
            image: MediaFile,
        ) -> Result<ExerciseImage, CreateError> {
            let id = self.call("upload_image", format!("{base} {author} {}", image.name))?;
            Ok(ExerciseImage {
                id: id.into(),
                base,
                url: image.name,
                is_main: false,
            })
        }
        async fn upload_video(
            &self,
            base: ExerciseBaseID,
            _: String,
            video: MediaFile,
        ) -> Result<ExerciseVideo, CreateError> {
            let id = self.call("upload_video", format!("{base} {}", video.name))?;
            Ok(ExerciseVideo {
                id: id.into(),
                base,
                url: video.name,
            })
        }
        async fn delete_video(&self, id: VideoID) -> Result<VideoID, DeleteError> {
            self.call("delete_video", id.to_string())?;
            Ok(id)
        }
    }

    pub fn submission() -> ExerciseSubmission {
        ExerciseSubmission {
            category: 10.into(),
            equipment: vec![1.into()],
            muscles: vec![2.into()],
            muscles_secondary: vec![],
            variation: VariationChoice::None,
            author: "alice".to_string(),
            images: vec![MediaFile {
                name: "crunch.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50],
            }],
            english: TranslationSubmission {
                language: LanguageID::ENGLISH,
                name: "Crunches".to_string(),
                description: "Lie on your back".to_string(),
                aliases: vec!["Sit-ups".to_string()],
                notes: vec!["Keep your neck relaxed".to_string()],
            },
            secondary: None,
        }
    }

    #[test]
    fn test_submit_exercise_order() {
        let repository = MockExerciseRepository::default();

        let committed = submit_exercise(&repository, submission())
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(
            *repository.calls.borrow(),
            vec![
                "create_exercise_base alice ",
                "create_translation 1 2 Crunches",
                "create_alias 2 Sit-ups",
                "upload_image 1 alice crunch.png",
                "create_note 2 Keep your neck relaxed",
            ]
        );
        assert_eq!(
            committed,
            Committed {
                variation: None,
                linked_base: None,
                base: Some(1.into()),
                translations: vec![2.into()],
                aliases: vec![3.into()],
                images: vec![4.into()],
                notes: vec![5.into()],
            }
        );
    }

    #[test]
    fn test_submit_exercise_without_lists() {
        let repository = MockExerciseRepository::default();
        let mut submission = submission();
        submission.images.clear();
        submission.english.aliases.clear();
        submission.english.notes.clear();

        submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(
            repository.call_names(),
            vec!["create_exercise_base", "create_translation"]
        );
    }

    #[test]
    fn test_submit_exercise_existing_variation() {
        let repository = MockExerciseRepository::default();
        let mut submission = submission();
        submission.variation = VariationChoice::Existing(42.into());

        let committed = submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(repository.calls.borrow()[0], "create_exercise_base alice 42");
        assert_eq!(committed.variation, None);
    }

    #[test]
    fn test_submit_exercise_new_variation() {
        let repository = MockExerciseRepository::default();
        let mut submission = submission();
        submission.variation = VariationChoice::New(7.into());

        let committed = submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(
            repository.calls.borrow()[..3].to_vec(),
            vec![
                "create_variation ",
                "modify_base_variation 7 1",
                "create_exercise_base alice 1",
            ]
        );
        assert_eq!(committed.variation, Some(1.into()));
        assert_eq!(committed.linked_base, Some(7.into()));
        assert_eq!(committed.base, Some(3.into()));
    }

    #[test]
    fn test_submit_exercise_failure_after_variation_link() {
        let repository = MockExerciseRepository::failing_at("create_exercise_base");
        let mut submission = submission();
        submission.variation = VariationChoice::New(7.into());

        let error = submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert_eq!(error.stage, SubmissionStage::Base);
        assert_eq!(
            error.committed,
            Committed {
                variation: Some(1.into()),
                linked_base: Some(7.into()),
                ..Committed::default()
            }
        );
        assert_eq!(
            *repository.calls.borrow(),
            vec![
                "create_variation ",
                "modify_base_variation 7 1",
                "create_exercise_base alice 1",
            ]
        );
    }

    #[test]
    fn test_submit_exercise_secondary_language() {
        let repository = MockExerciseRepository::default();
        let mut submission = submission();
        submission.secondary = Some(TranslationSubmission {
            language: 1.into(),
            name: "Bauchpressen".to_string(),
            description: "Auf den Rücken legen".to_string(),
            aliases: vec!["Crunch".to_string(), "Sit-up".to_string()],
            notes: vec![],
        });

        let committed = submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(
            repository.calls.borrow()[5..].to_vec(),
            vec![
                "create_translation 1 1 Bauchpressen",
                "create_alias 6 Crunch",
                "create_alias 6 Sit-up",
            ]
        );
        assert_eq!(committed.translations, vec![2.into(), 6.into()]);
        assert_eq!(committed.aliases, vec![3.into(), 7.into(), 8.into()]);
        assert_eq!(committed.notes, vec![5.into()]);
    }

    #[test]
    fn test_submit_exercise_failure_aborts_remaining_stages() {
        let repository = MockExerciseRepository::failing_at("create_alias");

        let error = submit_exercise(&repository, submission())
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert_eq!(
            error.stage,
            SubmissionStage::Alias {
                language: LanguageID::ENGLISH,
                index: 0
            }
        );
        assert_eq!(
            error.committed,
            Committed {
                base: Some(1.into()),
                translations: vec![2.into()],
                ..Committed::default()
            }
        );
        assert!(matches!(
            error.source,
            CreateError::Storage(StorageError::Status { status: 500, .. })
        ));
        assert_eq!(
            repository.call_names(),
            vec!["create_exercise_base", "create_translation", "create_alias"]
        );
        assert_eq!(
            error.to_string(),
            "failed to submit alias 1 (language 2): 500: Internal Server Error"
        );
    }

    #[test]
    fn test_submit_exercise_failing_variation_link() {
        let repository = MockExerciseRepository::failing_at("modify_base_variation");
        let mut submission = submission();
        submission.variation = VariationChoice::New(7.into());

        let error = submit_exercise(&repository, submission)
            .now_or_never()
            .unwrap()
            .unwrap_err();

        assert_eq!(error.stage, SubmissionStage::LinkVariation);
        assert_eq!(error.committed.variation, Some(1.into()));
        assert_eq!(error.committed.linked_base, None);
        assert_eq!(error.committed.base, None);
    }

    #[test]
    fn test_variation_choice_toggle() {
        let choice = VariationChoice::None;

        let choice = choice.toggle_existing(1.into());
        assert_eq!(choice.variation_id(), Some(1.into()));
        assert_eq!(choice.toggle_existing(1.into()), VariationChoice::None);

        let choice = choice.toggle_existing(2.into());
        assert_eq!(choice, VariationChoice::Existing(2.into()));

        let choice = choice.toggle_new(3.into());
        assert_eq!(choice.variation_id(), None);
        assert_eq!(choice.new_variation_base_id(), Some(3.into()));
        assert_eq!(choice.toggle_new(3.into()), VariationChoice::None);
    }
}
