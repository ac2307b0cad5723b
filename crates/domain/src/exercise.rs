use crate::{
    AliasID, CategoryID, CreateError, DeleteError, EquipmentID, ExerciseBaseID, ImageID,
    LanguageID, MuscleID, NoteID, ReadError, TranslationID, UpdateError, VariationID, VideoID,
};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_categories(&self) -> Result<Vec<ExerciseCategory>, ReadError>;
    async fn get_equipment(&self) -> Result<Vec<Equipment>, ReadError>;
    async fn get_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
    async fn get_languages(&self) -> Result<Vec<Language>, ReadError>;
    async fn get_exercise_bases(&self) -> Result<Vec<ExerciseBase>, ReadError>;
    async fn upload_video(
        &self,
        base: ExerciseBaseID,
        author: String,
        video: MediaFile,
    ) -> Result<ExerciseVideo, CreateError>;
    async fn delete_video(&self, id: VideoID) -> Result<VideoID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_categories(&self) -> Result<Vec<ExerciseCategory>, ReadError>;
    async fn read_equipment(&self) -> Result<Vec<Equipment>, ReadError>;
    async fn read_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
    async fn read_languages(&self) -> Result<Vec<Language>, ReadError>;
    async fn read_exercise_bases(&self) -> Result<Vec<ExerciseBase>, ReadError>;

    async fn create_variation(&self) -> Result<VariationID, CreateError>;
    async fn modify_base_variation(
        &self,
        base: ExerciseBaseID,
        variation: VariationID,
    ) -> Result<ExerciseBaseID, UpdateError>;
    async fn create_exercise_base(&self, base: NewExerciseBase)
    -> Result<ExerciseBaseID, CreateError>;
    async fn create_translation(
        &self,
        translation: NewTranslation,
    ) -> Result<ExerciseTranslation, CreateError>;
    async fn create_alias(
        &self,
        translation: TranslationID,
        alias: String,
    ) -> Result<Alias, CreateError>;
    async fn create_note(
        &self,
        translation: TranslationID,
        comment: String,
    ) -> Result<Note, CreateError>;
    async fn upload_image(
        &self,
        base: ExerciseBaseID,
        author: String,
        image: MediaFile,
    ) -> Result<ExerciseImage, CreateError>;
    async fn upload_video(
        &self,
        base: ExerciseBaseID,
        author: String,
        video: MediaFile,
    ) -> Result<ExerciseVideo, CreateError>;
    async fn delete_video(&self, id: VideoID) -> Result<VideoID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCategory {
    pub id: CategoryID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id: EquipmentID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: MuscleID,
    pub name: String,
    pub name_en: String,
    pub is_front: bool,
}

impl Muscle {
    /// Common English name if known, otherwise the latin name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name_en.is_empty() {
            &self.name
        } else {
            &self.name_en
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: LanguageID,
    pub short_name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBase {
    pub id: ExerciseBaseID,
    pub category: CategoryID,
    pub equipment: Vec<EquipmentID>,
    pub muscles: Vec<MuscleID>,
    pub muscles_secondary: Vec<MuscleID>,
    pub variation: Option<VariationID>,
    pub translations: Vec<ExerciseTranslation>,
}

impl ExerciseBase {
    /// Name in the given language, falling back to English and then to any translation.
    #[must_use]
    pub fn name(&self, language: LanguageID) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language == language)
            .or_else(|| {
                self.translations
                    .iter()
                    .find(|t| t.language == LanguageID::ENGLISH)
            })
            .or_else(|| self.translations.first())
            .map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTranslation {
    pub id: TranslationID,
    pub base: ExerciseBaseID,
    pub language: LanguageID,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExerciseBase {
    pub category: CategoryID,
    pub equipment: Vec<EquipmentID>,
    pub muscles: Vec<MuscleID>,
    pub muscles_secondary: Vec<MuscleID>,
    pub variation: Option<VariationID>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub base: ExerciseBaseID,
    pub language: LanguageID,
    pub name: String,
    pub description: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub id: AliasID,
    pub translation: TranslationID,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteID,
    pub translation: TranslationID,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseImage {
    pub id: ImageID,
    pub base: ExerciseBaseID,
    pub url: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseVideo {
    pub id: VideoID,
    pub base: ExerciseBaseID,
    pub url: String,
}

/// File content selected by the user, kept in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
