use derive_more::{Deref, Display};

/// Defines a server-assigned entity id. The nil id (0) marks an entity that has not been
/// persisted yet.
macro_rules! entity_id {
    ($($name: ident),* $(,)?) => {
        $(
            #[derive(
                Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
            )]
            pub struct $name(u32);

            impl $name {
                #[must_use]
                pub fn nil() -> Self {
                    Self(0)
                }

                #[must_use]
                pub fn is_nil(&self) -> bool {
                    self.0 == 0
                }
            }

            impl From<u32> for $name {
                fn from(value: u32) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for u32 {
                fn from(value: $name) -> Self {
                    value.0
                }
            }
        )*
    };
}

entity_id!(
    BodyWeightID,
    MeasurementCategoryID,
    MeasurementEntryID,
    RoutineID,
    DayID,
    SetID,
    ExerciseBaseID,
    TranslationID,
    AliasID,
    NoteID,
    ImageID,
    VideoID,
    VariationID,
    CategoryID,
    EquipmentID,
    MuscleID,
    LanguageID,
);

impl LanguageID {
    pub const ENGLISH: LanguageID = LanguageID(2);
}
