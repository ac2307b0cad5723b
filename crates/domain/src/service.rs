use log::{debug, error};

use crate::{
    BodyWeight, BodyWeightID, BodyWeightRepository, BodyWeightService, CategoryName,
    CodeTestOutput, Committed, CreateError, DeleteError, Equipment, ExerciseBase,
    ExerciseBaseID, ExerciseCategory, ExerciseRepository, ExerciseService, ExerciseSubmission,
    ExerciseSubmissionService, ExerciseVideo, Language, MeasurementCategory,
    MeasurementCategoryID, MeasurementEntry, MeasurementEntryID, MeasurementRepository,
    MeasurementService, MediaFile, Muscle, Name, Profile, ProfileRepository, ProfileService,
    ReadError, RoutineID, RoutineRepository, RoutineService, StorageError, SubmissionError, Unit,
    UpdateError, VideoID, WorkoutRoutine, submit_exercise,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    async fn get_profile(&self) -> Result<Profile, ReadError> {
        log_on_error!(self.repository.read_profile(), ReadError, "get", "profile")
    }
}

impl<R: BodyWeightRepository> BodyWeightService for Service<R> {
    async fn get_body_weight(&self) -> Result<Vec<BodyWeight>, ReadError> {
        log_on_error!(
            self.repository.read_body_weight(),
            ReadError,
            "get",
            "body weight"
        )
    }

    async fn create_body_weight(&self, body_weight: BodyWeight) -> Result<BodyWeight, CreateError> {
        log_on_error!(
            self.repository.create_body_weight(body_weight),
            CreateError,
            "create",
            "body weight"
        )
    }

    async fn replace_body_weight(
        &self,
        body_weight: BodyWeight,
    ) -> Result<BodyWeight, UpdateError> {
        log_on_error!(
            self.repository.replace_body_weight(body_weight),
            UpdateError,
            "replace",
            "body weight"
        )
    }

    async fn delete_body_weight(&self, id: BodyWeightID) -> Result<BodyWeightID, DeleteError> {
        log_on_error!(
            self.repository.delete_body_weight(id),
            DeleteError,
            "delete",
            "body weight"
        )
    }
}

impl<R: MeasurementRepository> MeasurementService for Service<R> {
    async fn get_measurement_categories(&self) -> Result<Vec<MeasurementCategory>, ReadError> {
        log_on_error!(
            self.repository.read_measurement_categories(),
            ReadError,
            "get",
            "measurement categories"
        )
    }

    async fn get_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategory, ReadError> {
        log_on_error!(
            self.repository.read_measurement_category(id),
            ReadError,
            "get",
            "measurement category"
        )
    }

    async fn create_measurement_category(
        &self,
        name: CategoryName,
        unit: Unit,
        code: String,
    ) -> Result<MeasurementCategory, CreateError> {
        log_on_error!(
            self.repository.create_measurement_category(name, unit, code),
            CreateError,
            "create",
            "measurement category"
        )
    }

    async fn modify_measurement_category(
        &self,
        category: MeasurementCategory,
    ) -> Result<MeasurementCategory, UpdateError> {
        log_on_error!(
            self.repository.modify_measurement_category(category),
            UpdateError,
            "modify",
            "measurement category"
        )
    }

    async fn delete_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategoryID, DeleteError> {
        log_on_error!(
            self.repository.delete_measurement_category(id),
            DeleteError,
            "delete",
            "measurement category"
        )
    }

    async fn create_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, CreateError> {
        log_on_error!(
            self.repository.create_measurement_entry(entry),
            CreateError,
            "create",
            "measurement entry"
        )
    }

    async fn modify_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, UpdateError> {
        log_on_error!(
            self.repository.modify_measurement_entry(entry),
            UpdateError,
            "modify",
            "measurement entry"
        )
    }

    async fn delete_measurement_entry(
        &self,
        id: MeasurementEntryID,
    ) -> Result<MeasurementEntryID, DeleteError> {
        log_on_error!(
            self.repository.delete_measurement_entry(id),
            DeleteError,
            "delete",
            "measurement entry"
        )
    }

    async fn test_measurement_code(&self, code: String) -> Result<CodeTestOutput, CreateError> {
        log_on_error!(
            self.repository.test_measurement_code(code),
            CreateError,
            "test",
            "measurement code"
        )
    }
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    async fn get_routines(&self) -> Result<Vec<WorkoutRoutine>, ReadError> {
        log_on_error!(
            self.repository.read_routines(),
            ReadError,
            "get",
            "routines"
        )
    }

    async fn get_routine(&self, id: RoutineID) -> Result<WorkoutRoutine, ReadError> {
        log_on_error!(
            self.repository.read_routine(id),
            ReadError,
            "get",
            "routine"
        )
    }

    async fn create_routine(
        &self,
        name: Name,
        description: String,
    ) -> Result<WorkoutRoutine, CreateError> {
        log_on_error!(
            self.repository.create_routine(name, description),
            CreateError,
            "create",
            "routine"
        )
    }

    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(
            self.repository.delete_routine(id),
            DeleteError,
            "delete",
            "routine"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_categories(&self) -> Result<Vec<ExerciseCategory>, ReadError> {
        log_on_error!(
            self.repository.read_categories(),
            ReadError,
            "get",
            "exercise categories"
        )
    }

    async fn get_equipment(&self) -> Result<Vec<Equipment>, ReadError> {
        log_on_error!(
            self.repository.read_equipment(),
            ReadError,
            "get",
            "equipment"
        )
    }

    async fn get_muscles(&self) -> Result<Vec<Muscle>, ReadError> {
        log_on_error!(self.repository.read_muscles(), ReadError, "get", "muscles")
    }

    async fn get_languages(&self) -> Result<Vec<Language>, ReadError> {
        log_on_error!(
            self.repository.read_languages(),
            ReadError,
            "get",
            "languages"
        )
    }

    async fn get_exercise_bases(&self) -> Result<Vec<ExerciseBase>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_bases(),
            ReadError,
            "get",
            "exercise bases"
        )
    }

    async fn upload_video(
        &self,
        base: ExerciseBaseID,
        author: String,
        video: MediaFile,
    ) -> Result<ExerciseVideo, CreateError> {
        log_on_error!(
            self.repository.upload_video(base, author, video),
            CreateError,
            "upload",
            "video"
        )
    }

    async fn delete_video(&self, id: VideoID) -> Result<VideoID, DeleteError> {
        log_on_error!(
            self.repository.delete_video(id),
            DeleteError,
            "delete",
            "video"
        )
    }
}

impl<R: ExerciseRepository> ExerciseSubmissionService for Service<R> {
    async fn submit_exercise(
        &self,
        submission: ExerciseSubmission,
    ) -> Result<Committed, SubmissionError> {
        let result = submit_exercise(&self.repository, submission).await;
        if let Err(ref err) = result {
            if matches!(
                err.source,
                CreateError::Storage(StorageError::NoConnection)
            ) {
                debug!("{err}");
            } else {
                error!("{err} (committed: {:?})", err.committed);
            }
        }
        result
    }
}
