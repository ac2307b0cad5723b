//! REST
//!
//! Client of the server's JSON API. Every request goes to
//! `<server_url>/api/v2/<resource>/[<id>/][?<query>]` and carries the API token, if one is
//! configured. Lists are paginated; all pages are fetched by following the `next` links.
//!
//! The wire types in this module are the only place where the JSON representation of an entity
//! is known. Each of them converts from and into its domain counterpart.

use chrono::NaiveDate;
use futures_util::future::try_join_all;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use liftlog_domain as domain;
use liftlog_web_app::Settings;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::AsRefStr;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Endpoint {
    #[strum(serialize = "userprofile")]
    Profile,
    #[strum(serialize = "weightentry")]
    BodyWeight,
    #[strum(serialize = "measurement-category")]
    MeasurementCategory,
    #[strum(serialize = "measurement")]
    MeasurementEntry,
    #[strum(serialize = "measurement-test-code")]
    MeasurementTestCode,
    #[strum(serialize = "workout")]
    Routine,
    #[strum(serialize = "day")]
    Day,
    #[strum(serialize = "set")]
    Set,
    #[strum(serialize = "exercisecategory")]
    ExerciseCategory,
    #[strum(serialize = "equipment")]
    Equipment,
    #[strum(serialize = "muscle")]
    Muscle,
    #[strum(serialize = "language")]
    Language,
    #[strum(serialize = "exercisebaseinfo")]
    ExerciseBaseInfo,
    #[strum(serialize = "exercise-base")]
    ExerciseBase,
    #[strum(serialize = "exercise")]
    Translation,
    #[strum(serialize = "exercisealias")]
    Alias,
    #[strum(serialize = "exercisecomment")]
    Note,
    #[strum(serialize = "exerciseimage")]
    Image,
    #[strum(serialize = "video")]
    Video,
    #[strum(serialize = "variation")]
    Variation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub server_url: String,
    pub token: Option<String>,
}

impl From<&Settings> for ApiConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            server_url: settings.server_url.clone(),
            token: settings
                .api_token
                .as_ref()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn url(&self, endpoint: Endpoint, id: Option<u32>, query: &[(&str, u32)]) -> String {
        let mut url = format!(
            "{}/api/v2/{}/",
            self.server_url.trim_end_matches('/'),
            endpoint.as_ref()
        );
        if let Some(id) = id {
            url.push_str(&id.to_string());
            url.push('/');
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(
                &query
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join("&"),
            );
        }
        url
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub config: ApiConfig,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new(config: ApiConfig) -> Self {
        Self {
            sender: GlooNetSendRequest,
            config,
        }
    }
}

impl<S: SendRequest> REST<S> {
    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(url).method(method);
        match &self.config.token {
            Some(token) => builder.header("Authorization", &format!("Token {token}")),
            None => builder,
        }
    }

    fn get(&self, endpoint: Endpoint, id: Option<u32>) -> Result<Request, gloo_net::Error> {
        self.builder(Method::GET, &self.config.url(endpoint, id, &[]))
            .build()
    }

    fn post<T: Serialize>(&self, endpoint: Endpoint, body: &T) -> Result<Request, gloo_net::Error> {
        self.builder(Method::POST, &self.config.url(endpoint, None, &[]))
            .json(body)
    }

    fn patch<T: Serialize>(
        &self,
        endpoint: Endpoint,
        id: u32,
        body: &T,
    ) -> Result<Request, gloo_net::Error> {
        self.builder(Method::PATCH, &self.config.url(endpoint, Some(id), &[]))
            .json(body)
    }

    fn delete(&self, endpoint: Endpoint, id: u32) -> Result<Request, gloo_net::Error> {
        self.builder(Method::DELETE, &self.config.url(endpoint, Some(id), &[]))
            .build()
    }

    fn upload(
        &self,
        endpoint: Endpoint,
        base: domain::ExerciseBaseID,
        author: &str,
        field: &str,
        file: &domain::MediaFile,
    ) -> Result<Request, domain::StorageError> {
        let form = multipart(
            &[("exercise_base", base.to_string()), ("license_author", author.to_string())],
            field,
            file,
        )?;
        self.builder(Method::POST, &self.config.url(endpoint, None, &[]))
            .body(form)
            .map_err(|err| domain::StorageError::Other(err.into()))
    }

    async fn send<E: From<domain::StorageError>>(
        &self,
        request: Result<Request, impl Into<Box<dyn std::error::Error>>>,
    ) -> Result<Response, E> {
        let request = request.map_err(|err| domain::StorageError::Other(err.into()))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;
        if response.ok() {
            return Ok(response);
        }
        Err(match response.status() {
            401 | 403 => domain::StorageError::NoSession,
            status => domain::StorageError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            },
        }
        .into())
    }

    async fn fetch<T: DeserializeOwned, E: From<domain::StorageError>>(
        &self,
        request: Result<Request, impl Into<Box<dyn std::error::Error>>>,
    ) -> Result<T, E> {
        let response = self.send::<E>(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| domain::StorageError::Other(err.into()).into())
    }

    async fn fetch_no_content<T, E: From<domain::StorageError>>(
        &self,
        request: Result<Request, impl Into<Box<dyn std::error::Error>>>,
        result: T,
    ) -> Result<T, E> {
        self.send::<E>(request).await?;
        Ok(result)
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, u32)],
    ) -> Result<Vec<T>, domain::ReadError> {
        let mut url = self.config.url(endpoint, None, query);
        let mut results = vec![];
        loop {
            let page = self
                .fetch::<Paginated<T>, domain::ReadError>(
                    self.builder(Method::GET, &url).build(),
                )
                .await?;
            results.extend(page.results);
            match page.next {
                Some(next) => url = next,
                None => return Ok(results),
            }
        }
    }

    async fn read_measurement_entries(
        &self,
        category: domain::MeasurementCategoryID,
    ) -> Result<Vec<domain::MeasurementEntry>, domain::ReadError> {
        Ok(self
            .fetch_all::<MeasurementEntry>(Endpoint::MeasurementEntry, &[("category", *category)])
            .await?
            .into_iter()
            .map(domain::MeasurementEntry::from)
            .collect())
    }

    async fn read_day_sets(&self, day: Day) -> Result<domain::Day, domain::ReadError> {
        let sets = self
            .fetch_all::<WorkoutSet>(Endpoint::Set, &[("exerciseday", day.id)])
            .await?;
        let mut day = domain::Day::from(day);
        day.sets = sets.into_iter().map(domain::WorkoutSet::from).collect();
        day.sets.sort_by_key(|s| s.order);
        Ok(day)
    }
}

fn multipart(
    fields: &[(&str, String)],
    file_field: &str,
    file: &domain::MediaFile,
) -> Result<web_sys::FormData, domain::StorageError> {
    let js_error =
        |err: wasm_bindgen::JsValue| domain::StorageError::Other(format!("{err:?}").into());
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(
        &js_sys::Array::of1(&bytes),
        &options,
    )
    .map_err(js_error)?;
    form.append_with_blob_and_filename(file_field, &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

impl<S: SendRequest> domain::ProfileRepository for REST<S> {
    async fn read_profile(&self) -> Result<domain::Profile, domain::ReadError> {
        Ok(self
            .fetch::<Profile, domain::ReadError>(self.get(Endpoint::Profile, None))
            .await?
            .into())
    }
}

impl<S: SendRequest> domain::BodyWeightRepository for REST<S> {
    async fn read_body_weight(&self) -> Result<Vec<domain::BodyWeight>, domain::ReadError> {
        let mut body_weight = self
            .fetch_all::<BodyWeight>(Endpoint::BodyWeight, &[])
            .await?
            .into_iter()
            .map(domain::BodyWeight::from)
            .collect::<Vec<_>>();
        body_weight.sort_by_key(|bw| bw.date);
        Ok(body_weight)
    }

    async fn create_body_weight(
        &self,
        body_weight: domain::BodyWeight,
    ) -> Result<domain::BodyWeight, domain::CreateError> {
        Ok(self
            .fetch::<BodyWeight, domain::CreateError>(
                self.post(Endpoint::BodyWeight, &BodyWeight::from(body_weight)),
            )
            .await?
            .into())
    }

    async fn replace_body_weight(
        &self,
        body_weight: domain::BodyWeight,
    ) -> Result<domain::BodyWeight, domain::UpdateError> {
        Ok(self
            .fetch::<BodyWeight, domain::UpdateError>(self.patch(
                Endpoint::BodyWeight,
                *body_weight.id,
                &BodyWeight::from(body_weight),
            ))
            .await?
            .into())
    }

    async fn delete_body_weight(
        &self,
        id: domain::BodyWeightID,
    ) -> Result<domain::BodyWeightID, domain::DeleteError> {
        self.fetch_no_content(self.delete(Endpoint::BodyWeight, *id), id)
            .await
    }
}

impl<S: SendRequest> domain::MeasurementRepository for REST<S> {
    async fn read_measurement_categories(
        &self,
    ) -> Result<Vec<domain::MeasurementCategory>, domain::ReadError> {
        let categories = self
            .fetch_all::<MeasurementCategory>(Endpoint::MeasurementCategory, &[])
            .await?
            .into_iter()
            .map(domain::MeasurementCategory::from)
            .collect::<Vec<_>>();
        let entries = try_join_all(
            categories
                .iter()
                .map(|c| self.read_measurement_entries(c.id)),
        )
        .await?;
        Ok(categories
            .into_iter()
            .zip(entries)
            .map(|(category, entries)| domain::MeasurementCategory {
                entries,
                ..category
            })
            .collect())
    }

    async fn read_measurement_category(
        &self,
        id: domain::MeasurementCategoryID,
    ) -> Result<domain::MeasurementCategory, domain::ReadError> {
        let category: domain::MeasurementCategory = self
            .fetch::<MeasurementCategory, domain::ReadError>(
                self.get(Endpoint::MeasurementCategory, Some(*id)),
            )
            .await?
            .into();
        Ok(domain::MeasurementCategory {
            entries: self.read_measurement_entries(id).await?,
            ..category
        })
    }

    async fn create_measurement_category(
        &self,
        name: domain::CategoryName,
        unit: domain::Unit,
        code: String,
    ) -> Result<domain::MeasurementCategory, domain::CreateError> {
        Ok(self
            .fetch::<MeasurementCategory, domain::CreateError>(self.post(
                Endpoint::MeasurementCategory,
                &NewMeasurementCategory {
                    name: name.to_string(),
                    unit: unit.to_string(),
                    code,
                },
            ))
            .await?
            .into())
    }

    async fn modify_measurement_category(
        &self,
        category: domain::MeasurementCategory,
    ) -> Result<domain::MeasurementCategory, domain::UpdateError> {
        let entries = category.entries.clone();
        let modified: domain::MeasurementCategory = self
            .fetch::<MeasurementCategory, domain::UpdateError>(self.patch(
                Endpoint::MeasurementCategory,
                *category.id,
                &MeasurementCategory::from(category),
            ))
            .await?
            .into();
        Ok(domain::MeasurementCategory {
            entries,
            ..modified
        })
    }

    async fn delete_measurement_category(
        &self,
        id: domain::MeasurementCategoryID,
    ) -> Result<domain::MeasurementCategoryID, domain::DeleteError> {
        self.fetch_no_content(self.delete(Endpoint::MeasurementCategory, *id), id)
            .await
    }

    async fn create_measurement_entry(
        &self,
        entry: domain::MeasurementEntry,
    ) -> Result<domain::MeasurementEntry, domain::CreateError> {
        Ok(self
            .fetch::<MeasurementEntry, domain::CreateError>(
                self.post(Endpoint::MeasurementEntry, &MeasurementEntry::from(entry)),
            )
            .await?
            .into())
    }

    async fn modify_measurement_entry(
        &self,
        entry: domain::MeasurementEntry,
    ) -> Result<domain::MeasurementEntry, domain::UpdateError> {
        Ok(self
            .fetch::<MeasurementEntry, domain::UpdateError>(self.patch(
                Endpoint::MeasurementEntry,
                *entry.id,
                &MeasurementEntry::from(entry),
            ))
            .await?
            .into())
    }

    async fn delete_measurement_entry(
        &self,
        id: domain::MeasurementEntryID,
    ) -> Result<domain::MeasurementEntryID, domain::DeleteError> {
        self.fetch_no_content(self.delete(Endpoint::MeasurementEntry, *id), id)
            .await
    }

    async fn test_measurement_code(
        &self,
        code: String,
    ) -> Result<domain::CodeTestOutput, domain::CreateError> {
        let request = self
            .post(Endpoint::MeasurementTestCode, &CodeTest { code })
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;
        let body = response
            .text()
            .await
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        match response.status() {
            _ if response.ok() => Ok(domain::CodeTestOutput::Success(body)),
            401 | 403 => Err(domain::StorageError::NoSession.into()),
            _ => Ok(domain::CodeTestOutput::Failure(body)),
        }
    }
}

impl<S: SendRequest> domain::RoutineRepository for REST<S> {
    async fn read_routines(&self) -> Result<Vec<domain::WorkoutRoutine>, domain::ReadError> {
        Ok(self
            .fetch_all::<WorkoutRoutine>(Endpoint::Routine, &[])
            .await?
            .into_iter()
            .map(domain::WorkoutRoutine::from)
            .collect())
    }

    async fn read_routine(
        &self,
        id: domain::RoutineID,
    ) -> Result<domain::WorkoutRoutine, domain::ReadError> {
        let routine: domain::WorkoutRoutine = self
            .fetch::<WorkoutRoutine, domain::ReadError>(self.get(Endpoint::Routine, Some(*id)))
            .await?
            .into();
        let days = self
            .fetch_all::<Day>(Endpoint::Day, &[("training", *id)])
            .await?;
        let days = try_join_all(days.into_iter().map(|day| self.read_day_sets(day))).await?;
        Ok(domain::WorkoutRoutine { days, ..routine })
    }

    async fn create_routine(
        &self,
        name: domain::Name,
        description: String,
    ) -> Result<domain::WorkoutRoutine, domain::CreateError> {
        Ok(self
            .fetch::<WorkoutRoutine, domain::CreateError>(self.post(
                Endpoint::Routine,
                &NewWorkoutRoutine {
                    name: name.to_string(),
                    description,
                },
            ))
            .await?
            .into())
    }

    async fn delete_routine(
        &self,
        id: domain::RoutineID,
    ) -> Result<domain::RoutineID, domain::DeleteError> {
        self.fetch_no_content(self.delete(Endpoint::Routine, *id), id)
            .await
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_categories(&self) -> Result<Vec<domain::ExerciseCategory>, domain::ReadError> {
        Ok(self
            .fetch_all::<ExerciseCategory>(Endpoint::ExerciseCategory, &[])
            .await?
            .into_iter()
            .map(domain::ExerciseCategory::from)
            .collect())
    }

    async fn read_equipment(&self) -> Result<Vec<domain::Equipment>, domain::ReadError> {
        Ok(self
            .fetch_all::<Equipment>(Endpoint::Equipment, &[])
            .await?
            .into_iter()
            .map(domain::Equipment::from)
            .collect())
    }

    async fn read_muscles(&self) -> Result<Vec<domain::Muscle>, domain::ReadError> {
        Ok(self
            .fetch_all::<Muscle>(Endpoint::Muscle, &[])
            .await?
            .into_iter()
            .map(domain::Muscle::from)
            .collect())
    }

    async fn read_languages(&self) -> Result<Vec<domain::Language>, domain::ReadError> {
        Ok(self
            .fetch_all::<Language>(Endpoint::Language, &[])
            .await?
            .into_iter()
            .map(domain::Language::from)
            .collect())
    }

    async fn read_exercise_bases(&self) -> Result<Vec<domain::ExerciseBase>, domain::ReadError> {
        Ok(self
            .fetch_all::<ExerciseBaseInfo>(Endpoint::ExerciseBaseInfo, &[])
            .await?
            .into_iter()
            .map(domain::ExerciseBase::from)
            .collect())
    }

    async fn create_variation(&self) -> Result<domain::VariationID, domain::CreateError> {
        Ok(self
            .fetch::<Variation, domain::CreateError>(
                self.post(Endpoint::Variation, &NewVariation {}),
            )
            .await?
            .id
            .into())
    }

    async fn modify_base_variation(
        &self,
        base: domain::ExerciseBaseID,
        variation: domain::VariationID,
    ) -> Result<domain::ExerciseBaseID, domain::UpdateError> {
        self.send::<domain::UpdateError>(self.patch(
            Endpoint::ExerciseBase,
            *base,
            &ExerciseBaseVariation {
                variations: Some(*variation),
            },
        ))
        .await?;
        Ok(base)
    }

    async fn create_exercise_base(
        &self,
        base: domain::NewExerciseBase,
    ) -> Result<domain::ExerciseBaseID, domain::CreateError> {
        Ok(self
            .fetch::<ExerciseBase, domain::CreateError>(
                self.post(Endpoint::ExerciseBase, &NewExerciseBase::from(base)),
            )
            .await?
            .id
            .into())
    }

    async fn create_translation(
        &self,
        translation: domain::NewTranslation,
    ) -> Result<domain::ExerciseTranslation, domain::CreateError> {
        Ok(self
            .fetch::<ExerciseTranslation, domain::CreateError>(
                self.post(Endpoint::Translation, &NewTranslation::from(translation)),
            )
            .await?
            .into())
    }

    async fn create_alias(
        &self,
        translation: domain::TranslationID,
        alias: String,
    ) -> Result<domain::Alias, domain::CreateError> {
        Ok(self
            .fetch::<Alias, domain::CreateError>(self.post(
                Endpoint::Alias,
                &NewAlias {
                    exercise: *translation,
                    alias,
                },
            ))
            .await?
            .into())
    }

    async fn create_note(
        &self,
        translation: domain::TranslationID,
        comment: String,
    ) -> Result<domain::Note, domain::CreateError> {
        Ok(self
            .fetch::<Note, domain::CreateError>(self.post(
                Endpoint::Note,
                &NewNote {
                    exercise: *translation,
                    comment,
                },
            ))
            .await?
            .into())
    }

    async fn upload_image(
        &self,
        base: domain::ExerciseBaseID,
        author: String,
        image: domain::MediaFile,
    ) -> Result<domain::ExerciseImage, domain::CreateError> {
        Ok(self
            .fetch::<ExerciseImage, domain::CreateError>(self.upload(
                Endpoint::Image,
                base,
                &author,
                "image",
                &image,
            ))
            .await?
            .into())
    }

    async fn upload_video(
        &self,
        base: domain::ExerciseBaseID,
        author: String,
        video: domain::MediaFile,
    ) -> Result<domain::ExerciseVideo, domain::CreateError> {
        Ok(self
            .fetch::<ExerciseVideo, domain::CreateError>(self.upload(
                Endpoint::Video,
                base,
                &author,
                "video",
                &video,
            ))
            .await?
            .into())
    }

    async fn delete_video(
        &self,
        id: domain::VideoID,
    ) -> Result<domain::VideoID, domain::DeleteError> {
        self.fetch_no_content(self.delete(Endpoint::Video, *id), id)
            .await
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

/// Decimal values are sent as numbers, but the server may return them as strings.
mod decimal {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f32),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match Decimal::deserialize(deserializer)? {
            Decimal::Number(number) => Ok(number),
            Decimal::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub is_trustworthy: bool,
}

impl From<Profile> for domain::Profile {
    fn from(value: Profile) -> Self {
        domain::Profile {
            username: value.username,
            email: value.email,
            email_verified: value.email_verified,
            is_trustworthy: value.is_trustworthy,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyWeight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub date: NaiveDate,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub weight: f32,
}

impl From<BodyWeight> for domain::BodyWeight {
    fn from(value: BodyWeight) -> Self {
        domain::BodyWeight {
            id: value.id.unwrap_or_default().into(),
            date: value.date,
            weight: value.weight,
        }
    }
}

impl From<domain::BodyWeight> for BodyWeight {
    fn from(value: domain::BodyWeight) -> Self {
        BodyWeight {
            id: (!value.id.is_nil()).then_some(*value.id),
            date: value.date,
            weight: value.weight,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCategory {
    pub id: u32,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
}

impl From<MeasurementCategory> for domain::MeasurementCategory {
    fn from(value: MeasurementCategory) -> Self {
        domain::MeasurementCategory {
            id: value.id.into(),
            name: value.name,
            unit: value.unit,
            description: value.description,
            code: value.code,
            entries: vec![],
        }
    }
}

impl From<domain::MeasurementCategory> for MeasurementCategory {
    fn from(value: domain::MeasurementCategory) -> Self {
        MeasurementCategory {
            id: value.id.into(),
            name: value.name,
            unit: value.unit,
            description: value.description,
            code: value.code,
        }
    }
}

/// Body of a category creation. The description can only be set when editing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewMeasurementCategory {
    pub name: String,
    pub unit: String,
    pub code: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeTest {
    pub code: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MeasurementEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub category: u32,
    pub date: NaiveDate,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub value: f32,
    #[serde(default)]
    pub notes: String,
}

impl From<MeasurementEntry> for domain::MeasurementEntry {
    fn from(value: MeasurementEntry) -> Self {
        domain::MeasurementEntry {
            id: value.id.unwrap_or_default().into(),
            category: value.category.into(),
            date: value.date,
            value: value.value,
            notes: value.notes,
        }
    }
}

impl From<domain::MeasurementEntry> for MeasurementEntry {
    fn from(value: domain::MeasurementEntry) -> Self {
        MeasurementEntry {
            id: (!value.id.is_nil()).then_some(*value.id),
            category: value.category.into(),
            date: value.date,
            value: value.value,
            notes: value.notes,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRoutine {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "creation_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub is_dynamic: bool,
}

impl From<WorkoutRoutine> for domain::WorkoutRoutine {
    fn from(value: WorkoutRoutine) -> Self {
        domain::WorkoutRoutine {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            date: value.date,
            is_dynamic: value.is_dynamic,
            days: vec![],
        }
    }
}

impl From<domain::WorkoutRoutine> for WorkoutRoutine {
    fn from(value: domain::WorkoutRoutine) -> Self {
        WorkoutRoutine {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            date: value.date,
            is_dynamic: value.is_dynamic,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutRoutine {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "day", default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub decision_result: bool,
    #[serde(default)]
    pub decision_stdout: String,
}

impl From<Day> for domain::Day {
    fn from(value: Day) -> Self {
        domain::Day {
            id: value.id.into(),
            description: value.description,
            days_of_week: value.days_of_week,
            decision_result: value.decision_result,
            decision_stdout: value.decision_stdout,
            sets: vec![],
        }
    }
}

impl From<domain::Day> for Day {
    fn from(value: domain::Day) -> Self {
        Day {
            id: value.id.into(),
            description: value.description,
            days_of_week: value.days_of_week,
            decision_result: value.decision_result,
            decision_stdout: value.decision_stdout,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSet {
    pub id: u32,
    #[serde(rename = "exerciseday")]
    pub day: u32,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub comment: String,
}

impl From<WorkoutSet> for domain::WorkoutSet {
    fn from(value: WorkoutSet) -> Self {
        domain::WorkoutSet {
            id: value.id.into(),
            day: value.day.into(),
            order: value.order,
            sets: value.sets,
            comment: value.comment,
        }
    }
}

impl From<domain::WorkoutSet> for WorkoutSet {
    fn from(value: domain::WorkoutSet) -> Self {
        WorkoutSet {
            id: value.id.into(),
            day: value.day.into(),
            order: value.order,
            sets: value.sets,
            comment: value.comment,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCategory {
    pub id: u32,
    pub name: String,
}

impl From<ExerciseCategory> for domain::ExerciseCategory {
    fn from(value: ExerciseCategory) -> Self {
        domain::ExerciseCategory {
            id: value.id.into(),
            name: value.name,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id: u32,
    pub name: String,
}

impl From<Equipment> for domain::Equipment {
    fn from(value: Equipment) -> Self {
        domain::Equipment {
            id: value.id.into(),
            name: value.name,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub is_front: bool,
}

impl From<Muscle> for domain::Muscle {
    fn from(value: Muscle) -> Self {
        domain::Muscle {
            id: value.id.into(),
            name: value.name,
            name_en: value.name_en,
            is_front: value.is_front,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: u32,
    pub short_name: String,
    pub full_name: String,
}

impl From<Language> for domain::Language {
    fn from(value: Language) -> Self {
        domain::Language {
            id: value.id.into(),
            short_name: value.short_name,
            full_name: value.full_name,
        }
    }
}

/// Exercise base with its related objects embedded.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBaseInfo {
    pub id: u32,
    pub category: ExerciseCategory,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub muscles: Vec<Muscle>,
    #[serde(default)]
    pub muscles_secondary: Vec<Muscle>,
    pub variations: Option<u32>,
    #[serde(rename = "exercises", default)]
    pub translations: Vec<TranslationInfo>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranslationInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub language: u32,
}

impl From<ExerciseBaseInfo> for domain::ExerciseBase {
    fn from(value: ExerciseBaseInfo) -> Self {
        let base = domain::ExerciseBaseID::from(value.id);
        domain::ExerciseBase {
            id: base,
            category: value.category.id.into(),
            equipment: value.equipment.into_iter().map(|e| e.id.into()).collect(),
            muscles: value.muscles.into_iter().map(|m| m.id.into()).collect(),
            muscles_secondary: value
                .muscles_secondary
                .into_iter()
                .map(|m| m.id.into())
                .collect(),
            variation: value.variations.map(domain::VariationID::from),
            translations: value
                .translations
                .into_iter()
                .map(|t| domain::ExerciseTranslation {
                    id: t.id.into(),
                    base,
                    language: t.language.into(),
                    name: t.name,
                    description: t.description,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBase {
    pub id: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewExerciseBase {
    pub category: u32,
    pub equipment: Vec<u32>,
    pub muscles: Vec<u32>,
    pub muscles_secondary: Vec<u32>,
    pub variations: Option<u32>,
    pub license_author: String,
}

impl From<domain::NewExerciseBase> for NewExerciseBase {
    fn from(value: domain::NewExerciseBase) -> Self {
        NewExerciseBase {
            category: value.category.into(),
            equipment: value.equipment.into_iter().map(u32::from).collect(),
            muscles: value.muscles.into_iter().map(u32::from).collect(),
            muscles_secondary: value.muscles_secondary.into_iter().map(u32::from).collect(),
            variations: value.variation.map(u32::from),
            license_author: value.author,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBaseVariation {
    pub variations: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub id: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewVariation {}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTranslation {
    pub id: u32,
    pub exercise_base: u32,
    pub language: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<ExerciseTranslation> for domain::ExerciseTranslation {
    fn from(value: ExerciseTranslation) -> Self {
        domain::ExerciseTranslation {
            id: value.id.into(),
            base: value.exercise_base.into(),
            language: value.language.into(),
            name: value.name,
            description: value.description,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub exercise_base: u32,
    pub language: u32,
    pub name: String,
    pub description: String,
    pub license_author: String,
}

impl From<domain::NewTranslation> for NewTranslation {
    fn from(value: domain::NewTranslation) -> Self {
        NewTranslation {
            exercise_base: value.base.into(),
            language: value.language.into(),
            name: value.name,
            description: value.description,
            license_author: value.author,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub id: u32,
    pub exercise: u32,
    pub alias: String,
}

impl From<Alias> for domain::Alias {
    fn from(value: Alias) -> Self {
        domain::Alias {
            id: value.id.into(),
            translation: value.exercise.into(),
            alias: value.alias,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewAlias {
    pub exercise: u32,
    pub alias: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u32,
    pub exercise: u32,
    pub comment: String,
}

impl From<Note> for domain::Note {
    fn from(value: Note) -> Self {
        domain::Note {
            id: value.id.into(),
            translation: value.exercise.into(),
            comment: value.comment,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub exercise: u32,
    pub comment: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseImage {
    pub id: u32,
    pub exercise_base: u32,
    pub image: String,
    #[serde(default)]
    pub is_main: bool,
}

impl From<ExerciseImage> for domain::ExerciseImage {
    fn from(value: ExerciseImage) -> Self {
        domain::ExerciseImage {
            id: value.id.into(),
            base: value.exercise_base.into(),
            url: value.image,
            is_main: value.is_main,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseVideo {
    pub id: u32,
    pub exercise_base: u32,
    pub video: String,
}

impl From<ExerciseVideo> for domain::ExerciseVideo {
    fn from(value: ExerciseVideo) -> Self {
        domain::ExerciseVideo {
            id: value.id.into(),
            base: value.exercise_base.into(),
            url: value.video,
        }
    }
}
