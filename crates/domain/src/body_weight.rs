use chrono::{Local, NaiveDate};

use crate::{BodyWeightID, CreateError, DeleteError, ReadError, UpdateError, ValidationError};

pub const MIN_BODY_WEIGHT: f32 = 30.0;
pub const MAX_BODY_WEIGHT: f32 = 300.0;

#[allow(async_fn_in_trait)]
pub trait BodyWeightService {
    async fn get_body_weight(&self) -> Result<Vec<BodyWeight>, ReadError>;
    async fn create_body_weight(&self, body_weight: BodyWeight) -> Result<BodyWeight, CreateError>;
    async fn replace_body_weight(&self, body_weight: BodyWeight)
    -> Result<BodyWeight, UpdateError>;
    async fn delete_body_weight(&self, id: BodyWeightID) -> Result<BodyWeightID, DeleteError>;

    /// Dates of existing entries are rejected, except the date of the entry being edited.
    fn validate_body_weight_date(
        &self,
        date: &str,
        body_weight: &[BodyWeight],
        current: Option<NaiveDate>,
    ) -> Result<NaiveDate, ValidationError> {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed_date) => {
                if parsed_date > Local::now().date_naive() {
                    Err(ValidationError::Other(
                        "Date must not be in the future".into(),
                    ))
                } else if is_date_available(parsed_date, body_weight, current) {
                    Ok(parsed_date)
                } else {
                    Err(ValidationError::Conflict("date".to_string()))
                }
            }
            Err(_) => Err(ValidationError::Other("Invalid date".into())),
        }
    }

    fn validate_body_weight_weight(&self, weight: &str) -> Result<f32, ValidationError> {
        let weight = weight.replace(',', ".");
        let weight = weight.trim();
        if weight.is_empty() {
            return Err(ValidationError::Other("Weight field is required".into()));
        }
        match weight.parse::<f32>() {
            Ok(parsed_weight) if parsed_weight.is_finite() => {
                if parsed_weight < MIN_BODY_WEIGHT {
                    Err(ValidationError::Other("Min weight is 30 kg".into()))
                } else if parsed_weight > MAX_BODY_WEIGHT {
                    Err(ValidationError::Other("Max weight is 300 kg".into()))
                } else {
                    Ok(parsed_weight)
                }
            }
            _ => Err(ValidationError::Other(
                "Weight must be a decimal number".into(),
            )),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait BodyWeightRepository {
    async fn read_body_weight(&self) -> Result<Vec<BodyWeight>, ReadError>;
    async fn create_body_weight(&self, body_weight: BodyWeight) -> Result<BodyWeight, CreateError>;
    async fn replace_body_weight(&self, body_weight: BodyWeight)
    -> Result<BodyWeight, UpdateError>;
    async fn delete_body_weight(&self, id: BodyWeightID) -> Result<BodyWeightID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyWeight {
    pub id: BodyWeightID,
    pub date: NaiveDate,
    pub weight: f32,
}

/// Whether a date can be picked for a new or edited entry.
#[must_use]
pub fn is_date_available(
    date: NaiveDate,
    body_weight: &[BodyWeight],
    current: Option<NaiveDate>,
) -> bool {
    current == Some(date) || body_weight.iter().all(|bw| bw.date != date)
}

#[must_use]
pub fn latest_body_weight(body_weight: &[BodyWeight]) -> Option<&BodyWeight> {
    body_weight.iter().max_by_key(|bw| bw.date)
}
