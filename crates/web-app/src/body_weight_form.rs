use chrono::{Local, NaiveDate};
use liftlog_domain::{self as domain, BodyWeightService};

use crate::{
    form::{FieldValue, FieldValueState, FormError, Submission},
    notification::Notifier,
};

/// Dialog state for adding or editing a body weight entry.
///
/// Submitting requires exclusive access, so a form has at most one request in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyWeightForm {
    editing: Option<domain::BodyWeight>,
    pub date: FieldValue<NaiveDate>,
    pub weight: FieldValue<f32>,
}

impl BodyWeightForm {
    pub fn add<S: BodyWeightService>(service: &S, body_weight: &[domain::BodyWeight]) -> Self {
        let mut form = Self {
            editing: None,
            date: FieldValue::default(),
            weight: FieldValue::default(),
        };
        form.set_date(service, Local::now().date_naive().to_string(), body_weight);
        form
    }

    #[must_use]
    pub fn edit(entry: domain::BodyWeight) -> Self {
        Self {
            date: FieldValue::new(entry.date),
            weight: FieldValue::new(entry.weight),
            editing: Some(entry),
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_date<S: BodyWeightService>(
        &mut self,
        service: &S,
        input: String,
        body_weight: &[domain::BodyWeight],
    ) {
        let validated = service.validate_body_weight_date(
            &input,
            body_weight,
            self.editing.as_ref().map(|e| e.date),
        );
        self.date.update(input, validated);
    }

    pub fn set_weight<S: BodyWeightService>(&mut self, service: &S, input: String) {
        let validated = service.validate_body_weight_weight(&input);
        self.weight.update(input, validated);
    }

    /// Whether the date picker must not offer the date.
    #[must_use]
    pub fn is_date_disabled(&self, date: NaiveDate, body_weight: &[domain::BodyWeight]) -> bool {
        date > Local::now().date_naive()
            || !domain::is_date_available(
                date,
                body_weight,
                self.editing.as_ref().map(|e| e.date),
            )
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        FieldValue::all_valid(&[&self.date as &dyn FieldValueState, &self.weight])
    }

    /// Creates or replaces the entry and updates `body_weight` on success.
    ///
    /// Invalid input is rejected without contacting the server.
    pub async fn submit<S: BodyWeightService>(
        &mut self,
        service: &S,
        body_weight: &mut Vec<domain::BodyWeight>,
        notifier: &Notifier,
    ) -> Result<Submission<domain::BodyWeight>, FormError> {
        let (Ok(date), Ok(weight)) = (&self.date.validated, &self.weight.validated) else {
            return Err(FormError::Invalid);
        };

        let result = match &self.editing {
            Some(entry) => service
                .replace_body_weight(domain::BodyWeight {
                    id: entry.id,
                    date: *date,
                    weight: *weight,
                })
                .await
                .map_err(|err| err.to_string()),
            None => service
                .create_body_weight(domain::BodyWeight {
                    id: domain::BodyWeightID::nil(),
                    date: *date,
                    weight: *weight,
                })
                .await
                .map_err(|err| err.to_string()),
        };

        match result {
            Ok(entry) => {
                body_weight.retain(|bw| bw.id != entry.id);
                body_weight.push(entry.clone());
                body_weight.sort_by_key(|bw| bw.date);
                self.editing = Some(entry.clone());
                Ok(Submission::Saved {
                    entry,
                    notification: notifier.success("Successful"),
                })
            }
            Err(err) => Ok(Submission::Failed {
                notification: notifier.error("Failed to save", err),
            }),
        }
    }
}
