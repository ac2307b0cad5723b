use liftlog_domain::{self as domain, MeasurementService};

use crate::{
    form::{FieldValue, FieldValueState, FormError, Submission},
    notification::Notifier,
};

/// Dialog state for creating or editing a measurement category.
///
/// The form edits an existing category if it was opened with one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    category: Option<domain::MeasurementCategory>,
    pub name: FieldValue<domain::CategoryName>,
    pub unit: FieldValue<domain::Unit>,
    pub description: String,
    pub code: String,
    code_result: Option<String>,
}

impl CategoryForm {
    #[must_use]
    pub fn new(category: Option<domain::MeasurementCategory>) -> Self {
        match category {
            Some(category) => Self {
                name: domain::CategoryName::new(&category.name)
                    .map(FieldValue::new)
                    .unwrap_or_else(|_| field(&category.name)),
                unit: domain::Unit::new(&category.unit)
                    .map(FieldValue::new)
                    .unwrap_or_else(|_| field(&category.unit)),
                description: category.description.clone(),
                code: category.code.clone(),
                category: Some(category),
                code_result: None,
            },
            None => Self {
                category: None,
                name: FieldValue::default(),
                unit: FieldValue::default(),
                description: String::new(),
                code: String::new(),
                code_result: None,
            },
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.category.is_some()
    }

    pub fn set_name<S: MeasurementService>(&mut self, service: &S, input: String) {
        let validated = service.validate_measurement_category_name(&input);
        self.name.update(input, validated);
    }

    pub fn set_unit<S: MeasurementService>(&mut self, service: &S, input: String) {
        let validated = service.validate_measurement_category_unit(&input);
        self.unit.update(input, validated);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        FieldValue::all_valid(&[&self.name as &dyn FieldValueState, &self.unit])
    }

    /// Output of the last code test, shown as returned by the server.
    #[must_use]
    pub fn code_result(&self) -> Option<&str> {
        self.code_result.as_deref()
    }

    /// Runs the current code on the server without touching the category.
    pub async fn test_code<S: MeasurementService>(&mut self, service: &S) {
        self.code_result = Some(match service.test_measurement_code(self.code.clone()).await {
            Ok(output) => output.payload().to_string(),
            Err(err) => err.to_string(),
        });
    }

    pub async fn submit<S: MeasurementService>(
        &mut self,
        service: &S,
        categories: &mut Vec<domain::MeasurementCategory>,
        notifier: &Notifier,
    ) -> Result<Submission<domain::MeasurementCategory>, FormError> {
        let (Ok(name), Ok(unit)) = (&self.name.validated, &self.unit.validated) else {
            return Err(FormError::Invalid);
        };

        let result = match &self.category {
            Some(category) => service
                .modify_measurement_category(domain::MeasurementCategory {
                    name: name.to_string(),
                    unit: unit.to_string(),
                    description: self.description.trim().to_string(),
                    code: self.code.clone(),
                    ..category.clone()
                })
                .await
                .map_err(|err| err.to_string()),
            None => service
                .create_measurement_category(name.clone(), unit.clone(), self.code.clone())
                .await
                .map_err(|err| err.to_string()),
        };

        match result {
            Ok(category) => {
                match categories.iter_mut().find(|c| c.id == category.id) {
                    Some(existing) => *existing = category.clone(),
                    None => categories.push(category.clone()),
                }
                Ok(Submission::Saved {
                    entry: category,
                    notification: notifier.success("Successful"),
                })
            }
            Err(err) => Ok(Submission::Failed {
                notification: notifier.error("Failed to save", err),
            }),
        }
    }
}

fn field<T>(input: &str) -> FieldValue<T> {
    FieldValue {
        input: input.to_string(),
        validated: Err(String::new()),
        orig: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures_util::FutureExt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create {
            name: String,
            unit: String,
            code: String,
        },
        Modify(domain::MeasurementCategory),
        TestCode(String),
    }

    #[derive(Default)]
    struct MockService {
        calls: RefCell<Vec<Call>>,
        fail: bool,
    }

    impl MeasurementService for MockService {
        async fn get_measurement_categories(
            &self,
        ) -> Result<Vec<domain::MeasurementCategory>, domain::ReadError> {
            Ok(vec![])
        }

        async fn get_measurement_category(
            &self,
            _: domain::MeasurementCategoryID,
        ) -> Result<domain::MeasurementCategory, domain::ReadError> {
            Err(domain::StorageError::NoConnection.into())
        }

        async fn create_measurement_category(
            &self,
            name: domain::CategoryName,
            unit: domain::Unit,
            code: String,
        ) -> Result<domain::MeasurementCategory, domain::CreateError> {
            self.calls.borrow_mut().push(Call::Create {
                name: name.to_string(),
                unit: unit.to_string(),
                code: code.clone(),
            });
            if self.fail {
                return Err(domain::StorageError::Status {
                    status: 400,
                    body: "invalid".to_string(),
                }
                .into());
            }
            Ok(domain::MeasurementCategory {
                id: 7.into(),
                name: name.to_string(),
                unit: unit.to_string(),
                description: String::new(),
                code,
                entries: vec![],
            })
        }

        async fn modify_measurement_category(
            &self,
            category: domain::MeasurementCategory,
        ) -> Result<domain::MeasurementCategory, domain::UpdateError> {
            self.calls.borrow_mut().push(Call::Modify(category.clone()));
            Ok(category)
        }

        async fn delete_measurement_category(
            &self,
            id: domain::MeasurementCategoryID,
        ) -> Result<domain::MeasurementCategoryID, domain::DeleteError> {
            Ok(id)
        }

        async fn create_measurement_entry(
            &self,
            entry: domain::MeasurementEntry,
        ) -> Result<domain::MeasurementEntry, domain::CreateError> {
            Ok(entry)
        }

        async fn modify_measurement_entry(
            &self,
            entry: domain::MeasurementEntry,
        ) -> Result<domain::MeasurementEntry, domain::UpdateError> {
            Ok(entry)
        }

        async fn delete_measurement_entry(
            &self,
            id: domain::MeasurementEntryID,
        ) -> Result<domain::MeasurementEntryID, domain::DeleteError> {
            Ok(id)
        }

        async fn test_measurement_code(
            &self,
            code: String,
        ) -> Result<domain::CodeTestOutput, domain::CreateError> {
            self.calls.borrow_mut().push(Call::TestCode(code.clone()));
            if code.contains("raise") {
                Ok(domain::CodeTestOutput::Failure(
                    "{\"error\": \"ValueError\"}".to_string(),
                ))
            } else if code.is_empty() {
                Err(domain::StorageError::NoConnection.into())
            } else {
                Ok(domain::CodeTestOutput::Success("[12.5]".to_string()))
            }
        }
    }

    fn category() -> domain::MeasurementCategory {
        domain::MeasurementCategory {
            id: 3.into(),
            name: "Biceps".to_string(),
            unit: "cm".to_string(),
            description: "Left arm".to_string(),
            code: String::new(),
            entries: vec![domain::MeasurementEntry {
                id: 1.into(),
                category: 3.into(),
                date: chrono::NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
                value: 38.5,
                notes: String::new(),
            }],
        }
    }

    #[test]
    fn test_create_category() {
        let service = MockService::default();
        let mut categories = vec![];
        let notifier = Notifier::new();
        let mut form = CategoryForm::new(None);
        form.set_name(&service, "BF%".to_string());
        form.set_unit(&service, "%".to_string());

        let submission = form
            .submit(&service, &mut categories, &notifier)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(
            *service.calls.borrow(),
            vec![Call::Create {
                name: "BF%".to_string(),
                unit: "%".to_string(),
                code: String::new(),
            }]
        );
        assert!(matches!(submission, Submission::Saved { .. }));
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, 7.into());
    }

    #[test]
    fn test_edit_category() {
        let service = MockService::default();
        let mut categories = vec![category()];
        let notifier = Notifier::new();
        let mut form = CategoryForm::new(Some(category()));
        assert!(form.is_edit());
        assert!(form.is_valid());
        form.set_unit(&service, "mm".to_string());
        form.description = "Left arm, flexed ".to_string();

        form.submit(&service, &mut categories, &notifier)
            .now_or_never()
            .unwrap()
            .unwrap();

        let expected = domain::MeasurementCategory {
            unit: "mm".to_string(),
            description: "Left arm, flexed".to_string(),
            ..category()
        };
        assert_eq!(*service.calls.borrow(), vec![Call::Modify(expected.clone())]);
        assert_eq!(categories, vec![expected]);
    }

    #[rstest]
    #[case("BF", "%")]
    #[case("Body fat percentage 1", "%")]
    #[case("BF%", "")]
    #[case("BF%", "percent")]
    fn test_submit_invalid_category(#[case] name: &str, #[case] unit: &str) {
        let service = MockService::default();
        let mut categories = vec![];
        let notifier = Notifier::new();
        let mut form = CategoryForm::new(None);
        form.set_name(&service, name.to_string());
        form.set_unit(&service, unit.to_string());

        assert_eq!(
            form.submit(&service, &mut categories, &notifier)
                .now_or_never()
                .unwrap(),
            Err(FormError::Invalid)
        );
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn test_submit_failure() {
        let service = MockService {
            fail: true,
            ..MockService::default()
        };
        let mut categories = vec![];
        let notifier = Notifier::new();
        let mut form = CategoryForm::new(None);
        form.set_name(&service, "Waist".to_string());
        form.set_unit(&service, "cm".to_string());

        let submission = form
            .submit(&service, &mut categories, &notifier)
            .now_or_never()
            .unwrap()
            .unwrap();

        assert!(matches!(submission, Submission::Failed { .. }));
        assert!(categories.is_empty());
        assert_eq!(notifier.current().unwrap().message, "400: invalid");
    }

    #[rstest]
    #[case("return 12.5", "[12.5]")]
    #[case("raise ValueError", "{\"error\": \"ValueError\"}")]
    #[case("", "no connection")]
    fn test_test_code(#[case] code: &str, #[case] expected: &str) {
        let service = MockService::default();
        let mut form = CategoryForm::new(Some(category()));
        form.code = code.to_string();

        form.test_code(&service).now_or_never().unwrap();

        assert_eq!(form.code_result(), Some(expected));
        assert_eq!(form.code, code);
        assert!(form.is_valid());
        assert_eq!(
            *service.calls.borrow(),
            vec![Call::TestCode(code.to_string())]
        );
    }
}
