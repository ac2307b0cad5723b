use chrono::NaiveDate;

use crate::{
    CategoryName, CreateError, DeleteError, MeasurementCategoryID, MeasurementEntryID, ReadError,
    Unit, UpdateError, ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait MeasurementService {
    async fn get_measurement_categories(&self) -> Result<Vec<MeasurementCategory>, ReadError>;
    async fn get_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategory, ReadError>;
    async fn create_measurement_category(
        &self,
        name: CategoryName,
        unit: Unit,
        code: String,
    ) -> Result<MeasurementCategory, CreateError>;
    async fn modify_measurement_category(
        &self,
        category: MeasurementCategory,
    ) -> Result<MeasurementCategory, UpdateError>;
    async fn delete_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategoryID, DeleteError>;

    async fn create_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, CreateError>;
    async fn modify_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, UpdateError>;
    async fn delete_measurement_entry(
        &self,
        id: MeasurementEntryID,
    ) -> Result<MeasurementEntryID, DeleteError>;

    async fn test_measurement_code(&self, code: String) -> Result<CodeTestOutput, CreateError>;

    fn validate_measurement_category_name(
        &self,
        name: &str,
    ) -> Result<CategoryName, ValidationError> {
        CategoryName::new(name).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_measurement_category_unit(&self, unit: &str) -> Result<Unit, ValidationError> {
        Unit::new(unit).map_err(|err| ValidationError::Other(err.into()))
    }
}

#[allow(async_fn_in_trait)]
pub trait MeasurementRepository {
    async fn read_measurement_categories(&self) -> Result<Vec<MeasurementCategory>, ReadError>;
    async fn read_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategory, ReadError>;
    async fn create_measurement_category(
        &self,
        name: CategoryName,
        unit: Unit,
        code: String,
    ) -> Result<MeasurementCategory, CreateError>;
    async fn modify_measurement_category(
        &self,
        category: MeasurementCategory,
    ) -> Result<MeasurementCategory, UpdateError>;
    async fn delete_measurement_category(
        &self,
        id: MeasurementCategoryID,
    ) -> Result<MeasurementCategoryID, DeleteError>;

    async fn create_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, CreateError>;
    async fn modify_measurement_entry(
        &self,
        entry: MeasurementEntry,
    ) -> Result<MeasurementEntry, UpdateError>;
    async fn delete_measurement_entry(
        &self,
        id: MeasurementEntryID,
    ) -> Result<MeasurementEntryID, DeleteError>;

    async fn test_measurement_code(&self, code: String) -> Result<CodeTestOutput, CreateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementCategory {
    pub id: MeasurementCategoryID,
    pub name: String,
    pub unit: String,
    pub description: String,
    pub code: String,
    pub entries: Vec<MeasurementEntry>,
}

impl MeasurementCategory {
    #[must_use]
    pub fn latest_entry(&self) -> Option<&MeasurementEntry> {
        self.entries.iter().max_by_key(|e| e.date)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementEntry {
    pub id: MeasurementEntryID,
    pub category: MeasurementCategoryID,
    pub date: NaiveDate,
    pub value: f32,
    pub notes: String,
}

/// Raw payload returned by the code test endpoint.
///
/// Failures carry the error body of the response. Both variants are shown to the user as they
/// are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTestOutput {
    Success(String),
    Failure(String),
}

impl CodeTestOutput {
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            CodeTestOutput::Success(payload) | CodeTestOutput::Failure(payload) => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_latest_entry() {
        let entry = |id: u32, day: u32| MeasurementEntry {
            id: id.into(),
            category: 1.into(),
            date: NaiveDate::from_ymd_opt(2023, 5, day).unwrap(),
            value: 20.0,
            notes: String::new(),
        };
        let mut category = MeasurementCategory {
            id: 1.into(),
            name: "BF%".to_string(),
            unit: "%".to_string(),
            description: String::new(),
            code: String::new(),
            entries: vec![],
        };
        assert_eq!(category.latest_entry(), None);
        category.entries = vec![entry(1, 3), entry(2, 9), entry(3, 4)];
        assert_eq!(category.latest_entry().map(|e| e.id), Some(2.into()));
    }

    #[test]
    fn test_code_test_output_payload() {
        assert_eq!(CodeTestOutput::Success("[]".to_string()).payload(), "[]");
        assert_eq!(
            CodeTestOutput::Failure("NameError".to_string()).payload(),
            "NameError"
        );
    }
}
