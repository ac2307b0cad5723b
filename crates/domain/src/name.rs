use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Name of a measurement category.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CategoryName(String);

impl CategoryName {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 20;

    /// The upper bound applies to the input as typed, the lower bound to the trimmed name.
    pub fn new(name: &str) -> Result<Self, CategoryNameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(CategoryNameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len < Self::MIN_LEN {
            return Err(CategoryNameError::TooShort(len));
        }

        let input_len = name.chars().count();

        if input_len > Self::MAX_LEN {
            return Err(CategoryNameError::TooLong(input_len));
        }

        Ok(CategoryName(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryNameError {
    #[error("Name is required")]
    Empty,
    #[error("Name must be at least 3 characters ({0} < 3)")]
    TooShort(usize),
    #[error("Name must be 20 characters or fewer ({0} > 20)")]
    TooLong(usize),
}

/// Unit of a measurement category, e.g. `cm` or `%`.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Unit(String);

impl Unit {
    pub const MAX_LEN: usize = 5;

    /// The length limit applies to the input as typed.
    pub fn new(unit: &str) -> Result<Self, UnitError> {
        let trimmed_unit = unit.trim();

        if trimmed_unit.is_empty() {
            return Err(UnitError::Empty);
        }

        let len = unit.chars().count();

        if len > Self::MAX_LEN {
            return Err(UnitError::TooLong(len));
        }

        Ok(Unit(trimmed_unit.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UnitError {
    #[error("Unit is required")]
    Empty,
    #[error("Unit must be 5 characters or fewer ({0} > 5)")]
    TooLong(usize),
}
