use crate::notification::NotificationID;

/// Result of submitting a form to the server.
///
/// Both outcomes have raised a notification that expires on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Saved { entry: T, notification: NotificationID },
    Failed { notification: NotificationID },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("form contains invalid values")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue<T> {
    pub input: String,
    pub validated: Result<T, String>,
    pub orig: String,
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            validated: Err(String::new()),
            orig: String::new(),
        }
    }
}

impl<T: ToString> FieldValue<T> {
    pub fn new(value: T) -> Self {
        let value_string = value.to_string();
        Self {
            input: value_string.clone(),
            validated: Ok(value),
            orig: value_string,
        }
    }
}

impl<T> FieldValue<T> {
    /// Replaces the input and the validation result, keeping the original input.
    pub fn update<E: ToString>(&mut self, input: String, validated: Result<T, E>) {
        self.input = input;
        self.validated = validated.map_err(|err| err.to_string());
    }

    /// Validation message to show next to the field, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.validated {
            Err(err) if !err.is_empty() => Some(err),
            _ => None,
        }
    }
}

impl FieldValue<()> {
    pub fn has_valid_changes(values: &[&dyn FieldValueState]) -> bool {
        values.iter().any(|v| v.changed()) && values.iter().all(|v| v.valid())
    }

    pub fn all_valid(values: &[&dyn FieldValueState]) -> bool {
        values.iter().all(|v| v.valid())
    }
}

pub trait FieldValueState {
    fn valid(&self) -> bool;
    fn changed(&self) -> bool;
}

impl<T> FieldValueState for FieldValue<T> {
    fn valid(&self) -> bool {
        self.validated.is_ok()
    }

    fn changed(&self) -> bool {
        self.input.trim() != self.orig.trim()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_field_value_new() {
        let value = FieldValue::new(80.5);
        assert_eq!(value.input, "80.5");
        assert!(value.valid());
        assert!(!value.changed());
        assert_eq!(value.error(), None);
    }

    #[test]
    fn test_field_value_default_is_invalid_without_message() {
        let value = FieldValue::<f32>::default();
        assert!(!value.valid());
        assert_eq!(value.error(), None);
    }

    #[test]
    fn test_field_value_update() {
        let mut value = FieldValue::new(80.5);
        value.update(" 81 ".to_string(), Err::<f32, _>("Max weight is 300 kg"));
        assert!(value.changed());
        assert_eq!(value.error(), Some("Max weight is 300 kg"));
        value.update("80.5 ".to_string(), Ok::<_, String>(80.5));
        assert!(!value.changed());
    }

    #[test]
    fn test_has_valid_changes() {
        let unchanged = FieldValue::new(1);
        let mut changed = FieldValue::new(2);
        changed.update("3".to_string(), Ok::<_, String>(3));
        let mut invalid = FieldValue::new(4);
        invalid.update("x".to_string(), Err::<i32, _>("invalid"));

        assert!(!FieldValue::has_valid_changes(&[&unchanged]));
        assert!(FieldValue::has_valid_changes(&[&unchanged, &changed]));
        assert!(!FieldValue::has_valid_changes(&[&changed, &invalid]));
        assert!(!FieldValue::all_valid(&[&changed, &invalid]));
    }
}
