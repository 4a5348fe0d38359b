use clinic_types::TextError;

/// Errors raised by validating constructors.
///
/// Construction is atomic: the first failing check produces one of these
/// variants and no partial value is built. Each variant names the offending
/// field and, where there is one, carries the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ID cannot be negative: {value}")]
    NegativeId { value: i32 },
    #[error("name cannot be empty")]
    EmptyName,
    #[error("invalid patient name: {value}")]
    InvalidPatientName { value: String },
    #[error("invalid mobile number: {value}")]
    InvalidMobileNumber { value: String },
    #[error("invalid time format: {value}")]
    InvalidTimeSlot { value: String },
    #[error("appointment requires a health professional")]
    MissingProfessional,
}

impl From<TextError> for ValidationError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::Empty => ValidationError::EmptyName,
            TextError::TooShort { value, .. } => ValidationError::InvalidPatientName { value },
            TextError::InvalidMobile { value } => ValidationError::InvalidMobileNumber { value },
            TextError::InvalidTime { value } => ValidationError::InvalidTimeSlot { value },
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Errors returned by registry operations.
///
/// These never propagate past the driver: the caller prints the message and
/// carries on, leaving the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no appointment found for: {mobile}")]
    NotFound { mobile: String },
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_errors_map_to_field_specific_variants() {
        let err: ValidationError = TextError::Empty.into();
        assert_eq!(err, ValidationError::EmptyName);

        let err: ValidationError = TextError::TooShort {
            min: 2,
            value: "J".into(),
        }
        .into();
        assert!(matches!(err, ValidationError::InvalidPatientName { value } if value == "J"));

        let err: ValidationError = TextError::InvalidMobile {
            value: "12345".into(),
        }
        .into();
        assert!(matches!(err, ValidationError::InvalidMobileNumber { value } if value == "12345"));

        let err: ValidationError = TextError::InvalidTime {
            value: "25:00".into(),
        }
        .into();
        assert!(matches!(err, ValidationError::InvalidTimeSlot { value } if value == "25:00"));
    }

    #[test]
    fn test_registry_error_wraps_validation_error_transparently() {
        let err = RegistryError::from(ValidationError::MissingProfessional);
        assert_eq!(
            err.to_string(),
            "appointment requires a health professional"
        );
    }
}
