//! Validated text primitives for the clinic appointment register.
//!
//! Every type in this crate enforces its invariant at construction time and
//! is immutable afterwards. Deserialization goes through the same
//! constructors, so a value of one of these types is always well-formed no
//! matter where it came from.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace.
    #[error("text cannot be empty")]
    Empty,
    /// The input text was shorter than the required minimum after trimming.
    #[error("name must be at least {min} characters: {value}")]
    TooShort { min: usize, value: String },
    /// The input did not match the Australian mobile format after
    /// whitespace stripping.
    #[error("invalid mobile number: {value}")]
    InvalidMobile { value: String },
    /// The input did not match the 24-hour `HH:MM` format.
    #[error("invalid time format: {value}")]
    InvalidTime { value: String },
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during
/// construction; the trimmed result must contain at least one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A patient name: trimmed, at least two characters long.
///
/// The two-character minimum applies to patient names only; professional
/// names use [`NonEmptyText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PatientName(String);

impl PatientName {
    /// Minimum length of a patient name after trimming.
    pub const MIN_LEN: usize = 2;

    /// Creates a new `PatientName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TextError::TooShort` if the trimmed input has fewer than
    /// [`PatientName::MIN_LEN`] characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.chars().count() < Self::MIN_LEN {
            return Err(TextError::TooShort {
                min: Self::MIN_LEN,
                value: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PatientName {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An Australian mobile number: `04` followed by exactly eight digits.
///
/// All whitespace is stripped before validation, so `"0412 345 678"` is
/// accepted and stored as `"0412345678"`. The stored form is always the
/// stripped one, which makes mobile numbers directly comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Creates a new `MobileNumber` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidMobile` (carrying the original input) if
    /// the stripped form is not `04` followed by eight digits.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let stripped: String = input
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let ok = stripped.len() == 10
            && stripped.starts_with("04")
            && stripped.bytes().all(|b| b.is_ascii_digit());

        if !ok {
            return Err(TextError::InvalidMobile {
                value: input.as_ref().to_owned(),
            });
        }
        Ok(Self(stripped))
    }

    /// Returns the normalized (whitespace-stripped) number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 24-hour time slot in `H:MM` or `HH:MM` form (hours 0-23, minutes 0-59).
///
/// The original text is preserved apart from trimming: `"9:00"` stays
/// `"9:00"` rather than being reformatted to `"09:00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Creates a new `TimeSlot` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidTime` if the trimmed input is not a
    /// valid 24-hour time.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if !is_valid_time(trimmed) {
            return Err(TextError::InvalidTime {
                value: input.as_ref().to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the time slot text as entered (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks `H:MM`/`HH:MM` with hours 0-23 and exactly two minute digits 00-59.
fn is_valid_time(text: &str) -> bool {
    let Some((hours, minutes)) = text.split_once(':') else {
        return false;
    };

    let hours_ok = matches!(hours.len(), 1 | 2)
        && hours.bytes().all(|b| b.is_ascii_digit())
        && hours.parse::<u8>().is_ok_and(|h| h <= 23);

    let minutes_ok = minutes.len() == 2
        && minutes.bytes().all(|b| b.is_ascii_digit())
        && minutes.parse::<u8>().is_ok_and(|m| m <= 59);

    hours_ok && minutes_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  Dr. Smith  ").expect("should accept");
        assert_eq!(text.as_str(), "Dr. Smith");
    }

    #[test]
    fn test_non_empty_text_rejects_empty_and_whitespace() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
    }

    #[test]
    fn test_patient_name_requires_two_characters() {
        assert!(PatientName::new("Jo").is_ok());
        let err = PatientName::new(" J ").expect_err("should reject one char");
        assert!(matches!(err, TextError::TooShort { min: 2, .. }));
    }

    #[test]
    fn test_patient_name_trims_whitespace() {
        let name = PatientName::new("  John Doe  ").expect("should accept");
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn test_mobile_accepts_plain_and_spaced_forms() {
        let plain = MobileNumber::new("0412345678").expect("should accept");
        assert_eq!(plain.as_str(), "0412345678");

        // Internal whitespace is stripped before validation.
        let spaced = MobileNumber::new("0412 345 678").expect("should accept");
        assert_eq!(spaced.as_str(), "0412345678");
        assert_eq!(plain, spaced);
    }

    #[test]
    fn test_mobile_rejects_malformed_input() {
        for bad in ["12345", "0312345678", "041234567", "04123456789", "04abcdefgh", ""] {
            let err = MobileNumber::new(bad).expect_err("should reject");
            assert!(matches!(err, TextError::InvalidMobile { .. }), "input: {bad}");
        }
    }

    #[test]
    fn test_mobile_error_carries_original_input() {
        let err = MobileNumber::new("12345").expect_err("should reject");
        assert!(matches!(err, TextError::InvalidMobile { value } if value == "12345"));
    }

    #[test]
    fn test_time_slot_accepts_valid_times() {
        for good in ["00:00", "9:00", "09:00", "14:30", "23:59"] {
            assert!(TimeSlot::new(good).is_ok(), "input: {good}");
        }
    }

    #[test]
    fn test_time_slot_preserves_entered_form() {
        let slot = TimeSlot::new(" 9:00 ").expect("should accept");
        assert_eq!(slot.as_str(), "9:00");
    }

    #[test]
    fn test_time_slot_rejects_malformed_input() {
        for bad in ["24:00", "12:60", "9:5", "009:00", "12-30", "12:", ":30", "noon"] {
            let err = TimeSlot::new(bad).expect_err("should reject");
            assert!(matches!(err, TextError::InvalidTime { .. }), "input: {bad}");
        }
    }

    #[test]
    fn test_deserialization_revalidates() {
        let ok: Result<MobileNumber, _> = serde_json::from_str("\"0412345678\"");
        assert!(ok.is_ok());

        let bad: Result<MobileNumber, _> = serde_json::from_str("\"12345\"");
        assert!(bad.is_err());

        let bad_time: Result<TimeSlot, _> = serde_json::from_str("\"25:00\"");
        assert!(bad_time.is_err());
    }
}
