//! Appointment records binding a patient to a professional at a time slot.
//!
//! Construction is atomic and strict: every field passes validation before
//! any part of the record exists, so a constructed `Appointment` never holds
//! an invalid value. Mutation after construction is lenient: setters drop
//! invalid input and keep the prior value. Both halves of that asymmetry
//! are contractual.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::professional::Professional;
use clinic_types::{MobileNumber, PatientName, TimeSlot};

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{label}")
    }
}

/// Result of a [`Appointment::cancel`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The appointment transitioned to cancelled.
    Cancelled,
    /// The appointment was already cancelled; nothing changed.
    AlreadyCancelled,
}

/// A booking linking a patient to a [`Professional`] at a time slot.
///
/// The professional is shared, not owned: appointments hold an `Arc` and
/// never control the professional's lifetime. Only the placeholder built by
/// `Default` lacks a professional; operations that read it fail fast with
/// [`ValidationError::MissingProfessional`].
#[derive(Debug, Clone)]
pub struct Appointment {
    patient_name: PatientName,
    patient_mobile: MobileNumber,
    time_slot: TimeSlot,
    professional: Option<Arc<Professional>>,
    status: AppointmentStatus,
}

impl Appointment {
    /// Creates a validated appointment, initially `SCHEDULED`.
    ///
    /// Checks run in a fixed order (patient name, then mobile, then time
    /// slot) and the first failure wins. The professional parameter cannot
    /// be absent at the type level, which discharges the non-null check.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first invalid field.
    pub fn new(
        patient_name: &str,
        patient_mobile: &str,
        time_slot: &str,
        professional: Arc<Professional>,
    ) -> ValidationResult<Self> {
        let patient_name = PatientName::new(patient_name)?;
        let patient_mobile = MobileNumber::new(patient_mobile)?;
        let time_slot = TimeSlot::new(time_slot)?;

        Ok(Self {
            patient_name,
            patient_mobile,
            time_slot,
            professional: Some(professional),
            status: AppointmentStatus::Scheduled,
        })
    }

    pub fn patient_name(&self) -> &str {
        self.patient_name.as_str()
    }

    /// The normalized (whitespace-stripped) mobile number.
    pub fn patient_mobile(&self) -> &MobileNumber {
        &self.patient_mobile
    }

    pub fn time_slot(&self) -> &str {
        self.time_slot.as_str()
    }

    /// The attached professional, absent only on the placeholder.
    pub fn professional(&self) -> Option<&Professional> {
        self.professional.as_deref()
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Cancels the appointment. Idempotent: cancelling an already-cancelled
    /// appointment reports [`CancelOutcome::AlreadyCancelled`] and changes
    /// nothing.
    pub fn cancel(&mut self) -> CancelOutcome {
        if self.status == AppointmentStatus::Cancelled {
            return CancelOutcome::AlreadyCancelled;
        }
        self.status = AppointmentStatus::Cancelled;
        CancelOutcome::Cancelled
    }

    /// Confirms the appointment unconditionally, whatever the current
    /// status. A cancelled appointment can be confirmed back into life.
    pub fn confirm(&mut self) {
        self.status = AppointmentStatus::Confirmed;
    }

    /// An appointment stays valid until it is cancelled.
    pub fn is_valid(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }

    /// One-line summary: `"<time> - <patient> with <professional>"`.
    ///
    /// # Errors
    ///
    /// Fails with `MissingProfessional` on the placeholder.
    pub fn summary(&self) -> ValidationResult<String> {
        let professional = self.require_professional()?;
        Ok(format!(
            "{} - {} with {}",
            self.time_slot,
            self.patient_name,
            professional.name()
        ))
    }

    /// Renders the bracketed multi-line detail block for console display.
    ///
    /// # Errors
    ///
    /// Fails with `MissingProfessional` on the placeholder.
    pub fn details(&self) -> ValidationResult<String> {
        let professional = self.require_professional()?;
        Ok([
            "=== Appointment Details ===".to_owned(),
            format!("Patient: {}", self.patient_name),
            format!("Mobile: {}", self.patient_mobile),
            format!("Time: {}", self.time_slot),
            format!("Doctor: {}", professional.name()),
            format!("Doctor ID: {}", professional.id()),
            format!("Doctor Type: {}", professional.professional_type()),
            format!("Status: {}", self.status),
            "===========================".to_owned(),
        ]
        .join("\n"))
    }

    /// Flattens the appointment into a serializable snapshot.
    ///
    /// # Errors
    ///
    /// Fails with `MissingProfessional` on the placeholder.
    pub fn record(&self) -> ValidationResult<AppointmentRecord> {
        let professional = self.require_professional()?;
        Ok(AppointmentRecord {
            patient_name: self.patient_name.as_str().to_owned(),
            patient_mobile: self.patient_mobile.as_str().to_owned(),
            time_slot: self.time_slot.as_str().to_owned(),
            professional_name: professional.name().to_owned(),
            professional_id: professional.id(),
            professional_type: professional.professional_type().to_owned(),
            status: self.status,
        })
    }

    /// Silent-ignore mutator: invalid names leave the prior value.
    pub fn set_patient_name(&mut self, patient_name: &str) -> bool {
        match PatientName::new(patient_name) {
            Ok(name) => {
                self.patient_name = name;
                true
            }
            Err(_) => false,
        }
    }

    /// Silent-ignore mutator: malformed mobiles leave the prior value.
    pub fn set_patient_mobile(&mut self, patient_mobile: &str) -> bool {
        match MobileNumber::new(patient_mobile) {
            Ok(mobile) => {
                self.patient_mobile = mobile;
                true
            }
            Err(_) => false,
        }
    }

    /// Silent-ignore mutator: malformed times leave the prior value.
    pub fn set_time_slot(&mut self, time_slot: &str) -> bool {
        match TimeSlot::new(time_slot) {
            Ok(slot) => {
                self.time_slot = slot;
                true
            }
            Err(_) => false,
        }
    }

    /// Attaches a professional. The typed parameter cannot be absent, so
    /// this always takes effect; the `bool` keeps the mutator family
    /// uniform.
    pub fn set_professional(&mut self, professional: Arc<Professional>) -> bool {
        self.professional = Some(professional);
        true
    }

    fn require_professional(&self) -> ValidationResult<&Professional> {
        self.professional
            .as_deref()
            .ok_or(ValidationError::MissingProfessional)
    }
}

impl Default for Appointment {
    /// The fixed placeholder: `"Unknown"` at `09:00` with mobile
    /// `0400000000`, no professional attached, status `SCHEDULED`.
    ///
    /// The placeholder bypasses validation by construction from known-good
    /// literals; the absent professional makes `summary`/`details`/`record`
    /// fail until one is attached.
    fn default() -> Self {
        Self {
            patient_name: PatientName::new("Unknown").expect("placeholder name is valid"),
            patient_mobile: MobileNumber::new("0400000000").expect("placeholder mobile is valid"),
            time_slot: TimeSlot::new("09:00").expect("placeholder time is valid"),
            professional: None,
            status: AppointmentStatus::Scheduled,
        }
    }
}

/// Identity is the patient mobile alone: two bookings for the same number
/// compare equal even with different patients or slots. Cancellation lookup
/// relies on exactly this key.
impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.patient_mobile == other.patient_mobile
    }
}

impl Eq for Appointment {}

impl std::hash::Hash for Appointment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.patient_mobile.hash(state);
    }
}

impl std::fmt::Display for Appointment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}, {})",
            self.time_slot, self.patient_name, self.patient_mobile, self.status
        )
    }
}

/// Flat, serializable snapshot of an appointment for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRecord {
    pub patient_name: String,
    pub patient_mobile: String,
    pub time_slot: String,
    pub professional_name: String,
    pub professional_id: i32,
    pub professional_type: String,
    pub status: AppointmentStatus,
}
