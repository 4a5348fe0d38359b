//! The appointment register: an ordered, owned collection of appointments.
//!
//! The registry is a plain value handed to whoever needs it, never
//! process-global state, so tests get isolated instances for free. Its
//! operations return [`RegistryError`] for the caller to report; failures
//! leave the collection untouched.

use std::sync::Arc;

use crate::appointment::Appointment;
use crate::error::{RegistryError, RegistryResult};
use crate::professional::Professional;

/// Ordered collection of appointments with create/list/cancel operations.
///
/// Insertion order is preserved. Duplicate mobile numbers are permitted at
/// the storage level; only equality and cancellation lookup treat the
/// mobile as an identity.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    appointments: Vec<Appointment>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates inputs and appends a new appointment.
    ///
    /// Presence is checked field by field before construction is attempted,
    /// so a blank mobile reports "patient mobile is required" rather than a
    /// format error. Construction failures pass through unchanged. Nothing
    /// is appended on any failure.
    ///
    /// # Errors
    ///
    /// `RegistryError::MissingField` for an absent or blank required field,
    /// `RegistryError::Validation` when construction rejects a value.
    pub fn create(
        &mut self,
        patient_name: &str,
        patient_mobile: &str,
        time_slot: &str,
        professional: Option<Arc<Professional>>,
    ) -> RegistryResult<()> {
        if patient_name.trim().is_empty() {
            return self.abort_create(RegistryError::MissingField {
                field: "patient name",
            });
        }
        if patient_mobile.trim().is_empty() {
            return self.abort_create(RegistryError::MissingField {
                field: "patient mobile",
            });
        }
        if time_slot.trim().is_empty() {
            return self.abort_create(RegistryError::MissingField { field: "time slot" });
        }
        let Some(professional) = professional else {
            return self.abort_create(RegistryError::MissingField {
                field: "professional",
            });
        };

        match Appointment::new(patient_name, patient_mobile, time_slot, professional) {
            Ok(appointment) => {
                tracing::info!(
                    patient = appointment.patient_name(),
                    mobile = %appointment.patient_mobile(),
                    time = appointment.time_slot(),
                    "appointment created"
                );
                self.appointments.push(appointment);
                Ok(())
            }
            Err(err) => self.abort_create(err.into()),
        }
    }

    fn abort_create(&self, err: RegistryError) -> RegistryResult<()> {
        tracing::warn!("appointment not created: {err}");
        Err(err)
    }

    /// All stored appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Removes the first appointment booked under `mobile`.
    ///
    /// The input is normalized the same way construction normalizes mobile
    /// numbers (all whitespace stripped), then matched by linear scan in
    /// insertion order. Only the first match is removed even when
    /// duplicates exist. This removes the entry outright, distinct
    /// from [`Appointment::cancel`], which flips status in place.
    ///
    /// # Errors
    ///
    /// `RegistryError::MissingField` for blank input,
    /// `RegistryError::NotFound` when no appointment matches.
    pub fn cancel_by_mobile(&mut self, mobile: &str) -> RegistryResult<Appointment> {
        if mobile.trim().is_empty() {
            return Err(RegistryError::MissingField {
                field: "patient mobile",
            });
        }

        let normalized: String = mobile.chars().filter(|c| !c.is_whitespace()).collect();

        let position = self
            .appointments
            .iter()
            .position(|appointment| appointment.patient_mobile().as_str() == normalized);

        match position {
            Some(index) => {
                let removed = self.appointments.remove(index);
                tracing::info!(mobile = %normalized, "appointment cancelled");
                Ok(removed)
            }
            None => {
                tracing::warn!(mobile = %normalized, "no appointment to cancel");
                Err(RegistryError::NotFound { mobile: normalized })
            }
        }
    }
}
