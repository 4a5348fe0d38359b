//! # Clinic Core
//!
//! Domain logic for the clinic appointment register:
//! - Health professionals as a closed tagged union (generic, GP, specialist)
//! - Validated, atomic appointment construction with lenient mutation
//! - An ordered appointment registry with create/list/cancel-by-mobile
//!
//! **No presentation concerns**: rendering helpers return `String`s and the
//! console driver in `clinic-run` decides what to print.

pub mod appointment;
pub mod error;
pub mod professional;
pub mod registry;

pub use appointment::{Appointment, AppointmentRecord, AppointmentStatus, CancelOutcome};
pub use error::{RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use professional::{
    ExpertiseLevel, GeneralPractitioner, Professional, Role, Specialist, DEFAULT_DEPARTMENT,
};
pub use registry::Registry;
