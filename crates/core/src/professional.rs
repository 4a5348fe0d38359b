//! Health professionals and their role-specific behaviour.
//!
//! `Professional` carries the identity fields shared by every care provider;
//! the closed [`Role`] union holds the variant payloads. All behaviour that
//! differs per variant (`professional_type`, the rendered detail block) is
//! dispatched by pattern match, so the set of variants is fixed here rather
//! than open to extension.

use crate::error::{ValidationError, ValidationResult};
use clinic_types::NonEmptyText;

/// Department assigned when none is supplied.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Separator line ending a rendered detail block.
const DETAILS_FOOTER: &str = "------------------------";

/// General practitioner payload: prescribing rights and a daily patient cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralPractitioner {
    can_prescribe: bool,
    max_patients_per_day: i32,
}

impl GeneralPractitioner {
    /// Daily patient cap used when the supplied value is not positive.
    pub const DEFAULT_MAX_PATIENTS: i32 = 20;

    /// Creates a GP payload.
    ///
    /// A non-positive `max_patients_per_day` is silently replaced by
    /// [`GeneralPractitioner::DEFAULT_MAX_PATIENTS`] rather than rejected;
    /// variant fields clamp, only the shared identity fields validate.
    pub fn new(can_prescribe: bool, max_patients_per_day: i32) -> Self {
        let max_patients_per_day = if max_patients_per_day > 0 {
            max_patients_per_day
        } else {
            Self::DEFAULT_MAX_PATIENTS
        };
        Self {
            can_prescribe,
            max_patients_per_day,
        }
    }

    pub fn can_prescribe(&self) -> bool {
        self.can_prescribe
    }

    pub fn max_patients_per_day(&self) -> i32 {
        self.max_patients_per_day
    }

    /// Whether another patient fits under the daily cap.
    pub fn can_accept_new_patient(&self, current_appointments: i32) -> bool {
        current_appointments < self.max_patients_per_day
    }

    /// Fixed sentence describing prescribing rights.
    pub fn prescription_authority(&self) -> &'static str {
        if self.can_prescribe {
            "This doctor has prescription authority"
        } else {
            "This doctor cannot prescribe medication"
        }
    }

    /// Silent-ignore mutator: non-positive caps leave the prior value.
    pub fn set_max_patients_per_day(&mut self, max_patients_per_day: i32) -> bool {
        if max_patients_per_day > 0 {
            self.max_patients_per_day = max_patients_per_day;
            true
        } else {
            false
        }
    }

    pub fn set_can_prescribe(&mut self, can_prescribe: bool) {
        self.can_prescribe = can_prescribe;
    }
}

impl Default for GeneralPractitioner {
    fn default() -> Self {
        Self {
            can_prescribe: true,
            max_patients_per_day: Self::DEFAULT_MAX_PATIENTS,
        }
    }
}

/// Expertise tier derived from a specialist's years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpertiseLevel {
    Junior,
    Qualified,
    Senior,
    Expert,
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExpertiseLevel::Junior => "Junior",
            ExpertiseLevel::Qualified => "Qualified",
            ExpertiseLevel::Senior => "Senior",
            ExpertiseLevel::Expert => "Expert Level",
        };
        write!(f, "{label}")
    }
}

/// Specialist payload: named specialty and years of specialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialist {
    specialty: String,
    years_of_specialization: i32,
}

impl Specialist {
    /// Specialty recorded when none is supplied.
    pub const DEFAULT_SPECIALTY: &'static str = "Not Specified";

    /// Creates a specialist payload.
    ///
    /// An absent or empty specialty becomes
    /// [`Specialist::DEFAULT_SPECIALTY`]; negative years are clamped to 0.
    pub fn new(specialty: Option<&str>, years_of_specialization: i32) -> Self {
        let specialty = match specialty.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_owned(),
            _ => Self::DEFAULT_SPECIALTY.to_owned(),
        };
        Self {
            specialty,
            years_of_specialization: years_of_specialization.max(0),
        }
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn years_of_specialization(&self) -> i32 {
        self.years_of_specialization
    }

    /// Derives the expertise tier from years of experience.
    ///
    /// Tiers are evaluated top-down with inclusive lower bounds: >= 15 is
    /// Expert Level, >= 8 Senior, >= 3 Qualified, anything less Junior.
    pub fn expertise_level(&self) -> ExpertiseLevel {
        match self.years_of_specialization {
            y if y >= 15 => ExpertiseLevel::Expert,
            y if y >= 8 => ExpertiseLevel::Senior,
            y if y >= 3 => ExpertiseLevel::Qualified,
            _ => ExpertiseLevel::Junior,
        }
    }

    /// Whether a referral for `condition` falls within this specialty.
    ///
    /// Matches case-insensitively on substring containment, so a
    /// "Heart Surgery" specialist accepts "urgent heart surgery consult".
    pub fn accepts_referral(&self, condition: &str) -> bool {
        condition
            .to_lowercase()
            .contains(&self.specialty.to_lowercase())
    }

    /// Silent-ignore mutator: empty input leaves the prior specialty.
    pub fn set_specialty(&mut self, specialty: &str) -> bool {
        let trimmed = specialty.trim();
        if trimmed.is_empty() {
            false
        } else {
            self.specialty = trimmed.to_owned();
            true
        }
    }

    /// Silent-ignore mutator: negative years leave the prior value.
    pub fn set_years_of_specialization(&mut self, years: i32) -> bool {
        if years >= 0 {
            self.years_of_specialization = years;
            true
        } else {
            false
        }
    }
}

impl Default for Specialist {
    fn default() -> Self {
        Self {
            specialty: Self::DEFAULT_SPECIALTY.to_owned(),
            years_of_specialization: 0,
        }
    }
}

/// Closed set of professional variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Base capability with no variant payload.
    Generic,
    GeneralPractitioner(GeneralPractitioner),
    Specialist(Specialist),
}

/// A care provider: shared identity fields plus a [`Role`] payload.
///
/// Identity is the `id` field alone; see the `PartialEq` impl.
#[derive(Debug, Clone)]
pub struct Professional {
    id: i32,
    name: NonEmptyText,
    department: String,
    role: Role,
}

impl Professional {
    /// Creates a professional with the given role payload.
    ///
    /// The shared fields validate strictly: a negative `id` or an empty
    /// `name` is rejected. `department` normalizes absent-or-empty to
    /// [`DEFAULT_DEPARTMENT`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeId` or `ValidationError::EmptyName`.
    pub fn new(
        id: i32,
        name: &str,
        department: Option<&str>,
        role: Role,
    ) -> ValidationResult<Self> {
        if id < 0 {
            return Err(ValidationError::NegativeId { value: id });
        }
        let name = NonEmptyText::new(name)?;
        Ok(Self {
            id,
            name,
            department: normalize_department(department),
            role,
        })
    }

    /// Creates a professional with the base capability and no payload.
    pub fn generic(id: i32, name: &str, department: Option<&str>) -> ValidationResult<Self> {
        Self::new(id, name, department, Role::Generic)
    }

    /// Creates a general practitioner.
    pub fn general_practitioner(
        id: i32,
        name: &str,
        department: Option<&str>,
        can_prescribe: bool,
        max_patients_per_day: i32,
    ) -> ValidationResult<Self> {
        Self::new(
            id,
            name,
            department,
            Role::GeneralPractitioner(GeneralPractitioner::new(
                can_prescribe,
                max_patients_per_day,
            )),
        )
    }

    /// Creates a specialist.
    pub fn specialist(
        id: i32,
        name: &str,
        department: Option<&str>,
        specialty: Option<&str>,
        years_of_specialization: i32,
    ) -> ValidationResult<Self> {
        Self::new(
            id,
            name,
            department,
            Role::Specialist(Specialist::new(specialty, years_of_specialization)),
        )
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn as_general_practitioner(&self) -> Option<&GeneralPractitioner> {
        match &self.role {
            Role::GeneralPractitioner(gp) => Some(gp),
            _ => None,
        }
    }

    pub fn as_specialist(&self) -> Option<&Specialist> {
        match &self.role {
            Role::Specialist(specialist) => Some(specialist),
            _ => None,
        }
    }

    /// Fixed tag string for the variant.
    pub fn professional_type(&self) -> &'static str {
        match self.role {
            Role::Generic => "Generic Health Professional",
            Role::GeneralPractitioner(_) => "General Practitioner",
            Role::Specialist(_) => "Specialist",
        }
    }

    /// Renders the multi-line detail block for console display.
    ///
    /// Shared fields come first, variant fields after, and the block always
    /// ends with a separator line.
    pub fn details(&self) -> String {
        let mut lines = vec![
            "The health professional details are:".to_owned(),
            format!("Type: {}", self.professional_type()),
            format!("ID: {}", self.id),
            format!("Name: {}", self.name),
            format!("Department: {}", self.department),
        ];

        match &self.role {
            Role::Generic => {}
            Role::GeneralPractitioner(gp) => {
                lines.push(format!("Can Prescribe Medication: {}", gp.can_prescribe()));
                lines.push(format!(
                    "Max Patients Per Day: {}",
                    gp.max_patients_per_day()
                ));
            }
            Role::Specialist(specialist) => {
                lines.push(format!("Specialty: {}", specialist.specialty()));
                lines.push(format!(
                    "Years of Specialization: {} years",
                    specialist.years_of_specialization()
                ));
                lines.push(format!("Expertise Level: {}", specialist.expertise_level()));
            }
        }

        lines.push(DETAILS_FOOTER.to_owned());
        lines.join("\n")
    }

    /// Silent-ignore mutator: a negative id leaves the prior value.
    pub fn set_id(&mut self, id: i32) -> bool {
        if id < 0 {
            return false;
        }
        self.id = id;
        true
    }

    /// Silent-ignore mutator: an empty name leaves the prior value.
    pub fn set_name(&mut self, name: &str) -> bool {
        match NonEmptyText::new(name) {
            Ok(name) => {
                self.name = name;
                true
            }
            Err(_) => false,
        }
    }

    /// Absent-or-empty input normalizes to [`DEFAULT_DEPARTMENT`]; this
    /// mutation always takes effect.
    pub fn set_department(&mut self, department: Option<&str>) {
        self.department = normalize_department(department);
    }
}

impl Default for Professional {
    /// The unidentified placeholder: id 0, name "Unknown", department
    /// "General", base capability.
    fn default() -> Self {
        Self {
            id: 0,
            name: NonEmptyText::new("Unknown").expect("placeholder name is non-empty"),
            department: DEFAULT_DEPARTMENT.to_owned(),
            role: Role::Generic,
        }
    }
}

/// Identity is the `id` alone: two professionals with the same id compare
/// equal even when their names or departments differ.
impl PartialEq for Professional {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Professional {}

impl std::hash::Hash for Professional {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Professional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (id {}, {})",
            self.professional_type(),
            self.name,
            self.id,
            self.department
        )
    }
}

fn normalize_department(department: Option<&str>) -> String {
    match department.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_owned(),
        _ => DEFAULT_DEPARTMENT.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_negative_id() {
        let err = Professional::generic(-1, "Dr. Smith", None).expect_err("should reject");
        assert!(matches!(err, ValidationError::NegativeId { value: -1 }));
    }

    #[test]
    fn test_construction_rejects_empty_name() {
        let err = Professional::generic(1, "   ", None).expect_err("should reject");
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_department_defaults_when_absent_or_empty() {
        let absent = Professional::generic(1, "Dr. Smith", None).expect("should accept");
        assert_eq!(absent.department(), "General");

        let empty = Professional::generic(1, "Dr. Smith", Some("  ")).expect("should accept");
        assert_eq!(empty.department(), "General");

        let given =
            Professional::generic(1, "Dr. Smith", Some(" Cardiology ")).expect("should accept");
        assert_eq!(given.department(), "Cardiology");
    }

    #[test]
    fn test_professional_type_tags() {
        let generic = Professional::generic(1, "A B", None).unwrap();
        let gp = Professional::general_practitioner(2, "C D", None, true, 20).unwrap();
        let specialist = Professional::specialist(3, "E F", None, Some("Cardiology"), 5).unwrap();

        assert_eq!(generic.professional_type(), "Generic Health Professional");
        assert_eq!(gp.professional_type(), "General Practitioner");
        assert_eq!(specialist.professional_type(), "Specialist");
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = Professional::generic(7, "Dr. Smith", Some("General Medicine")).unwrap();
        let b = Professional::generic(7, "Dr. Jones", Some("Radiology")).unwrap();
        let c = Professional::generic(8, "Dr. Smith", Some("General Medicine")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_gp_non_positive_cap_falls_back_to_default() {
        let gp = GeneralPractitioner::new(true, -5);
        assert_eq!(gp.max_patients_per_day(), 20);

        let gp = GeneralPractitioner::new(true, 0);
        assert_eq!(gp.max_patients_per_day(), 20);

        let gp = GeneralPractitioner::new(true, 25);
        assert_eq!(gp.max_patients_per_day(), 25);
    }

    #[test]
    fn test_gp_patient_capacity() {
        let gp = GeneralPractitioner::new(true, 20);
        assert!(gp.can_accept_new_patient(19));
        assert!(!gp.can_accept_new_patient(20));
        assert!(!gp.can_accept_new_patient(21));
    }

    #[test]
    fn test_gp_prescription_authority_sentences() {
        assert_eq!(
            GeneralPractitioner::new(true, 20).prescription_authority(),
            "This doctor has prescription authority"
        );
        assert_eq!(
            GeneralPractitioner::new(false, 20).prescription_authority(),
            "This doctor cannot prescribe medication"
        );
    }

    #[test]
    fn test_specialist_defaults_and_clamping() {
        let blank = Specialist::new(None, -3);
        assert_eq!(blank.specialty(), "Not Specified");
        assert_eq!(blank.years_of_specialization(), 0);

        let empty = Specialist::new(Some("  "), 4);
        assert_eq!(empty.specialty(), "Not Specified");
    }

    #[test]
    fn test_expertise_level_boundaries() {
        let level_at = |years| Specialist::new(Some("Cardiology"), years).expertise_level();

        assert_eq!(level_at(2), ExpertiseLevel::Junior);
        assert_eq!(level_at(3), ExpertiseLevel::Qualified);
        assert_eq!(level_at(8), ExpertiseLevel::Senior);
        assert_eq!(level_at(14), ExpertiseLevel::Senior);
        assert_eq!(level_at(15), ExpertiseLevel::Expert);
        assert_eq!(level_at(15).to_string(), "Expert Level");
    }

    #[test]
    fn test_referral_matching_is_case_insensitive_containment() {
        let specialist = Specialist::new(Some("Heart Surgery"), 12);
        assert!(specialist.accepts_referral("urgent HEART surgery consult"));
        assert!(specialist.accepts_referral("Heart Surgery"));
        assert!(!specialist.accepts_referral("knee reconstruction"));
        assert!(!specialist.accepts_referral(""));
    }

    #[test]
    fn test_mutators_silently_ignore_invalid_input() {
        let mut professional = Professional::generic(1, "Dr. Smith", None).unwrap();

        assert!(!professional.set_id(-2));
        assert_eq!(professional.id(), 1);
        assert!(professional.set_id(9));
        assert_eq!(professional.id(), 9);

        assert!(!professional.set_name("  "));
        assert_eq!(professional.name(), "Dr. Smith");
        assert!(professional.set_name(" Dr. Jones "));
        assert_eq!(professional.name(), "Dr. Jones");

        professional.set_department(Some(""));
        assert_eq!(professional.department(), "General");
    }

    #[test]
    fn test_variant_mutators_share_the_silent_ignore_contract() {
        let mut gp = GeneralPractitioner::new(true, 20);
        assert!(!gp.set_max_patients_per_day(0));
        assert_eq!(gp.max_patients_per_day(), 20);
        assert!(gp.set_max_patients_per_day(30));
        assert_eq!(gp.max_patients_per_day(), 30);

        let mut specialist = Specialist::new(Some("Cardiology"), 5);
        assert!(!specialist.set_specialty(" "));
        assert_eq!(specialist.specialty(), "Cardiology");
        assert!(!specialist.set_years_of_specialization(-1));
        assert_eq!(specialist.years_of_specialization(), 5);
    }

    #[test]
    fn test_default_is_the_unidentified_placeholder() {
        let placeholder = Professional::default();
        assert_eq!(placeholder.id(), 0);
        assert_eq!(placeholder.name(), "Unknown");
        assert_eq!(placeholder.department(), "General");
        assert_eq!(
            placeholder.professional_type(),
            "Generic Health Professional"
        );
    }

    #[test]
    fn test_display_is_a_one_line_summary() {
        let gp = Professional::general_practitioner(101, "Dr. Smith", Some("General Medicine"), true, 25)
            .unwrap();
        assert_eq!(
            gp.to_string(),
            "General Practitioner Dr. Smith (id 101, General Medicine)"
        );
    }

    #[test]
    fn test_details_block_ends_with_separator() {
        let specialist = Professional::specialist(
            201,
            "Dr. Wilson",
            Some("Cardiology"),
            Some("Heart Surgery"),
            12,
        )
        .unwrap();
        let block = specialist.details();

        assert!(block.starts_with("The health professional details are:"));
        assert!(block.contains("Type: Specialist"));
        assert!(block.contains("ID: 201"));
        assert!(block.contains("Specialty: Heart Surgery"));
        assert!(block.contains("Years of Specialization: 12 years"));
        assert!(block.contains("Expertise Level: Senior"));
        assert!(block.ends_with("------------------------"));
    }
}
