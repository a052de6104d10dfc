//! Person domain model.
//!
//! # Responsibility
//! - Define the patient/doctor record shared by registry, commands and
//!   storage.
//! - Keep appointment history structured internally and project it to the
//!   textual log only at the boundary.
//! - Provide the relaxed same-person identity used for duplicate prevention.
//!
//! # Invariants
//! - The enum variant is the single source of a person's role; the record
//!   stores only the numeric id value.
//! - `is_same_person` is weaker than `==`: full equality compares every
//!   field, same-person compares identity fields only.
//! - Appointment history is append-only.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::appointment::Appointment;
use crate::model::id::{PersonId, Role};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9][A-Za-z0-9.-]*$").expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Field-level contract violation raised by `Person::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Id values start at 1; zero marks an unassigned or corrupted id.
    ZeroId,
    /// Names are alphanumeric words separated by single spaces.
    InvalidName(String),
    /// Phones are digits only, at least 3 of them.
    InvalidPhone(String),
    /// Emails must have a `local@domain` shape.
    InvalidEmail(String),
    /// Addresses can take any value but must not be blank.
    EmptyAddress,
    /// Tags are single alphanumeric words.
    InvalidTag(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "person id value must be at least 1"),
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain digits, and should be at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(f, "invalid email `{value}`"),
            Self::EmptyAddress => write!(f, "addresses can take any value, but should not be blank"),
            Self::InvalidTag(value) => {
                write!(f, "invalid tag `{value}`: tag names should be alphanumeric")
            }
        }
    }
}

impl Error for PersonValidationError {}

/// Shared field set behind both person variants.
///
/// The role is deliberately absent here; `Person` carries it as the enum
/// discriminant and stamps it back onto `PersonId` on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Numeric id value, unique within the person's role.
    pub id_value: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Optional alphanumeric labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Structured appointment history, oldest first.
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl PersonRecord {
    /// Creates a record with empty tags and history.
    pub fn new(
        id_value: u32,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id_value,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags: Vec::new(),
            appointments: Vec::new(),
        }
    }
}

/// Canonical person entity, discriminated by role.
///
/// Serialized with an internal `role` tag so storage snapshots read as one
/// flat object per person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Person {
    Patient(PersonRecord),
    Doctor(PersonRecord),
}

impl Person {
    /// Wraps a record as a patient.
    pub fn patient(record: PersonRecord) -> Self {
        Self::Patient(record)
    }

    /// Wraps a record as a doctor.
    pub fn doctor(record: PersonRecord) -> Self {
        Self::Doctor(record)
    }

    /// Role implied by the variant.
    pub fn role(&self) -> Role {
        match self {
            Self::Patient(_) => Role::Patient,
            Self::Doctor(_) => Role::Doctor,
        }
    }

    /// Role-tagged id assembled from the variant and the stored value.
    pub fn id(&self) -> PersonId {
        PersonId::new(self.record().id_value, self.role())
    }

    /// Shared field set, read-only.
    pub fn record(&self) -> &PersonRecord {
        match self {
            Self::Patient(record) | Self::Doctor(record) => record,
        }
    }

    pub(crate) fn record_mut(&mut self) -> &mut PersonRecord {
        match self {
            Self::Patient(record) | Self::Doctor(record) => record,
        }
    }

    pub fn name(&self) -> &str {
        &self.record().name
    }

    pub fn phone(&self) -> &str {
        &self.record().phone
    }

    pub fn email(&self) -> &str {
        &self.record().email
    }

    pub fn address(&self) -> &str {
        &self.record().address
    }

    pub fn tags(&self) -> &[String] {
        &self.record().tags
    }

    /// Structured appointment history, oldest first.
    pub fn appointments(&self) -> &[Appointment] {
        &self.record().appointments
    }

    /// Appends one appointment to this person's history.
    ///
    /// History is append-only; callers check for duplicates beforehand.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.record_mut().appointments.push(appointment);
    }

    /// Returns whether an equal appointment is already recorded.
    pub fn has_appointment(&self, appointment: &Appointment) -> bool {
        self.record().appointments.contains(appointment)
    }

    /// History projected to display lines, one per appointment.
    pub fn appointment_log(&self) -> Vec<String> {
        self.record()
            .appointments
            .iter()
            .map(|appointment| appointment.to_string())
            .collect()
    }

    /// Full-history report shown to the person on request.
    pub fn appointment_report(&self) -> String {
        let mut report = String::from("All appointments for you in the database:\n");
        for appointment in &self.record().appointments {
            report.push_str(&appointment.to_string());
            report.push('\n');
        }
        report
    }

    /// Relaxed identity equality used for duplicate prevention.
    ///
    /// Two persons are the same logical person when their ids match, or when
    /// both name and phone match. Weaker than `==`, which compares every
    /// field including history.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.id() == other.id()
            || (self.name() == other.name() && self.phone() == other.phone())
    }

    /// Checks field-level contracts.
    ///
    /// Storage load and registry writes both call this, so invalid persisted
    /// state is rejected instead of masked.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        let record = self.record();
        if record.id_value == 0 {
            return Err(PersonValidationError::ZeroId);
        }
        if !NAME_RE.is_match(&record.name) {
            return Err(PersonValidationError::InvalidName(record.name.clone()));
        }
        if !PHONE_RE.is_match(&record.phone) {
            return Err(PersonValidationError::InvalidPhone(record.phone.clone()));
        }
        if !EMAIL_RE.is_match(&record.email) {
            return Err(PersonValidationError::InvalidEmail(record.email.clone()));
        }
        if record.address.trim().is_empty() {
            return Err(PersonValidationError::EmptyAddress);
        }
        for tag in &record.tags {
            if !TAG_RE.is_match(tag) {
                return Err(PersonValidationError::InvalidTag(tag.clone()));
            }
        }
        Ok(())
    }
}

impl Display for Person {
    /// One-line summary used in command feedback.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let record = self.record();
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            record.name, record.phone, record.email, record.address
        )?;
        if !record.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &record.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}
