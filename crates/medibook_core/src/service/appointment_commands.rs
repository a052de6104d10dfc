//! Appointment commands.
//!
//! # Responsibility
//! - Link one patient and one doctor by appending a shared appointment value
//!   to both histories.
//! - Surface a person's full appointment history on request.
//!
//! # Invariants
//! - Role tags are checked at construction time, before any registry access.
//! - Validation (resolution, duplicate check) completes before either
//!   history is touched; failure paths mutate nothing.

use crate::model::appointment::Appointment;
use crate::model::id::{PersonId, Role};
use crate::repo::person_repo::PersonRepository;
use crate::service::{CommandError, CommandOutput, CommandResult};

pub const MESSAGE_ADD_APPOINTMENT_SUCCESS: &str = "New appointment added.";

/// Single-shot command linking a patient and a doctor with a remark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentCommand {
    time_epoch_ms: i64,
    patient_id: PersonId,
    doctor_id: PersonId,
    remark: String,
}

impl AddAppointmentCommand {
    /// Builds the command, rejecting role-mismatched ids immediately.
    ///
    /// # Errors
    /// - `WrongRole` when `patient_id` is not patient-tagged or `doctor_id`
    ///   is not doctor-tagged. Raised before any registry access.
    pub fn new(
        time_epoch_ms: i64,
        patient_id: PersonId,
        doctor_id: PersonId,
        remark: impl Into<String>,
    ) -> Result<Self, CommandError> {
        if patient_id.role != Role::Patient {
            return Err(CommandError::WrongRole {
                expected: Role::Patient,
                actual: patient_id,
            });
        }
        if doctor_id.role != Role::Doctor {
            return Err(CommandError::WrongRole {
                expected: Role::Doctor,
                actual: doctor_id,
            });
        }
        Ok(Self {
            time_epoch_ms,
            patient_id,
            doctor_id,
            remark: remark.into(),
        })
    }

    /// Scheduled time in epoch milliseconds.
    ///
    /// Carried with the command for callers that display it; the stored
    /// appointment value itself is the (patient, doctor, remark) triple.
    pub fn time_epoch_ms(&self) -> i64 {
        self.time_epoch_ms
    }

    /// Resolves both parties, checks for a duplicate, then records the
    /// appointment in both histories.
    ///
    /// # Errors
    /// - `PersonNotFound` when either id resolves to no member.
    /// - `DuplicateAppointment` when an equal triple is already recorded on
    ///   either side.
    pub fn execute(&self, registry: &mut impl PersonRepository) -> CommandOutput {
        let patient = registry
            .patient_by_id(self.patient_id)
            .ok_or(CommandError::PersonNotFound(self.patient_id))?;
        let doctor = registry
            .doctor_by_id(self.doctor_id)
            .ok_or(CommandError::PersonNotFound(self.doctor_id))?;

        let appointment = Appointment::new(self.patient_id, self.doctor_id, self.remark.clone());
        if patient.has_appointment(&appointment) || doctor.has_appointment(&appointment) {
            return Err(CommandError::DuplicateAppointment);
        }

        registry.record_appointment(&appointment)?;
        Ok(CommandResult::new(MESSAGE_ADD_APPOINTMENT_SUCCESS))
    }
}

/// Read-only command projecting one person's appointment history to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAppointmentsCommand {
    person_id: PersonId,
}

impl ListAppointmentsCommand {
    pub fn new(person_id: PersonId) -> Self {
        Self { person_id }
    }

    /// Returns the full-history report for the addressed person.
    pub fn execute(&self, registry: &impl PersonRepository) -> CommandOutput {
        let person = match self.person_id.role {
            Role::Patient => registry.patient_by_id(self.person_id),
            Role::Doctor => registry.doctor_by_id(self.person_id),
        }
        .ok_or(CommandError::PersonNotFound(self.person_id))?;
        Ok(CommandResult::new(person.appointment_report()))
    }
}
