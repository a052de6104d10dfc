//! Appointment value object linking one patient and one doctor.
//!
//! # Responsibility
//! - Group the (patient id, doctor id, remark) triple under value equality.
//! - Own the formatted history line both linked persons record.
//!
//! # Invariants
//! - An appointment is immutable once constructed.
//! - Appointments are never stored standalone; they live only inside the two
//!   linked persons' histories.

use crate::model::id::PersonId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Immutable descriptor of one patient/doctor appointment.
///
/// Two appointments are equal when all three fields match; the duplicate
/// check in the add-appointment flow relies on exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appointment {
    /// Id of the patient side of the link.
    pub patient_id: PersonId,
    /// Id of the doctor side of the link.
    pub doctor_id: PersonId,
    /// Free-form remark attached by the doctor. May be empty.
    pub remark: String,
}

impl Appointment {
    /// Creates an appointment value for the given pair and remark.
    pub fn new(patient_id: PersonId, doctor_id: PersonId, remark: impl Into<String>) -> Self {
        Self {
            patient_id,
            doctor_id,
            remark: remark.into(),
        }
    }
}

impl Display for Appointment {
    /// History line format. The exact text is a compatibility contract with
    /// anything that inspects appointment history.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Appointment: {} (patient id) with {} (doctor id). Remarks: {}",
            self.patient_id, self.doctor_id, self.remark
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Appointment;
    use crate::model::id::PersonId;

    #[test]
    fn display_matches_history_line_contract() {
        let appointment = Appointment::new(PersonId::patient(1), PersonId::doctor(2), "");
        assert_eq!(
            appointment.to_string(),
            "Appointment: Id{id=1, role=Patient} (patient id) \
             with Id{id=2, role=Doctor} (doctor id). Remarks: "
        );
    }

    #[test]
    fn value_equality_covers_all_fields() {
        let a = Appointment::new(PersonId::patient(1), PersonId::doctor(2), "follow-up");
        let b = Appointment::new(PersonId::patient(1), PersonId::doctor(2), "follow-up");
        let c = Appointment::new(PersonId::patient(1), PersonId::doctor(2), "review");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
