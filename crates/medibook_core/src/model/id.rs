//! Role-tagged person identifiers.
//!
//! # Responsibility
//! - Define the typed id shared by lookups, appointments and storage.
//! - Own the `Id{id=<value>, role=<Role>}` display shape consumed by
//!   appointment history text.
//!
//! # Invariants
//! - An id is immutable once constructed.
//! - Two ids with the same numeric value but different roles are distinct.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Role discriminator separating the two person kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patient => write!(f, "Patient"),
            Self::Doctor => write!(f, "Doctor"),
        }
    }
}

/// Stable identifier for a person record.
///
/// Equality and hashing cover both fields, so a patient id never collides
/// with a doctor id that happens to share the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId {
    /// Positive numeric value assigned at registration time.
    pub value: u32,
    /// Role the id belongs to.
    pub role: Role,
}

impl PersonId {
    /// Creates a role-tagged id.
    ///
    /// Zero is representable here so deserialized data can be validated in
    /// one place; `Person::validate` rejects it.
    pub fn new(value: u32, role: Role) -> Self {
        Self { value, role }
    }

    /// Shorthand for a patient id.
    pub fn patient(value: u32) -> Self {
        Self::new(value, Role::Patient)
    }

    /// Shorthand for a doctor id.
    pub fn doctor(value: u32) -> Self {
        Self::new(value, Role::Doctor)
    }
}

impl Display for PersonId {
    /// Wire representation embedded in appointment history lines.
    ///
    /// The shape is load-bearing: consumers inspect history text, so it must
    /// stay `Id{id=<value>, role=<Role>}` exactly.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id{{id={}, role={}}}", self.value, self.role)
    }
}
