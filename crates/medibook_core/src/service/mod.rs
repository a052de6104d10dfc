//! Command layer over the person registry.
//!
//! # Responsibility
//! - Define the command result/error surface callers see.
//! - Orchestrate registry calls into single-shot, succeed-or-report
//!   operations.
//!
//! # Invariants
//! - Commands never bypass registry validation/duplicate checks.
//! - A failed command leaves the registry observably unchanged.

use crate::model::id::{PersonId, Role};
use crate::model::person::PersonValidationError;
use crate::repo::person_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod appointment_commands;
pub mod person_commands;

pub type CommandOutput = Result<CommandResult, CommandError>;

/// Successful command outcome carrying user-facing feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// Recoverable command failure; the message is the sole observable trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Field-level contract violation on an input person.
    Validation(PersonValidationError),
    /// A command was constructed with an id carrying the wrong role tag.
    /// Raised before any registry access.
    WrongRole { expected: Role, actual: PersonId },
    /// Resolution failure: no member carries the given id.
    PersonNotFound(PersonId),
    /// A same-person-equal member already exists.
    DuplicatePerson,
    /// The identical (patient, doctor, remark) triple is already recorded.
    DuplicateAppointment,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::WrongRole { expected, actual } => {
                write!(f, "expected a {expected} id, got {actual}")
            }
            Self::PersonNotFound(id) => write!(f, "no person found with {id}"),
            Self::DuplicatePerson => {
                write!(f, "This person already exists in the address book")
            }
            Self::DuplicateAppointment => {
                write!(f, "This appointment already exists in the address book")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DuplicatePerson => Self::DuplicatePerson,
            RepoError::DuplicateAppointment => Self::DuplicateAppointment,
            RepoError::NotFound(id) => Self::PersonNotFound(id),
        }
    }
}
