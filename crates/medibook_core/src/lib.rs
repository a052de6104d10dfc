//! Core domain logic for the medibook clinic address book.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::Appointment;
pub use model::id::{PersonId, Role};
pub use model::person::{Person, PersonRecord, PersonValidationError};
pub use repo::person_repo::{
    AddressBook, PersonListQuery, PersonRepository, RepoError, RepoResult,
};
pub use service::appointment_commands::{
    AddAppointmentCommand, ListAppointmentsCommand, MESSAGE_ADD_APPOINTMENT_SUCCESS,
};
pub use service::person_commands::{
    AddPersonCommand, ClearCommand, DeletePersonCommand, EditPersonCommand, EditPersonRequest,
    FindPersonCommand, ListPersonsCommand,
};
pub use service::{CommandError, CommandOutput, CommandResult};
pub use storage::{load_address_book, save_address_book, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
