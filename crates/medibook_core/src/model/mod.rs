//! Unified domain model for the clinic address book.
//!
//! # Responsibility
//! - Define the canonical person/appointment data structures used by core
//!   business logic.
//! - Keep identity concerns (role-tagged ids, same-person equality) in one
//!   place.
//!
//! # Invariants
//! - Every person is identified by a stable role-tagged `PersonId`.
//! - Appointments are immutable values; history only ever grows.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod appointment;
pub mod id;
pub mod person;
