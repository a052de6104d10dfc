//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the person registry contract commands are written against.
//! - Own the canonical mutable ordered person collection.
//!
//! # Invariants
//! - Registry writes enforce `Person::validate()` before membership changes.
//! - No two registry members are ever `is_same_person`-equal.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod person_repo;
