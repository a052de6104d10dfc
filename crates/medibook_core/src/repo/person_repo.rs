//! Person registry contract and in-memory address book.
//!
//! # Responsibility
//! - Provide stable lookup/membership APIs over the canonical person list.
//! - Enforce the same-person duplicate invariant on every write path.
//! - Own the paired appointment write so both histories change together.
//!
//! # Invariants
//! - Membership mutations either fully apply or leave the list untouched.
//! - `record_appointment` resolves both parties before touching either
//!   history; no failure point exists between the two appends.

use crate::model::appointment::Appointment;
use crate::model::id::{PersonId, Role};
use crate::model::person::{Person, PersonValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry error for membership and appointment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(PersonValidationError),
    /// A same-person-equal member already exists.
    DuplicatePerson,
    /// The identical appointment triple is already recorded on either party.
    DuplicateAppointment,
    /// No member carries the given id (role included in the match).
    NotFound(PersonId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicatePerson => {
                write!(f, "this person already exists in the address book")
            }
            Self::DuplicateAppointment => {
                write!(f, "this appointment is already recorded for both parties")
            }
            Self::NotFound(id) => write!(f, "person not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicatePerson | Self::DuplicateAppointment | Self::NotFound(_) => None,
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonListQuery {
    /// Restrict to one role.
    pub role: Option<Role>,
    /// Case-insensitive whole-word name keywords. Empty means no filter;
    /// multiple keywords match any of them.
    pub name_keywords: Vec<String>,
}

impl PersonListQuery {
    fn matches(&self, person: &Person) -> bool {
        if let Some(role) = self.role {
            if person.role() != role {
                return false;
            }
        }
        if self.name_keywords.is_empty() {
            return true;
        }
        person.name().split_whitespace().any(|word| {
            self.name_keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}

/// Registry interface commands are written and tested against.
pub trait PersonRepository {
    /// Ordered snapshot of members matching the query.
    fn list_persons(&self, query: &PersonListQuery) -> Vec<Person>;
    /// Role-filtered lookup: returns a member only if it is a patient with
    /// the given id.
    fn patient_by_id(&self, id: PersonId) -> Option<&Person>;
    /// Role-filtered lookup: returns a member only if it is a doctor with
    /// the given id.
    fn doctor_by_id(&self, id: PersonId) -> Option<&Person>;
    /// Whether a same-person-equal member exists.
    fn has_person(&self, person: &Person) -> bool;
    /// Validates and appends a new member, rejecting duplicates.
    fn add_person(&mut self, person: Person) -> RepoResult<PersonId>;
    /// Removes and returns the member with the given id.
    fn delete_person(&mut self, id: PersonId) -> RepoResult<Person>;
    /// Replaces the member with the given id, keeping its position.
    fn set_person(&mut self, target: PersonId, edited: Person) -> RepoResult<()>;
    /// Appends the appointment to both linked persons' histories.
    ///
    /// Rejects the write when either party already holds an equal triple, so
    /// callers reaching the registry directly cannot record duplicates.
    fn record_appointment(&mut self, appointment: &Appointment) -> RepoResult<()>;
    /// Removes every member.
    fn clear(&mut self);
}

/// In-memory registry backing the single-process address book.
///
/// A plain ordered `Vec`; observation/notification is a presentation concern
/// and deliberately absent here.
#[derive(Debug, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an external snapshot (import/storage load).
    ///
    /// Every person is validated and the duplicate invariant is re-checked,
    /// so a corrupted snapshot cannot smuggle invalid state in.
    pub fn from_persons(persons: Vec<Person>) -> RepoResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    fn position_of(&self, id: PersonId) -> Option<usize> {
        self.persons.iter().position(|person| person.id() == id)
    }
}

impl PersonRepository for AddressBook {
    fn list_persons(&self, query: &PersonListQuery) -> Vec<Person> {
        self.persons
            .iter()
            .filter(|person| query.matches(person))
            .cloned()
            .collect()
    }

    fn patient_by_id(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| match person {
            Person::Patient(_) => person.id() == id,
            Person::Doctor(_) => false,
        })
    }

    fn doctor_by_id(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| match person {
            Person::Doctor(_) => person.id() == id,
            Person::Patient(_) => false,
        })
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|member| member.is_same_person(person))
    }

    fn add_person(&mut self, person: Person) -> RepoResult<PersonId> {
        person.validate()?;
        if self.has_person(&person) {
            return Err(RepoError::DuplicatePerson);
        }
        let id = person.id();
        self.persons.push(person);
        Ok(id)
    }

    fn delete_person(&mut self, id: PersonId) -> RepoResult<Person> {
        let index = self.position_of(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.persons.remove(index))
    }

    fn set_person(&mut self, target: PersonId, edited: Person) -> RepoResult<()> {
        edited.validate()?;
        let index = self.position_of(target).ok_or(RepoError::NotFound(target))?;
        let duplicate = self
            .persons
            .iter()
            .enumerate()
            .any(|(other, member)| other != index && member.is_same_person(&edited));
        if duplicate {
            return Err(RepoError::DuplicatePerson);
        }
        self.persons[index] = edited;
        Ok(())
    }

    fn record_appointment(&mut self, appointment: &Appointment) -> RepoResult<()> {
        let patient_index = self
            .persons
            .iter()
            .position(|person| match person {
                Person::Patient(_) => person.id() == appointment.patient_id,
                Person::Doctor(_) => false,
            })
            .ok_or(RepoError::NotFound(appointment.patient_id))?;
        let doctor_index = self
            .persons
            .iter()
            .position(|person| match person {
                Person::Doctor(_) => person.id() == appointment.doctor_id,
                Person::Patient(_) => false,
            })
            .ok_or(RepoError::NotFound(appointment.doctor_id))?;

        if self.persons[patient_index].has_appointment(appointment)
            || self.persons[doctor_index].has_appointment(appointment)
        {
            return Err(RepoError::DuplicateAppointment);
        }

        // Both parties are resolved and the triple is new at this point; the
        // two appends cannot be observed half-applied.
        self.persons[patient_index].add_appointment(appointment.clone());
        self.persons[doctor_index].add_appointment(appointment.clone());
        Ok(())
    }

    fn clear(&mut self) {
        self.persons.clear();
    }
}
