//! Person CRUD commands.
//!
//! # Responsibility
//! - Provide add/delete/edit/find/list/clear operations over the registry.
//! - Keep feedback strings stable; callers display them verbatim.
//!
//! # Invariants
//! - Edits preserve the member's id and appointment history.
//! - Duplicate prevention is delegated to the registry on every write.

use crate::model::id::{PersonId, Role};
use crate::model::person::Person;
use crate::repo::person_repo::{PersonListQuery, PersonRepository};
use crate::service::{CommandError, CommandOutput, CommandResult};

pub const MESSAGE_CLEAR_SUCCESS: &str = "Address book has been cleared!";
pub const MESSAGE_LIST_SUCCESS: &str = "Listed all persons";

/// Adds a new person to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    /// # Errors
    /// - `Validation` when a field breaks its contract.
    /// - `DuplicatePerson` when a same-person-equal member exists.
    pub fn execute(&self, registry: &mut impl PersonRepository) -> CommandOutput {
        registry.add_person(self.person.clone())?;
        Ok(CommandResult::new(format!(
            "New person added: {}",
            self.person
        )))
    }
}

/// Removes a person by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePersonCommand {
    id: PersonId,
}

impl DeletePersonCommand {
    pub fn new(id: PersonId) -> Self {
        Self { id }
    }

    /// Removes the addressed member.
    ///
    /// Appointment values already recorded on the other party of any past
    /// appointment stay in that party's history; no cascade is performed.
    pub fn execute(&self, registry: &mut impl PersonRepository) -> CommandOutput {
        let removed = registry.delete_person(self.id)?;
        Ok(CommandResult::new(format!("Deleted Person: {removed}")))
    }
}

/// Partial field update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Edits contact fields of an existing person in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    id: PersonId,
    edits: EditPersonRequest,
}

impl EditPersonCommand {
    pub fn new(id: PersonId, edits: EditPersonRequest) -> Self {
        Self { id, edits }
    }

    /// # Errors
    /// - `PersonNotFound` when the id resolves to no member.
    /// - `Validation` / `DuplicatePerson` when the edited person breaks a
    ///   contract or collides with another member.
    pub fn execute(&self, registry: &mut impl PersonRepository) -> CommandOutput {
        let current = match self.id.role {
            Role::Patient => registry.patient_by_id(self.id),
            Role::Doctor => registry.doctor_by_id(self.id),
        }
        .ok_or(CommandError::PersonNotFound(self.id))?;

        // Id and appointment history carry over untouched.
        let mut record = current.record().clone();
        if let Some(name) = &self.edits.name {
            record.name = name.clone();
        }
        if let Some(phone) = &self.edits.phone {
            record.phone = phone.clone();
        }
        if let Some(email) = &self.edits.email {
            record.email = email.clone();
        }
        if let Some(address) = &self.edits.address {
            record.address = address.clone();
        }
        if let Some(tags) = &self.edits.tags {
            record.tags = tags.clone();
        }

        let edited = match self.id.role {
            Role::Patient => Person::patient(record),
            Role::Doctor => Person::doctor(record),
        };
        registry.set_person(self.id, edited.clone())?;
        Ok(CommandResult::new(format!("Edited Person: {edited}")))
    }
}

/// Finds persons whose name contains any of the given keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersonCommand {
    keywords: Vec<String>,
}

impl FindPersonCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Whole-word, case-insensitive name match.
    ///
    /// Feedback holds the match count followed by one line per matching
    /// member, in registry order.
    pub fn execute(&self, registry: &impl PersonRepository) -> CommandOutput {
        let matches = registry.list_persons(&PersonListQuery {
            role: None,
            name_keywords: self.keywords.clone(),
        });
        let mut feedback = format!("{} persons listed!", matches.len());
        for person in &matches {
            feedback.push('\n');
            feedback.push_str(&person.to_string());
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Lists every person in the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPersonsCommand;

impl ListPersonsCommand {
    pub fn new() -> Self {
        Self
    }

    /// Feedback holds the header line followed by one line per member, in
    /// registry order.
    pub fn execute(&self, registry: &impl PersonRepository) -> CommandOutput {
        let mut feedback = String::from(MESSAGE_LIST_SUCCESS);
        for person in registry.list_persons(&PersonListQuery::default()) {
            feedback.push('\n');
            feedback.push_str(&person.to_string());
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Empties the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, registry: &mut impl PersonRepository) -> CommandOutput {
        registry.clear();
        Ok(CommandResult::new(MESSAGE_CLEAR_SUCCESS))
    }
}
