//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `medibook_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use medibook_core::{
    default_log_level, init_logging, AddAppointmentCommand, AddPersonCommand, AddressBook,
    ListAppointmentsCommand, Person, PersonId, PersonRecord,
};

fn main() {
    let log_dir = std::env::temp_dir().join("medibook").join("logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    println!("medibook_core version={}", medibook_core::core_version());

    let mut book = AddressBook::new();
    let patient = Person::patient(PersonRecord::new(
        1,
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
    ));
    let doctor = Person::doctor(PersonRecord::new(
        2,
        "Benson Meier",
        "98765432",
        "benson@example.com",
        "311, Clementi Ave 2, #02-25",
    ));

    for person in [patient, doctor] {
        match AddPersonCommand::new(person).execute(&mut book) {
            Ok(result) => println!("{}", result.feedback),
            Err(err) => eprintln!("{err}"),
        }
    }

    let command = match AddAppointmentCommand::new(
        1_735_646_400_000, // 2024-12-31T12:00 UTC
        PersonId::patient(1),
        PersonId::doctor(2),
        "annual check-up",
    ) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    match command.execute(&mut book) {
        Ok(result) => println!("{}", result.feedback),
        Err(err) => eprintln!("{err}"),
    }

    match ListAppointmentsCommand::new(PersonId::doctor(2)).execute(&book) {
        Ok(result) => print!("{}", result.feedback),
        Err(err) => eprintln!("{err}"),
    }
}
