use medibook_core::{
    AddAppointmentCommand, AddressBook, Appointment, CommandError, ListAppointmentsCommand,
    Person, PersonId, PersonListQuery, PersonRecord, PersonRepository, Role,
    MESSAGE_ADD_APPOINTMENT_SUCCESS,
};

const DEFAULT_TIME_EPOCH_MS: i64 = 1_735_646_400_000; // 2024-12-31T12:00 UTC

fn sample_patient() -> Person {
    Person::patient(PersonRecord::new(
        1,
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
    ))
}

fn sample_doctor() -> Person {
    Person::doctor(PersonRecord::new(
        2,
        "Benson Meier",
        "98765432",
        "benson@example.com",
        "311, Clementi Ave 2, #02-25",
    ))
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_person(sample_patient()).unwrap();
    book.add_person(sample_doctor()).unwrap();
    book
}

fn expected_line() -> String {
    "Appointment: Id{id=1, role=Patient} (patient id) \
     with Id{id=2, role=Doctor} (doctor id). Remarks: "
        .to_string()
}

#[test]
fn add_appointment_appends_one_line_to_both_histories() {
    let mut book = sample_book();
    let command = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap();

    let result = command.execute(&mut book).unwrap();
    assert_eq!(result.feedback, MESSAGE_ADD_APPOINTMENT_SUCCESS);

    let patient = book.patient_by_id(PersonId::patient(1)).unwrap();
    let doctor = book.doctor_by_id(PersonId::doctor(2)).unwrap();
    assert_eq!(patient.appointment_log(), vec![expected_line()]);
    assert_eq!(doctor.appointment_log(), vec![expected_line()]);
}

#[test]
fn doctor_report_matches_exact_history_text() {
    let mut book = sample_book();
    AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap()
    .execute(&mut book)
    .unwrap();

    let report = ListAppointmentsCommand::new(PersonId::doctor(2))
        .execute(&book)
        .unwrap();
    assert_eq!(
        report.feedback,
        format!("All appointments for you in the database:\n{}\n", expected_line())
    );
}

#[test]
fn duplicate_appointment_fails_and_leaves_histories_unchanged() {
    let mut book = sample_book();
    let command = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "annual check-up",
    )
    .unwrap();

    command.execute(&mut book).unwrap();
    let err = command.execute(&mut book).unwrap_err();
    assert_eq!(err, CommandError::DuplicateAppointment);
    assert_eq!(
        err.to_string(),
        "This appointment already exists in the address book"
    );

    let patient = book.patient_by_id(PersonId::patient(1)).unwrap();
    let doctor = book.doctor_by_id(PersonId::doctor(2)).unwrap();
    assert_eq!(patient.appointments().len(), 1);
    assert_eq!(doctor.appointments().len(), 1);
}

#[test]
fn duplicate_is_detected_even_when_only_one_side_knows_it() {
    // Seed the triple on the patient's history alone before registration.
    let mut patient = sample_patient();
    patient.add_appointment(Appointment::new(
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    ));
    let mut book = AddressBook::new();
    book.add_person(patient).unwrap();
    book.add_person(sample_doctor()).unwrap();

    let err = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap()
    .execute(&mut book)
    .unwrap_err();
    assert_eq!(err, CommandError::DuplicateAppointment);

    // The doctor's history stays empty; the failed attempt wrote nothing.
    let doctor = book.doctor_by_id(PersonId::doctor(2)).unwrap();
    assert!(doctor.appointments().is_empty());
}

#[test]
fn unknown_patient_fails_without_mutating_the_doctor() {
    let mut book = AddressBook::new();
    book.add_person(sample_doctor()).unwrap();

    let err = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap()
    .execute(&mut book)
    .unwrap_err();
    assert_eq!(err, CommandError::PersonNotFound(PersonId::patient(1)));

    let doctor = book.doctor_by_id(PersonId::doctor(2)).unwrap();
    assert!(doctor.appointments().is_empty());
}

#[test]
fn unknown_doctor_fails_without_mutating_the_patient() {
    let mut book = AddressBook::new();
    book.add_person(sample_patient()).unwrap();

    let err = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap()
    .execute(&mut book)
    .unwrap_err();
    assert_eq!(err, CommandError::PersonNotFound(PersonId::doctor(2)));

    let patient = book.patient_by_id(PersonId::patient(1)).unwrap();
    assert!(patient.appointments().is_empty());
}

#[test]
fn role_mismatched_ids_are_rejected_at_construction() {
    let err = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::doctor(1),
        PersonId::doctor(2),
        "",
    )
    .unwrap_err();
    assert_eq!(
        err,
        CommandError::WrongRole {
            expected: Role::Patient,
            actual: PersonId::doctor(1),
        }
    );

    let err = AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::patient(2),
        "",
    )
    .unwrap_err();
    assert_eq!(
        err,
        CommandError::WrongRole {
            expected: Role::Doctor,
            actual: PersonId::patient(2),
        }
    );
}

#[test]
fn success_leaves_registry_membership_and_order_untouched() {
    let mut book = sample_book();
    let before: Vec<_> = book
        .list_persons(&PersonListQuery::default())
        .iter()
        .map(Person::id)
        .collect();

    AddAppointmentCommand::new(
        DEFAULT_TIME_EPOCH_MS,
        PersonId::patient(1),
        PersonId::doctor(2),
        "remark",
    )
    .unwrap()
    .execute(&mut book)
    .unwrap();

    let after: Vec<_> = book
        .list_persons(&PersonListQuery::default())
        .iter()
        .map(Person::id)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn list_appointments_for_unknown_person_fails() {
    let book = AddressBook::new();
    let err = ListAppointmentsCommand::new(PersonId::patient(5))
        .execute(&book)
        .unwrap_err();
    assert_eq!(err, CommandError::PersonNotFound(PersonId::patient(5)));
}
