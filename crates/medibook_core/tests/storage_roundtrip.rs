use medibook_core::{
    load_address_book, save_address_book, AddressBook, Appointment, Person, PersonId,
    PersonListQuery, PersonRecord, PersonRepository, StorageError,
};

fn sample_persons() -> Vec<Person> {
    let mut book = AddressBook::new();
    book.add_person(Person::patient(PersonRecord::new(
        1,
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
    )))
    .unwrap();
    book.add_person(Person::doctor(PersonRecord::new(
        2,
        "Benson Meier",
        "98765432",
        "benson@example.com",
        "311, Clementi Ave 2, #02-25",
    )))
    .unwrap();
    book.record_appointment(&Appointment::new(
        PersonId::patient(1),
        PersonId::doctor(2),
        "annual check-up",
    ))
    .unwrap();
    book.list_persons(&PersonListQuery::default())
}

#[test]
fn save_and_load_preserve_persons_and_histories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let persons = sample_persons();
    save_address_book(&path, &persons).unwrap();
    let loaded = load_address_book(&path).unwrap();

    assert_eq!(loaded, persons);
    assert_eq!(loaded[0].appointments().len(), 1);
    assert_eq!(loaded[1].appointments().len(), 1);

    // The loaded snapshot satisfies the registry invariant by construction.
    let book = AddressBook::from_persons(loaded).unwrap();
    assert!(book.patient_by_id(PersonId::patient(1)).is_some());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("addressbook.json");

    save_address_book(&path, &sample_persons()).unwrap();
    assert!(path.exists());
}

#[test]
fn load_rejects_duplicate_members() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut persons = sample_persons();
    persons.push(persons[0].clone());
    // Raw write: save itself is not the gate, load is.
    std::fs::write(&path, serde_json::to_string(&persons).unwrap()).unwrap();

    let err = load_address_book(&path).unwrap_err();
    match err {
        StorageError::InvalidData(message) => assert!(message.contains("duplicate person")),
        other => panic!("expected InvalidData, got {other}"),
    }
}

#[test]
fn load_rejects_field_level_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let json = serde_json::json!([{
        "role": "patient",
        "id_value": 1,
        "name": "Alice Pauline",
        "phone": "not-digits",
        "email": "alice@example.com",
        "address": "somewhere"
    }]);
    std::fs::write(&path, json.to_string()).unwrap();

    let err = load_address_book(&path).unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));
}

#[test]
fn load_of_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_address_book(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_address_book(&path).unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}
