use etl::{Error, Outcome, OwnedOutcome};

#[derive(Debug, Clone, PartialEq)]
struct Buffer {
    bytes: Vec<u8>,
}

#[test]
fn construction_takes_the_handle() {
    let mut handle = Some(Box::new(Buffer { bytes: vec![1, 2] }));
    let outcome: OwnedOutcome<Buffer, Error> = Outcome::from_owned(handle.take().unwrap());

    assert!(handle.is_none());
    assert!(outcome.is_ok());
    assert!(!outcome.is_err());
}

#[test]
fn ok_returns_independent_duplicates() {
    let outcome: OwnedOutcome<Buffer, Error> =
        Outcome::from_value(Buffer { bytes: vec![1, 2] });

    let mut first = outcome.ok().unwrap();
    first.bytes.push(3);

    let second = outcome.ok().unwrap();
    assert_eq!(second.bytes, vec![1, 2]);
    assert_eq!(first.bytes, vec![1, 2, 3]);
    assert_eq!(outcome.as_owned().map(|b| b.bytes.len()), Some(2));
}

#[test]
fn ok_duplicate_is_a_separate_allocation() {
    let outcome: OwnedOutcome<Buffer, Error> = Outcome::from_value(Buffer { bytes: vec![9] });
    let copy = outcome.ok().unwrap();
    let stored: *const Buffer = outcome.as_owned().unwrap();
    assert!(!std::ptr::eq(stored, &*copy));
}

#[test]
fn failure_carries_error_by_copy_or_move() {
    let error = Error::create("no memory");
    let copied: OwnedOutcome<Buffer, Error> = Outcome::failure(error.clone());
    let moved: OwnedOutcome<Buffer, Error> = Outcome::failure(error);

    assert_eq!(copied.ok(), None);
    assert_eq!(copied.err(), moved.err());
    assert_eq!(moved.err().unwrap().msg(), "no memory");
}

#[test]
fn into_ok_transfers_ownership_out() {
    let outcome: OwnedOutcome<Buffer, Error> = Outcome::from_value(Buffer { bytes: vec![4] });
    let owned: Box<Buffer> = outcome.into_ok().unwrap();
    assert_eq!(owned.bytes, vec![4]);
}

#[test]
fn from_value_boxes_a_plain_value() {
    let outcome: OwnedOutcome<Buffer, Error> = Outcome::from_value(Buffer { bytes: vec![5] });
    assert!(outcome.is_ok());
    assert_eq!(outcome.as_owned(), Some(&Buffer { bytes: vec![5] }));
    assert_eq!(outcome.into_ok(), Some(Box::new(Buffer { bytes: vec![5] })));
}
