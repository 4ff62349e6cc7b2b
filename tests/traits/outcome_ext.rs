use etl::traits::OutcomeExt;
use etl::{runtime_info, Outcome};

#[test]
fn into_outcome_keeps_both_sides() {
    assert_eq!(Ok::<i32, &str>(1).into_outcome(), Outcome::Ok(1));
    assert_eq!(Err::<i32, &str>("e").into_outcome(), Outcome::Err("e"));
}

#[test]
fn into_error_uses_display_output() {
    let outcome = "-1".parse::<u8>().into_error();
    let err = outcome.err().unwrap();
    assert_eq!(err.msg(), "invalid digit found in string");
    assert!(!err.has_location());
}

#[test]
fn into_located_error_attaches_report() {
    let outcome = "".parse::<u8>().into_located_error(runtime_info!());
    let err = outcome.err().unwrap();

    assert_eq!(err.msg(), "cannot parse integer from empty string");
    assert!(err
        .info()
        .starts_with("Error: cannot parse integer from empty string\n"));
    assert!(err.info().contains("into_located_error_attaches_report"));
    assert!(err.info().contains("outcome_ext.rs:"));
}

#[test]
fn success_passes_through_error_conversion() {
    assert_eq!("12".parse::<u8>().into_error().ok(), Some(12));
}
