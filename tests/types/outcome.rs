use etl::{Error, Outcome};

#[test]
fn success_reports_ok_and_hides_error() {
    for value in [-3, 0, 7, i32::MAX] {
        let outcome: Outcome<i32, Error> = Outcome::success(value);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(outcome.ok(), Some(value));
        assert_eq!(outcome.err(), None);
    }
}

#[test]
fn failure_reports_err_and_hides_value() {
    for msg in ["", "boom", "disk full"] {
        let outcome: Outcome<i32, Error> = Outcome::failure(Error::create(msg));
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
        assert_eq!(outcome.ok(), None);
        assert_eq!(outcome.err(), Some(Error::create(msg)));
    }
}

#[test]
fn accessors_do_not_consume_or_change_the_outcome() {
    let outcome: Outcome<String, &str> = Outcome::success("kept".to_string());
    assert_eq!(outcome.ok().as_deref(), Some("kept"));
    assert_eq!(outcome.ok().as_deref(), Some("kept"));
    assert_eq!(outcome.as_ok().map(String::len), Some(4));
    assert_eq!(outcome, Outcome::Ok("kept".to_string()));
}

#[test]
fn as_ref_borrows_the_active_side() {
    let ok: Outcome<String, i32> = Outcome::success("v".to_string());
    let value = "v".to_string();
    assert_eq!(ok.as_ref(), Outcome::Ok(&value));
    assert!(ok.is_ok());

    let err: Outcome<String, i32> = Outcome::failure(7);
    assert_eq!(err.as_ref(), Outcome::Err(&7));
    assert_eq!(err, Outcome::Err(7));
}

#[test]
fn map_identity_preserves_success() {
    let original: Outcome<i32, Error> = Outcome::success(5);
    assert_eq!(original.clone().map(|x| x), original);
}

#[test]
fn map_leaves_failure_untouched() {
    let original: Outcome<i32, Error> = Outcome::failure(Error::create("bad input"));
    let mut called = false;
    let mapped = original.clone().map(|x| {
        called = true;
        x + 1
    });
    assert!(!called);
    assert_eq!(mapped, original);
}

#[test]
fn map_err_identity_preserves_failure() {
    let original: Outcome<i32, Error> = Outcome::failure(Error::create("bad input"));
    assert_eq!(original.clone().map_err(|e| e), original);
}

#[test]
fn map_err_leaves_success_untouched() {
    let original: Outcome<i32, Error> = Outcome::success(9);
    let mapped = original.clone().map_err(|mut e| {
        e.set("rewritten");
        e
    });
    assert_eq!(mapped, original);
}

#[test]
fn map_err_can_rewrite_the_message() {
    let outcome: Outcome<i32, Error> = Outcome::failure(Error::create("io"));
    let rewritten = outcome.map_err(|mut e| {
        e.set(format!("config: {}", e.msg()));
        e
    });
    assert_eq!(rewritten.err().unwrap().msg(), "config: io");
}

#[test]
fn map_can_change_the_success_type() {
    let outcome: Outcome<i32, &str> = Outcome::success(3);
    assert_eq!(outcome.map(|x| x.to_string()), Outcome::Ok("3".to_string()));
}

#[test]
fn bimap_rewrites_the_active_side_only() {
    let ok = Outcome::<i32, &str>::success(21).bimap(|x| x * 2, str::len);
    assert_eq!(ok, Outcome::Ok(42));

    let err = Outcome::<i32, &str>::failure("four").bimap(|x| x * 2, str::len);
    assert_eq!(err, Outcome::Err(4));
}

#[test]
fn or_else_recovers_failures() {
    let recovered: Outcome<i32, ()> =
        Outcome::<i32, &str>::failure("missing")
            .or_else(|_| Outcome::success(0));
    assert_eq!(recovered, Outcome::Ok(0));
}

#[test]
fn unwrap_or_variants_fall_back_on_failure() {
    assert_eq!(Outcome::<i32, &str>::success(1).unwrap_or(0), 1);
    assert_eq!(Outcome::<i32, &str>::failure("x").unwrap_or(0), 0);
    assert_eq!(
        Outcome::<usize, &str>::failure("four").unwrap_or_else(str::len),
        4
    );
}

#[test]
fn inspect_hooks_see_only_their_side() {
    let mut seen_ok = None;
    let mut seen_err = None;

    let _ = Outcome::<i32, &str>::success(1)
        .inspect(|v| seen_ok = Some(*v))
        .inspect_err(|e| seen_err = Some(*e));
    assert_eq!(seen_ok, Some(1));
    assert_eq!(seen_err, None);

    let _ = Outcome::<i32, &str>::failure("no")
        .inspect_err(|e| seen_err = Some(*e));
    assert_eq!(seen_err, Some("no"));
}

#[test]
fn converts_to_and_from_std_result() {
    let from_ok: Outcome<i32, &str> = Ok(1).into();
    let from_err: Outcome<i32, &str> = Err("e").into();
    assert_eq!(from_ok, Outcome::Ok(1));
    assert_eq!(from_err, Outcome::Err("e"));

    assert_eq!(from_err.into_result(), Err("e"));
    assert_eq!(from_ok.into_result(), Ok(1));
}

#[test]
fn unit_success_stands_in_for_no_value() {
    fn save(ok: bool) -> Outcome<(), Error> {
        if ok {
            Outcome::success(())
        } else {
            Outcome::failure(Error::create("read-only"))
        }
    }

    assert_eq!(save(true).ok(), Some(()));
    assert!(save(false).is_err());
}
