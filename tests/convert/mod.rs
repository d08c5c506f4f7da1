use error_envelope::convert::*;
use error_envelope::{Error, Outcome};

#[test]
fn result_round_trip_preserves_error() {
    let error = Error::new("io").with_detail(Error::new("eof"));
    let outcome: Outcome<u8> = result_to_outcome(Err(error.clone()));
    assert_eq!(outcome_to_result(outcome), Err(error));
}

#[test]
fn from_parts_prefers_error() {
    assert_eq!(from_parts("v", None), Outcome::success("v"));

    let outcome = from_parts("v", Some(Error::new("late")));
    assert_eq!(outcome.error().code(), "late");
}

#[test]
fn into_parts_fills_one_side() {
    assert_eq!(into_parts(Outcome::success(1)), (Some(1), None));

    let (value, error) = into_parts(Outcome::<i32>::fail(Error::new("x")));
    assert!(value.is_none());
    assert_eq!(error, Some(Error::new("x")));
}

#[test]
fn match_and_switch_over_any_outcome() {
    assert_eq!(match_outcome(Outcome::success(2), |v| v * 10, |_| 0), 20);

    let mut code = String::new();
    let result: Result<(), Error> = Err(Error::new("denied"));
    switch_outcome(&result, |_| {}, |e| code.push_str(e.code()));
    assert_eq!(code, "denied");
}

#[test]
fn cast_fail_over_result() {
    let result: Result<i32, Error> = Err(Error::new("io"));
    let recast: Outcome<Vec<u8>> = cast_fail(result);
    assert_eq!(recast.error().code(), "io");
}
