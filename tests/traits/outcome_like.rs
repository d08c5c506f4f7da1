use error_envelope::{Error, Outcome, OutcomeLike, DEFAULT_RESULT};

fn branch_name<O: OutcomeLike>(outcome: &O) -> &'static str {
    if outcome.is_success() {
        "success"
    } else {
        "fail"
    }
}

#[test]
fn outcome_and_result_expose_one_branch() {
    let ok = Outcome::success(1);
    let err: Result<i32, Error> = Err(Error::new("denied"));

    assert_eq!(branch_name(&ok), "success");
    assert_eq!(branch_name(&err), "fail");

    assert_eq!(OutcomeLike::as_success(&ok), Some(&1));
    assert!(OutcomeLike::as_fail(&ok).is_none());
    assert_eq!(err.as_fail().map(Error::code), Some("denied"));
    assert!(err.as_success().is_none());
}

#[test]
fn match_outcome_on_result() {
    let ok: Result<i32, Error> = Ok(123);
    assert_eq!(ok.match_outcome(|v| v + 1, |_| -1), 124);

    let err: Result<i32, Error> = Err(Error::new("x"));
    assert_eq!(err.match_outcome(|v| v + 1, |_| -1), -1);
}

#[test]
fn switch_outcome_runs_one_effect() {
    let mut hits = 0;
    let err: Result<u8, Error> = Err(Error::new("x"));
    err.switch_outcome(|_| unreachable!(), |_| hits += 1);
    assert_eq!(hits, 1);
}

#[test]
fn cast_fail_keeps_error() {
    let err: Result<u8, Error> = Err(Error::new("io").with_target("path"));
    let recast: Outcome<String> = err.cast_fail();
    assert_eq!(recast.error().target(), Some("path"));
}

#[test]
#[should_panic(expected = "cannot call `cast` on a Success outcome")]
fn cast_fail_panics_on_success() {
    let ok: Result<u8, Error> = Ok(1);
    let _: Outcome<String> = ok.cast_fail();
}

#[test]
fn into_unit_and_value_or_fault() {
    let ok: Result<u8, Error> = Ok(1);
    assert_eq!(ok.into_unit(), DEFAULT_RESULT);

    let err: Result<u8, Error> = Err(Error::new("io").with_message("gone"));
    let failure = OutcomeLike::value_or_fault(err).unwrap_err();
    assert_eq!(failure.message(), "gone");
}

#[test]
fn to_error_response_only_for_failures() {
    assert!(Outcome::success(1).to_error_response().is_none());

    let failed: Outcome<u8> = Error::new("conflict").into();
    let response = failed.to_error_response().unwrap();
    assert_eq!(response.error().code(), "conflict");
}
