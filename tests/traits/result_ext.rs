use error_envelope::{Error, OutcomeResultExt};

#[test]
fn or_fail_keeps_success() {
    let outcome = "42".parse::<u32>().or_fail("bad_number");
    assert_eq!(outcome.into_value(), 42);
}

#[test]
fn or_fail_uses_display_as_message() {
    let outcome = "".parse::<u32>().or_fail("bad_number");
    assert_eq!(outcome.error().code(), "bad_number");
    assert_eq!(
        outcome.error().message(),
        Some("cannot parse integer from empty string")
    );
}

#[test]
fn or_fail_with_only_runs_on_error() {
    let ok: Result<u8, &str> = Ok(1);
    let outcome = ok.or_fail_with(|_| unreachable!());
    assert!(outcome.is_success());

    let err: Result<u8, &str> = Err("name");
    let outcome = err.or_fail_with(Error::null_argument_disallowed);
    assert_eq!(outcome.error().target(), Some("name"));
}
