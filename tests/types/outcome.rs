use error_envelope::{Error, Fault, Outcome, UnitOutcome, Variant, DEFAULT_RESULT};

fn failed<T>() -> Outcome<T> {
    Outcome::fail(Error::new("boom").with_message("it broke"))
}

#[test]
fn success_exposes_value_only() {
    for v in [0, 1, -7, i32::MAX] {
        let outcome = Outcome::success(v);
        assert!(outcome.is_success());
        assert!(!outcome.is_fail());
        assert_eq!(outcome.variant(), Variant::Success);
        assert_eq!(outcome.value(), &v);
        assert_eq!(outcome.as_success(), Some(&v));
        assert!(outcome.as_fail().is_none());
    }
}

#[test]
fn fail_exposes_error_only() {
    let error = Error::new("boom").with_message("it broke");
    let outcome: Outcome<String> = Outcome::fail(error.clone());

    assert!(outcome.is_fail());
    assert!(!outcome.is_success());
    assert_eq!(outcome.variant(), Variant::Fail);
    assert_eq!(outcome.error(), &error);
    assert_eq!(outcome.as_fail(), Some(&error));
    assert!(outcome.as_success().is_none());
}

#[test]
#[should_panic(expected = "cannot call `error` on a Success outcome")]
fn error_on_success_panics() {
    let outcome = Outcome::success(1);
    let _ = outcome.error();
}

#[test]
#[should_panic(expected = "cannot call `value` on a Fail outcome")]
fn value_on_fail_panics() {
    let outcome: Outcome<i32> = failed();
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "cannot call `into_value` on a Fail outcome")]
fn into_value_on_fail_panics() {
    let _ = failed::<i32>().into_value();
}

#[test]
#[should_panic(expected = "cannot call `into_error` on a Success outcome")]
fn into_error_on_success_panics() {
    let _ = Outcome::success("x").into_error();
}

#[test]
fn try_accessors_report_faults() {
    let ok = Outcome::success(5);
    assert_eq!(ok.try_value(), Ok(&5));
    assert_eq!(
        ok.try_error(),
        Err(Fault::InvalidState {
            accessor: "error",
            variant: Variant::Success,
        })
    );

    let bad: Outcome<i32> = failed();
    assert_eq!(bad.try_error().map(Error::code), Ok("boom"));
    assert_eq!(
        bad.try_value(),
        Err(Fault::InvalidState {
            accessor: "value",
            variant: Variant::Fail,
        })
    );
}

#[test]
fn null_is_success_without_value() {
    let outcome: Outcome<Option<String>> = Outcome::null();
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), &None);
}

#[test]
fn match_with_invokes_exactly_one_branch() {
    assert_eq!(Outcome::success(123).match_with(|v| v + 1, |_| -1), 124);
    assert_eq!(failed::<i32>().match_with(|v| v + 1, |_| -1), -1);
}

#[test]
fn match_ref_borrows() {
    let outcome = Outcome::success(String::from("abc"));
    let len = outcome.match_ref(|s| s.len(), |e| e.code().len());
    assert_eq!(len, 3);
    assert!(outcome.is_success());
}

#[test]
fn switch_runs_one_effect() {
    let seen = std::cell::RefCell::new(Vec::new());
    let on_success = |v: &i32| seen.borrow_mut().push(format!("ok {v}"));
    let on_fail = |e: &Error| seen.borrow_mut().push(e.code().to_string());

    Outcome::success(1).switch(on_success, on_fail);
    failed::<i32>().switch(on_success, on_fail);

    assert_eq!(
        seen.into_inner(),
        vec!["ok 1".to_string(), "boom".to_string()]
    );
}

#[test]
fn cast_carries_identical_error() {
    let original: Outcome<i32> = failed();
    let error = original.error().clone();

    let recast: Outcome<Vec<u8>> = original.cast();
    assert!(recast.is_fail());
    assert_eq!(recast.error(), &error);
}

#[test]
#[should_panic(expected = "cannot call `cast` on a Success outcome")]
fn cast_on_success_panics() {
    let _: Outcome<String> = Outcome::success(1).cast();
}

#[test]
fn try_cast_returns_success_back() {
    let back = Outcome::success(9).try_cast::<String>().unwrap_err();
    assert_eq!(back, Outcome::success(9));

    let recast = failed::<i32>().try_cast::<String>().unwrap();
    assert_eq!(recast.error().code(), "boom");
}

#[test]
fn value_or_fault_carries_original_error() {
    assert_eq!(Outcome::success(3).value_or_fault().unwrap(), 3);

    let error = Error::new("boom").with_message("it broke").with_target("x");
    let failure = Outcome::<u8>::fail(error.clone())
        .value_or_fault()
        .unwrap_err();
    assert_eq!(failure.error(), &error);
    assert_eq!(failure.message(), "it broke");
}

#[test]
fn value_or_fault_message_is_empty_without_message() {
    let failure = Outcome::<u8>::fail(Error::new("quiet"))
        .value_or_fault()
        .unwrap_err();
    assert_eq!(failure.message(), "");
    assert_eq!(failure.to_string(), "");
}

#[test]
fn ensure_success_matches_value_or_fault() {
    assert!(DEFAULT_RESULT.ensure_success().is_ok());

    let outcome: UnitOutcome = failed();
    let from_ensure = outcome.ensure_success().unwrap_err();
    let from_value = outcome.value_or_fault().unwrap_err();
    assert_eq!(from_ensure, from_value);
}

#[test]
fn equality_is_by_variant_and_payload() {
    assert_eq!(Outcome::success(1), Outcome::success(1));
    assert_ne!(Outcome::success(1), Outcome::success(2));
    assert_eq!(failed::<i32>(), failed::<i32>());
    assert_ne!(failed::<i32>(), Outcome::fail(Error::new("other")));

    let fail: Outcome<Option<i32>> = Outcome::fail(Error::new("x"));
    assert_ne!(Outcome::null(), fail);
}

#[test]
fn combinators_preserve_failure() {
    let doubled = Outcome::success(4).map(|v| v * 2);
    assert_eq!(doubled, Outcome::success(8));

    let chained = Outcome::success(4).and_then(|_| failed::<i32>());
    assert_eq!(chained.error().code(), "boom");

    let renamed = failed::<i32>().map_error(|e| Error::new("wrapped").with_inner_error(e));
    assert_eq!(renamed.error().inner_error().map(Error::code), Some("boom"));

    assert_eq!(failed::<i32>().unwrap_or_else(|_| 0), 0);
}

#[test]
fn as_unit_drops_payload() {
    assert_eq!(Outcome::success("ignored").as_unit(), DEFAULT_RESULT);
    assert!(failed::<i32>().as_unit().is_fail());
}

#[test]
fn as_ref_keeps_variant() {
    let owned = Outcome::success(String::from("v"));
    assert_eq!(owned.as_ref().value().as_str(), "v");
    assert!(failed::<String>().as_ref().is_fail());
}

#[test]
fn as_ref_on_fail_carries_an_equal_error() {
    let outcome: Outcome<String> = failed();
    let borrowed = outcome.as_ref();
    assert_eq!(borrowed.error(), outcome.error());
    assert_eq!(outcome.as_fail(), Some(borrowed.error()));
}

#[test]
fn std_result_conversions_round_trip() {
    let result: Result<i32, Error> = Outcome::success(1).into();
    assert_eq!(result, Ok(1));

    let outcome: Outcome<i32> = Err::<i32, _>(Error::new("e")).into();
    assert_eq!(outcome.error().code(), "e");
}

#[test]
fn try_from_outcome_extracts_error() {
    let error = Error::try_from(failed::<i32>()).unwrap();
    assert_eq!(error.code(), "boom");

    let back = Error::try_from(Outcome::success(2)).unwrap_err();
    assert_eq!(back, Outcome::success(2));
}

#[test]
fn display_delegates_to_payload() {
    assert_eq!(Outcome::success(42).to_string(), "42");
    assert_eq!(failed::<i32>().to_string(), "boom: it broke");
}

#[test]
fn serde_is_externally_tagged() {
    let json = serde_json::to_value(Outcome::success(7)).unwrap();
    assert_eq!(json, serde_json::json!({ "success": 7 }));

    let json = serde_json::to_value(failed::<i32>()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "fail": { "code": "boom", "message": "it broke" } })
    );

    let back: Outcome<i32> = serde_json::from_value(json).unwrap();
    assert_eq!(back, failed());
}

#[test]
fn outcomes_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<Error>();

    let outcome = std::sync::Arc::new(failed::<u8>());
    let handle = {
        let outcome = std::sync::Arc::clone(&outcome);
        std::thread::spawn(move || outcome.error().code().to_string())
    };
    assert_eq!(handle.join().unwrap(), "boom");
}
