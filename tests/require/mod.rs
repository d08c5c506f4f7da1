use error_envelope::codes;
use error_envelope::require::*;

#[test]
fn require_value_passes_present_values() {
    assert_eq!(require_value(Some(3)).into_value(), 3);
}

#[test]
fn require_value_rejects_absent() {
    let outcome = require_value(None::<u8>);
    assert_eq!(outcome.error().code(), codes::NULL_VALUE_DISALLOWED);
    assert!(outcome.error().target().is_none());
}

#[test]
fn require_argument_targets_name() {
    let outcome = require_argument(None::<String>, "email");
    assert_eq!(outcome.error().code(), codes::NULL_ARGUMENT_DISALLOWED);
    assert_eq!(outcome.error().target(), Some("email"));

    assert!(require_argument(Some(""), "email").is_success());
}

#[test]
fn require_guid_rules() {
    let absent = require_guid(None);
    assert_eq!(absent.error().code(), codes::NULL_VALUE_DISALLOWED);

    let empty = require_guid(Some(&[][..]));
    assert_eq!(empty.error().code(), codes::EMPTY_GUID_DISALLOWED);

    let zeroed = require_guid(Some(&[0u8; 16][..]));
    assert_eq!(zeroed.error().code(), codes::EMPTY_GUID_DISALLOWED);

    let mut id = [0u8; 16];
    id[15] = 1;
    assert!(require_guid(Some(&id[..])).is_success());
}
