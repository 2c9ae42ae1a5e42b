use avow::{require, require_with, that, that_opt, verify, PreconditionError};

#[test]
fn test_require_hands_back_the_subject() {
    let bar = require(that("bar").is_not_null().is_populated()).unwrap();
    assert_eq!(bar, "bar");
}

#[test]
fn test_require_absent_subject_fails_with_null_subject_kind() {
    let error = require(that_opt::<String>(None).is_not_null().is_populated()).unwrap_err();
    assert!(matches!(error, PreconditionError::NullSubject { .. }));
}

#[test]
fn test_require_present_subject_fails_with_invalid_value_kind() {
    let error = require(that("x").is_equal_to("y")).unwrap_err();
    assert!(matches!(error, PreconditionError::InvalidValue { .. }));
}

#[test]
fn test_failure_message_shows_the_whole_chain() {
    let error = require_with(
        that_opt::<String>(None).is_not_null().is_populated(),
        "expected populated bar",
    )
    .unwrap_err();
    let message = error.to_string();

    assert!(message.contains("expected populated bar"));
    assert!(message.contains("[FAIL] is_not_null"));
    assert!(message.contains("[SKIP] is_populated"));
    assert!(message.contains("expected: not[(none)]"));
}

#[test]
fn test_require_propagates_through_question_mark() {
    fn build(bar: &str) -> avow::Result<String> {
        let bar = require(that(bar).is_not_null().is_populated())?;
        Ok(bar.to_string())
    }

    assert_eq!(build("bar").unwrap(), "bar");
    assert!(matches!(
        build("").unwrap_err(),
        avow::Error::Precondition(PreconditionError::InvalidValue { .. })
    ));
}

#[test]
fn test_verify_supports_subject_less_chains() {
    assert!(verify(that_opt::<String>(None).is_null()).is_ok());

    let error = require(that_opt::<String>(None).is_null()).unwrap_err();
    assert!(matches!(error, PreconditionError::MissingSubject));
}
