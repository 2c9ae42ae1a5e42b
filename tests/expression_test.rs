use avow::{that, that_opt, EvalState, Evaluated};
use pretty_assertions::assert_eq;

#[test]
fn test_nullity_check_runs_first_on_absent_subject() {
    // Chained [is_populated, is_not_null]; effective order is
    // [is_not_null, is_populated].
    let result = that_opt::<String>(None)
        .is_populated()
        .is_not_null()
        .evaluate();

    let names: Vec<&str> = result.children().iter().map(Evaluated::name).collect();
    assert_eq!(names, vec!["is_not_null", "is_populated"]);

    assert_eq!(result.children()[0].state(), EvalState::Failed);
    assert_eq!(result.children()[1].state(), EvalState::Skipped);
    assert_eq!(result.state(), EvalState::Failed);
}

#[test]
fn test_present_subject_passes_whole_chain() {
    let result = that("abc").is_not_null().has_length_of(3).evaluate();

    assert_eq!(result.state(), EvalState::Passed);
    assert!(result.children().iter().all(Evaluated::is_passed));
    assert_eq!(result.passed(), 2);
    assert_eq!(result.failed(), 0);
    assert_eq!(result.skipped(), 0);
}

#[test]
fn test_checks_preserve_insertion_order() {
    let result = that("hello.rs")
        .starts_with("hello")
        .ends_with(".rs")
        .includes('.')
        .evaluate();

    let names: Vec<&str> = result.children().iter().map(Evaluated::name).collect();
    assert_eq!(
        names,
        vec!["starts_with[\"hello\"]", "ends_with[\".rs\"]", "includes['.']"]
    );
}

#[test]
fn test_everything_after_first_failure_is_skipped() {
    let result = that("abc")
        .is_not_null()
        .has_length_of(9)
        .starts_with("a")
        .includes('b')
        .evaluate();

    let states: Vec<EvalState> = result.children().iter().map(Evaluated::state).collect();
    assert_eq!(
        states,
        vec![
            EvalState::Passed,
            EvalState::Failed,
            EvalState::Skipped,
            EvalState::Skipped
        ]
    );
}

#[test]
fn test_compound_rationale_carries_counts() {
    let result = that("abc").is_not_null().has_length_of(9).is_blank().evaluate();

    assert_eq!(result.rationale().expected(), "All children must pass");
    assert_eq!(result.rationale().actual(), "Passed: 1, Failed: 1, Skipped: 1");
}

#[test]
fn test_chain_without_checks_passes() {
    let result = that(42i64).evaluate();

    assert_eq!(result.state(), EvalState::Passed);
    assert!(result.children().is_empty());
}

#[test]
fn test_repeated_is_not_null_keeps_a_single_nullity_check() {
    let result = that("abc").is_not_null().is_populated().is_not_null().evaluate();

    let nullity_checks = result
        .children()
        .iter()
        .filter(|child| child.name() == "is_not_null")
        .count();
    assert_eq!(nullity_checks, 1);
    assert_eq!(result.total(), 2);
}

#[test]
fn test_evaluated_serializes_and_round_trips() {
    let result = that("abc").is_not_null().has_length_of(3).evaluate();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["state"], "Passed");
    assert_eq!(value["children"][0]["name"], "is_not_null");
    assert_eq!(value["rationale"]["expected"], "All children must pass");

    let round_tripped: Evaluated = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, result);
}
