//! String-specific checks, available on any subject that views as `str`.

use std::fmt;

use regex::Regex;

use crate::eval::Evaluation;

use super::unary::UnaryExpr;

fn count_occurrences(s: &str, c: char) -> usize {
    s.chars().filter(|&ch| ch == c).count()
}

fn length_of<S: AsRef<str>>(subject: Option<&S>) -> String {
    match subject {
        Some(value) => format!("length == {}", value.as_ref().chars().count()),
        None => "(none)".to_string(),
    }
}

impl<'a, S: AsRef<str> + fmt::Debug + 'a> UnaryExpr<'a, S> {
    /// Checks that the subject is the empty string.
    pub fn is_empty(self) -> Self {
        self.check(
            Evaluation::new("is_empty", |value: &S| value.as_ref().is_empty())
                .expected("length == 0")
                .actual_with(length_of),
        )
    }

    /// Checks that the subject contains at least one character.
    pub fn is_not_empty(self) -> Self {
        self.check(
            Evaluation::new("is_not_empty", |value: &S| !value.as_ref().is_empty())
                .expected("length > 0")
                .actual_with(length_of),
        )
    }

    /// Checks that the subject contains only whitespace.
    pub fn is_blank(self) -> Self {
        self.check(
            Evaluation::new("is_blank", |value: &S| value.as_ref().trim().is_empty())
                .expected("whitespace only"),
        )
    }

    /// Checks that the subject contains at least one non-whitespace
    /// character.
    pub fn is_not_blank(self) -> Self {
        self.check(
            Evaluation::new("is_not_blank", |value: &S| !value.as_ref().trim().is_empty())
                .expected("not[whitespace only]"),
        )
    }

    /// Checks that the subject is non-empty. The canonical companion of
    /// [`UnaryExpr::is_not_null`] for precondition chains.
    pub fn is_populated(self) -> Self {
        self.check(
            Evaluation::new("is_populated", |value: &S| !value.as_ref().is_empty())
                .expected("populated")
                .actual_with(length_of)
                .hint("subject should contain at least one character"),
        )
    }

    /// Checks that the subject is exactly `length` characters long.
    pub fn has_length_of(self, length: usize) -> Self {
        self.check(
            Evaluation::new(format!("has_length_of[{length}]"), move |value: &S| {
                value.as_ref().chars().count() == length
            })
            .expected(format!("length == {length}"))
            .actual_with(length_of),
        )
    }

    /// Checks that the subject is longer than `length` characters.
    pub fn is_longer_than(self, length: usize) -> Self {
        self.check(
            Evaluation::new(format!("is_longer_than[{length}]"), move |value: &S| {
                value.as_ref().chars().count() > length
            })
            .expected(format!("length > {length}"))
            .actual_with(length_of),
        )
    }

    /// Checks that the subject is shorter than `length` characters.
    pub fn is_shorter_than(self, length: usize) -> Self {
        self.check(
            Evaluation::new(format!("is_shorter_than[{length}]"), move |value: &S| {
                value.as_ref().chars().count() < length
            })
            .expected(format!("length < {length}"))
            .actual_with(length_of),
        )
    }

    /// Checks that the subject is at least `length` characters long.
    pub fn is_longer_than_or_equal_to(self, length: usize) -> Self {
        self.check(
            Evaluation::new(
                format!("is_longer_than_or_equal_to[{length}]"),
                move |value: &S| value.as_ref().chars().count() >= length,
            )
            .expected(format!("length >= {length}"))
            .actual_with(length_of),
        )
    }

    /// Checks that the subject is at most `length` characters long.
    pub fn is_shorter_than_or_equal_to(self, length: usize) -> Self {
        self.check(
            Evaluation::new(
                format!("is_shorter_than_or_equal_to[{length}]"),
                move |value: &S| value.as_ref().chars().count() <= length,
            )
            .expected(format!("length <= {length}"))
            .actual_with(length_of),
        )
    }

    /// Checks that the subject contains the character `c`.
    pub fn includes(self, c: char) -> Self {
        self.check(
            Evaluation::new(format!("includes[{c:?}]"), move |value: &S| {
                value.as_ref().contains(c)
            })
            .expected(format!("includes {c:?}")),
        )
    }

    /// Checks that the subject does not contain the character `c`.
    pub fn excludes(self, c: char) -> Self {
        self.check(
            Evaluation::new(format!("excludes[{c:?}]"), move |value: &S| {
                !value.as_ref().contains(c)
            })
            .expected(format!("excludes {c:?}")),
        )
    }

    /// Checks that the subject contains the substring `needle`.
    pub fn includes_str(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let name = format!("includes_str[{needle:?}]");
        let expected = format!("includes {needle:?}");
        self.check(
            Evaluation::new(name, move |value: &S| value.as_ref().contains(needle.as_str()))
                .expected(expected),
        )
    }

    /// Checks that the subject does not contain the substring `needle`.
    pub fn excludes_str(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let name = format!("excludes_str[{needle:?}]");
        let expected = format!("excludes {needle:?}");
        self.check(
            Evaluation::new(name, move |value: &S| {
                !value.as_ref().contains(needle.as_str())
            })
            .expected(expected),
        )
    }

    /// Checks that the character `c` occurs exactly `times` times.
    pub fn occurs(self, c: char, times: usize) -> Self {
        self.check(
            Evaluation::new(format!("occurs[{c:?}, {times}]"), move |value: &S| {
                count_occurrences(value.as_ref(), c) == times
            })
            .expected(format!("occurrences of {c:?} == {times}"))
            .actual_with(move |subject: Option<&S>| match subject {
                Some(value) => format!(
                    "occurrences of {c:?} == {}",
                    count_occurrences(value.as_ref(), c)
                ),
                None => "(none)".to_string(),
            }),
        )
    }

    /// Checks that the character `c` occurs more than `times` times.
    pub fn occurs_more_than(self, c: char, times: usize) -> Self {
        self.check(
            Evaluation::new(
                format!("occurs_more_than[{c:?}, {times}]"),
                move |value: &S| count_occurrences(value.as_ref(), c) > times,
            )
            .expected(format!("occurrences of {c:?} > {times}")),
        )
    }

    /// Checks that the character `c` occurs fewer than `times` times.
    pub fn occurs_less_than(self, c: char, times: usize) -> Self {
        self.check(
            Evaluation::new(
                format!("occurs_less_than[{c:?}, {times}]"),
                move |value: &S| count_occurrences(value.as_ref(), c) < times,
            )
            .expected(format!("occurrences of {c:?} < {times}")),
        )
    }

    /// Checks that the subject starts with `prefix`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let name = format!("starts_with[{prefix:?}]");
        let expected = format!("starts with {prefix:?}");
        self.check(
            Evaluation::new(name, move |value: &S| {
                value.as_ref().starts_with(prefix.as_str())
            })
            .expected(expected),
        )
    }

    /// Checks that the subject does not start with `prefix`.
    pub fn does_not_start_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let name = format!("does_not_start_with[{prefix:?}]");
        let expected = format!("not[starts with {prefix:?}]");
        self.check(
            Evaluation::new(name, move |value: &S| {
                !value.as_ref().starts_with(prefix.as_str())
            })
            .expected(expected),
        )
    }

    /// Checks that the subject ends with `suffix`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let name = format!("ends_with[{suffix:?}]");
        let expected = format!("ends with {suffix:?}");
        self.check(
            Evaluation::new(name, move |value: &S| {
                value.as_ref().ends_with(suffix.as_str())
            })
            .expected(expected),
        )
    }

    /// Checks that the subject does not end with `suffix`.
    pub fn does_not_end_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let name = format!("does_not_end_with[{suffix:?}]");
        let expected = format!("not[ends with {suffix:?}]");
        self.check(
            Evaluation::new(name, move |value: &S| {
                !value.as_ref().ends_with(suffix.as_str())
            })
            .expected(expected),
        )
    }

    /// Checks that the whole subject matches `pattern`.
    ///
    /// An invalid pattern produces an evaluation that always fails, with the
    /// compile error carried in the rationale hint.
    pub fn matches(self, pattern: &str) -> Self {
        let name = format!("matches[{pattern}]");
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(re) => self.check(
                Evaluation::new(name, move |value: &S| re.is_match(value.as_ref()))
                    .expected(format!("matches /{pattern}/")),
            ),
            Err(error) => self.check(
                Evaluation::nullable(name, |_| false)
                    .expected("always fail: invalid pattern")
                    .hint(format!("pattern failed to compile: {error}")),
            ),
        }
    }

    /// Checks that the subject equals `other`, ignoring ASCII case.
    pub fn is_case_insensitive_equal_to(self, other: impl Into<String>) -> Self {
        let other = other.into();
        let name = format!("is_case_insensitive_equal_to[{other:?}]");
        let expected = format!("case-insensitively {other:?}");
        self.check(
            Evaluation::new(name, move |value: &S| {
                value.as_ref().eq_ignore_ascii_case(other.as_str())
            })
            .expected(expected),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::{that, that_opt};

    #[test]
    fn test_emptiness_checks() {
        assert!(that("").is_empty().evaluate().is_passed());
        assert!(that("a").is_empty().evaluate().is_failed());
        assert!(that("a").is_not_empty().evaluate().is_passed());
        assert!(that("").is_not_empty().evaluate().is_failed());
    }

    #[test]
    fn test_blankness_checks() {
        assert!(that("  \t").is_blank().evaluate().is_passed());
        assert!(that(" a ").is_blank().evaluate().is_failed());
        assert!(that(" a ").is_not_blank().evaluate().is_passed());
        assert!(that("").is_blank().evaluate().is_passed());
    }

    #[test]
    fn test_is_populated() {
        assert!(that("abc").is_populated().evaluate().is_passed());
        assert!(that("").is_populated().evaluate().is_failed());
        assert!(that_opt::<&str>(None).is_populated().evaluate().is_failed());
    }

    #[test]
    fn test_length_checks_count_chars() {
        assert!(that("abc").has_length_of(3).evaluate().is_passed());
        assert!(that("héllo").has_length_of(5).evaluate().is_passed());
        assert!(that("abc").is_longer_than(2).evaluate().is_passed());
        assert!(that("abc").is_shorter_than(4).evaluate().is_passed());
        assert!(that("abc").is_longer_than_or_equal_to(3).evaluate().is_passed());
        assert!(that("abc").is_shorter_than_or_equal_to(2).evaluate().is_failed());
    }

    #[test]
    fn test_length_failure_reports_actual_length() {
        let result = that("abcd").has_length_of(3).evaluate();
        assert!(result.is_failed());
        assert_eq!(result.children()[0].rationale().expected(), "length == 3");
        assert_eq!(result.children()[0].rationale().actual(), "length == 4");
    }

    #[test]
    fn test_inclusion_checks() {
        assert!(that("abc").includes('b').evaluate().is_passed());
        assert!(that("abc").includes('z').evaluate().is_failed());
        assert!(that("abc").excludes('z').evaluate().is_passed());
        assert!(that("abc").includes_str("bc").evaluate().is_passed());
        assert!(that("abc").excludes_str("zz").evaluate().is_passed());
        assert!(that("abc").excludes_str("ab").evaluate().is_failed());
    }

    #[test]
    fn test_occurrence_checks() {
        assert!(that("banana").occurs('a', 3).evaluate().is_passed());
        assert!(that("banana").occurs('a', 2).evaluate().is_failed());
        assert!(that("banana").occurs_more_than('a', 2).evaluate().is_passed());
        assert!(that("banana").occurs_less_than('a', 4).evaluate().is_passed());
    }

    #[test]
    fn test_occurs_failure_reports_actual_count() {
        let result = that("banana").occurs('a', 2).evaluate();
        assert_eq!(
            result.children()[0].rationale().actual(),
            "occurrences of 'a' == 3"
        );
    }

    #[test]
    fn test_affix_checks() {
        assert!(that("hello.rs").starts_with("hello").evaluate().is_passed());
        assert!(that("hello.rs").does_not_start_with("world").evaluate().is_passed());
        assert!(that("hello.rs").ends_with(".rs").evaluate().is_passed());
        assert!(that("hello.rs").does_not_end_with(".go").evaluate().is_passed());
        assert!(that("hello.rs").ends_with(".go").evaluate().is_failed());
    }

    #[test]
    fn test_matches_is_whole_string() {
        assert!(that("abc123").matches("[a-z]+[0-9]+").evaluate().is_passed());
        assert!(that("abc123!").matches("[a-z]+[0-9]+").evaluate().is_failed());
    }

    #[test]
    fn test_invalid_pattern_always_fails_with_hint() {
        let result = that("abc").matches("[unclosed").evaluate();
        assert!(result.is_failed());

        let rationale = result.children()[0].rationale();
        assert_eq!(rationale.expected(), "always fail: invalid pattern");
        assert!(rationale.hint().unwrap().contains("pattern failed to compile"));
    }

    #[test]
    fn test_case_insensitive_equality() {
        assert!(that("HeLLo")
            .is_case_insensitive_equal_to("hello")
            .evaluate()
            .is_passed());
        assert!(that("HeLLo")
            .is_case_insensitive_equal_to("world")
            .evaluate()
            .is_failed());
    }

    #[test]
    fn test_owned_string_subject() {
        let subject = String::from("owned");
        assert!(that(subject).is_populated().has_length_of(5).evaluate().is_passed());
    }
}
