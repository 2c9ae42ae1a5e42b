//! Rendering of an evaluated expression into a failure message.

use std::fmt::Write as _;

use crate::eval::{EvalState, Evaluated};

/// Renders the result tree as a multi-line report, prefixed with the
/// caller-supplied message when one is given.
pub fn render(evaluated: &Evaluated, message: &str) -> String {
    let mut out = String::new();
    if !message.is_empty() {
        let _ = writeln!(out, "{message}");
    }
    render_node(&mut out, evaluated, 0);
    out
}

fn render_node(out: &mut String, node: &Evaluated, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = match node.state() {
        EvalState::Passed => "[PASS]",
        EvalState::Failed => "[FAIL]",
        EvalState::Skipped => "[SKIP]",
    };

    if node.children().is_empty() {
        let _ = writeln!(out, "{indent}{marker} {}", node.name());
        if node.state() == EvalState::Failed {
            let rationale = node.rationale();
            let _ = writeln!(out, "{indent}       expected: {}", rationale.expected());
            let _ = writeln!(out, "{indent}       actual:   {}", rationale.actual());
            if let Some(hint) = rationale.hint() {
                let _ = writeln!(out, "{indent}       hint:     {hint}");
            }
        }
    } else {
        let _ = writeln!(
            out,
            "{indent}{marker} {} (passed: {}, failed: {}, skipped: {})",
            node.name(),
            node.passed(),
            node.failed(),
            node.skipped()
        );
        for child in node.children() {
            render_node(out, child, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::that_opt;

    use super::*;

    #[test]
    fn test_render_includes_markers_and_counts() {
        let evaluated = that_opt::<String>(None)
            .is_not_null()
            .is_populated()
            .evaluate();
        let rendered = render(&evaluated, "expected a populated subject");

        assert!(rendered.starts_with("expected a populated subject\n"));
        assert!(rendered.contains("(passed: 0, failed: 1, skipped: 1)"));
        assert!(rendered.contains("[FAIL] is_not_null"));
        assert!(rendered.contains("expected: not[(none)]"));
        assert!(rendered.contains("actual:   (none)"));
        assert!(rendered.contains("[SKIP] is_populated"));
    }

    #[test]
    fn test_render_without_message() {
        let evaluated = that_opt(Some("x")).is_not_null().evaluate();
        let rendered = render(&evaluated, "");

        assert!(rendered.starts_with("[PASS] subject["));
        assert!(rendered.contains("[PASS] is_not_null"));
    }

    #[test]
    fn test_passing_leaves_carry_no_detail_lines() {
        let evaluated = that_opt(Some("x")).is_not_null().evaluate();
        let rendered = render(&evaluated, "");

        assert!(!rendered.contains("expected:"));
        assert!(!rendered.contains("hint:"));
    }
}
