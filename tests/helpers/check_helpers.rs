//! Helpers for running checks over Java sources in tests.

#![allow(dead_code)]

use final_params::{FinalParameters, TreeWalker, Violation};
use final_params::parser::SyntaxKind;

/// The four kinds FinalParameters can visit.
pub const ALL_SCOPES: &[SyntaxKind] = &[
    SyntaxKind::METHOD_DEF,
    SyntaxKind::CTOR_DEF,
    SyntaxKind::LITERAL_CATCH,
    SyntaxKind::FOR_EACH_CLAUSE,
];

/// Walker running a single FinalParameters check.
pub fn walker_with(check: FinalParameters) -> TreeWalker {
    let mut walker = TreeWalker::new();
    walker.register(Box::new(check));
    walker
}

/// Violations for `source` under the given scope and primitive exemption.
pub fn violations(source: &str, tokens: &[SyntaxKind], ignore_primitive_types: bool) -> Vec<Violation> {
    let check = FinalParameters::builder()
        .tokens(tokens.iter().copied())
        .ignore_primitive_types(ignore_primitive_types)
        .build()
        .unwrap();
    walker_with(check).check_source(source).unwrap_or_else(|err| {
        panic!("check failed: {err}\nInput: {source}");
    })
}

/// Violations under the default configuration.
pub fn default_violations(source: &str) -> Vec<Violation> {
    violations(source, &[SyntaxKind::METHOD_DEF, SyntaxKind::CTOR_DEF], false)
}

/// Reported parameter names, in order.
pub fn names(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.args[0].clone()).collect()
}

/// Reported (line, column, name) triples, in order.
pub fn located(violations: &[Violation]) -> Vec<(usize, usize, String)> {
    violations
        .iter()
        .map(|v| (v.line, v.column, v.args[0].clone()))
        .collect()
}

/// Wrap a method body in a class.
pub fn in_method(body: &str) -> String {
    format!("class T {{ void m(final java.util.List<String> list) {{ {} }} }}", body)
}
