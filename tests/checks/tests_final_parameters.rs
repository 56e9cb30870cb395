//! FinalParameters scenarios, run end to end through the tree walker.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use final_params::parser::SyntaxKind;
use final_params::{FinalParameters, Severity};

use crate::helpers::check_helpers::{
    ALL_SCOPES, default_violations, in_method, located, names, violations, walker_with,
};

// ============================================================================
// Method and constructor parameters
// ============================================================================

#[rstest]
#[case::two_plain_params("class A { void f(int x, String y) {} }", &["x", "y"])]
#[case::first_final("class A { void f(final int x, String y) {} }", &["y"])]
#[case::all_final("class A { void f(final int x, final String y) {} }", &[])]
#[case::no_params("class A { void f() {} A() {} }", &[])]
#[case::constructor("class A { A(long id, final String name) {} }", &["id"])]
#[case::varargs("class A { void f(String... rest) {} }", &["rest"])]
#[case::annotated_final("class A { void f(@Nullable final String s) {} }", &[])]
#[case::final_after_annotation("class A { void f(final @Nullable String s) {} }", &[])]
#[case::generic_type("class A { <T> void f(java.util.List<T> items) {} }", &["items"])]
#[case::native_method("class A { native void f(int handle); }", &["handle"])]
#[case::static_method("class A { static void main(String[] args) {} }", &["args"])]
#[case::non_ascii_names("class A { void f(int größe, String 名前) {} }", &["größe", "名前"])]
#[case::annotated_generic_return("class A { <T> @Deprecated T f(T t) { return t; } }", &["t"])]
#[case::annotated_type_argument("class A { void f(java.util.List<@Deprecated(since = \"1\") String> xs) {} }", &["xs"])]
fn test_definitions(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(names(&default_violations(source)), expected);
}

#[test]
fn test_non_ascii_columns_count_characters() {
    let v = default_violations("class A { void f(int größe, int x) {} }");
    assert_eq!(
        located(&v),
        vec![(1, 18, "größe".to_string()), (1, 29, "x".to_string())]
    );
}

#[test]
fn test_order_follows_parameter_list() {
    let v = default_violations("class A { void f(int c, int a, int b) {} }");
    assert_eq!(names(&v), vec!["c", "a", "b"]);
}

#[test]
fn test_same_name_reported_at_each_position() {
    let v = default_violations("class A {\n  void f(int x) {}\n  void g(int x) {}\n}");
    assert_eq!(
        located(&v),
        vec![(2, 10, "x".to_string()), (3, 10, "x".to_string())]
    );
}

#[test]
fn test_position_points_at_first_token() {
    let source = "class A {\n    void f(\n        @Deprecated\n        String s) {}\n}";
    let v = default_violations(source);
    assert_eq!(located(&v), vec![(3, 9, "s".to_string())]);
}

#[test]
fn test_tabs_expand_in_columns() {
    let v = default_violations("class A {\n\tvoid f(\tint x) {}\n}");
    // `\t` → 8, `void f(` → 15, `\t` → 16, so `int` sits in column 17
    assert_eq!(located(&v), vec![(2, 17, "x".to_string())]);
}

// ============================================================================
// Exemptions
// ============================================================================

#[rstest]
#[case::abstract_method("abstract class A { abstract void f(int x, String y); }")]
#[case::abstract_with_annotation("abstract class A { @Override public abstract void f(String y); }")]
#[case::interface_method("interface I { void f(int x); }")]
#[case::interface_default_method("interface I { default void f(int x) { } }")]
#[case::interface_static_method("interface I { static void f(int x) { } }")]
#[case::interface_generic_method("interface I { <T> T f(T t); }")]
fn test_skipped_for_every_configuration(
    #[case] source: &str,
    #[values(false, true)] ignore_primitive_types: bool,
) {
    assert!(violations(source, ALL_SCOPES, ignore_primitive_types).is_empty());
}

#[test]
fn test_class_nested_in_interface_is_checked() {
    let source = "interface I { class Impl { void f(int x) { } } }";
    assert_eq!(names(&default_violations(source)), vec!["x"]);
}

#[test]
fn test_anonymous_class_in_interface_default_method_is_checked() {
    let source = "interface I { default Runnable r() { return new Runnable() { public void run(int n) { } }; } }";
    assert_eq!(names(&default_violations(source)), vec!["n"]);
}

#[rstest]
#[case::primitive("class A { void f(int x) {} }", false, &["x"])]
#[case::primitive_ignored("class A { void f(int x) {} }", true, &[])]
#[case::every_primitive(
    "class A { void f(byte a, short b, int c, long d, float e, double f, boolean g, char h) {} }",
    true,
    &[]
)]
#[case::boxed_not_ignored("class A { void f(Integer x) {} }", true, &["x"])]
#[case::array_not_ignored("class A { void f(int[] x) {} }", true, &["x"])]
#[case::c_style_array_not_ignored("class A { void f(int x[]) {} }", true, &["x"])]
#[case::primitive_varargs_ignored("class A { void f(int... x) {} }", true, &[])]
#[case::final_primitive("class A { void f(final int x) {} }", false, &[])]
#[case::final_primitive_ignored("class A { void f(final int x) {} }", true, &[])]
fn test_primitive_exemption(
    #[case] source: &str,
    #[case] ignore_primitive_types: bool,
    #[case] expected: &[&str],
) {
    let v = violations(
        source,
        &[SyntaxKind::METHOD_DEF, SyntaxKind::CTOR_DEF],
        ignore_primitive_types,
    );
    assert_eq!(names(&v), expected);
}

// ============================================================================
// Catch and for-each
// ============================================================================

#[rstest]
#[case::catch_plain("try { } catch (Exception e) { }", &["e"])]
#[case::catch_final("try { } catch (final Exception e) { }", &[])]
#[case::multi_catch("try { } catch (IllegalStateException | RuntimeException e) { }", &["e"])]
#[case::for_each_plain("for (String s : list) { }", &["s"])]
#[case::for_each_final("for (final String s : list) { }", &[])]
#[case::for_each_var("for (var s : list) { }", &["s"])]
#[case::for_each_wildcard("for (Class<?> c : cs) { }", &["c"])]
#[case::for_each_bounded_wildcard("for (List<? extends Number> l : ls) { }", &["l"])]
#[case::classic_for("for (int i = 0; i < 3; i++) { }", &[])]
#[case::nested_loops("for (String a : list) { for (final String b : list) { for (char c : b.toCharArray()) { } } }", &["a", "c"])]
#[case::lambda_body("list.forEach(x -> { try { } catch (Exception e) { } });", &["e"])]
#[case::try_with_resources("try (var in = open()) { } catch (java.io.IOException e) { } finally { }", &["e"])]
fn test_single_binding_clauses(#[case] body: &str, #[case] expected: &[&str]) {
    let v = violations(&in_method(body), ALL_SCOPES, false);
    assert_eq!(names(&v), expected);
}

#[test]
fn test_clauses_ignored_by_default() {
    let body = "try { } catch (Exception e) { } for (String s : list) { }";
    assert!(default_violations(&in_method(body)).is_empty());
}

#[test]
fn test_for_each_primitive_exemption() {
    let body = "for (int i : new int[] {1, 2}) { } for (Integer j : boxed) { }";
    let v = violations(&in_method(body), &[SyntaxKind::FOR_EACH_CLAUSE], true);
    assert_eq!(names(&v), vec!["j"]);
}

#[test]
fn test_catch_only_scope() {
    let source = "class A { void f(int x) { try { } catch (Exception e) { } } }";
    let v = violations(source, &[SyntaxKind::LITERAL_CATCH], false);
    assert_eq!(located(&v), vec![(1, 42, "e".to_string())]);
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_message_and_severity() {
    let check = FinalParameters::builder()
        .severity(Severity::Warning)
        .build()
        .unwrap();
    let v = walker_with(check)
        .check_source("class A { void f(int x) {} }")
        .unwrap();
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].message_key, "final.parameter");
    assert_eq!(v[0].message(), "Parameter x should be final.");
    assert_eq!(v[0].severity, Severity::Warning);
    assert_eq!(
        v[0].to_string(),
        "[WARNING] 1:18: Parameter x should be final. [FinalParameters]"
    );
}

#[test]
fn test_ignore_severity_reports_nothing() {
    let check = FinalParameters::builder()
        .severity(Severity::Ignore)
        .build()
        .unwrap();
    let v = walker_with(check)
        .check_source("class A { void f(int x, String y) {} }")
        .unwrap();
    assert!(v.is_empty());
}

#[test]
fn test_emission_order_across_scopes() {
    let source = "class A {
    void f(int a) {
        for (String s : list) { }
        try { } catch (Exception e) { }
    }
    A(int b) { }
}";
    let v = violations(source, ALL_SCOPES, false);
    assert_eq!(names(&v), vec!["a", "s", "e", "b"]);
}
