//! Parser tests: Java constructs parse cleanly and produce the tree shape
//! the checks navigate.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use final_params::parser::{SyntaxKind, SyntaxNode, parse_java};

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_parses(input: &str) -> SyntaxNode {
    let result = parse_java(input);
    assert!(
        result.ok(),
        "Failed to parse: {:?}\nInput: {}",
        result.errors,
        input
    );
    let root = result.syntax();
    assert_eq!(root.text().to_string(), input, "tree must be lossless");
    root
}

fn count(root: &SyntaxNode, kind: SyntaxKind) -> usize {
    root.descendants().filter(|n| n.kind() == kind).count()
}

fn in_class(member: &str) -> String {
    format!("class T {{ {} }}", member)
}

// ============================================================================
// Declarations
// ============================================================================

#[rstest]
#[case::package_and_imports("package a.b.c;\nimport java.util.List;\nimport static java.lang.Math.*;\nclass A {}")]
#[case::generic_class("public final class Box<T extends Comparable<? super T>> extends Base<T> implements I, J {}")]
#[case::nested_generics("class A { java.util.Map<String, java.util.List<Integer>> m; }")]
#[case::sealed("public sealed interface Shape permits Circle, Square {}")]
#[case::non_sealed("non-sealed class Circle extends Shape {}")]
#[case::annotated_class("@Deprecated @SuppressWarnings({\"a\", \"b\"}) class A {}")]
#[case::record("record Point(int x, int y) implements Comparable<Point> { }")]
#[case::annotation_type("@interface Ann { int value() default 1; String[] names() default {}; }")]
#[case::enum_with_body("enum Op { PLUS(\"+\") { int apply(int a, int b) { return a + b; } }, MINUS(\"-\"); Op(String s) {} }")]
#[case::empty_enum("enum E { ; }")]
#[case::stray_semicolons("class A {};;")]
#[case::text_block("class A { String s = \"\"\"\n  hi \"there\"\n  \"\"\"; }")]
fn test_declarations_parse(#[case] input: &str) {
    assert_parses(input);
}

#[rstest]
#[case::generic_method("public <T> void f(T t) {}", SyntaxKind::METHOD_DEF)]
#[case::generic_ctor("<T> T(T t) {}", SyntaxKind::CTOR_DEF)]
#[case::throws("void f(int a) throws java.io.IOException, RuntimeException {}", SyntaxKind::METHOD_DEF)]
#[case::array_return("int g(int a)[] { return null; }", SyntaxKind::METHOD_DEF)]
#[case::native("native void f(long handle);", SyntaxKind::METHOD_DEF)]
#[case::annotated_generic_return("<T> @Deprecated T f(T t) { return t; }", SyntaxKind::METHOD_DEF)]
#[case::annotated_type_argument("java.util.List<@Deprecated(since = \"1\") String> xs;", SyntaxKind::FIELD_DEF)]
#[case::static_init("static { int x = 1; }", SyntaxKind::STATIC_INIT)]
#[case::instance_init("{ System.out.println(1); }", SyntaxKind::INSTANCE_INIT)]
#[case::field_with_lambda("Runnable r = () -> { };", SyntaxKind::FIELD_DEF)]
#[case::nested_class("static class Inner { Inner(int x) {} }", SyntaxKind::CLASS_DEF)]
fn test_members_parse(#[case] member: &str, #[case] expected: SyntaxKind) {
    let root = assert_parses(&in_class(member));
    assert!(count(&root, expected) >= 1, "no {:?} in {}", expected, member);
}

#[test]
fn test_annotation_members_are_not_methods() {
    let root = assert_parses("@interface Ann { String value(); }");
    assert_eq!(count(&root, SyntaxKind::ANNOTATION_FIELD_DEF), 1);
    assert_eq!(count(&root, SyntaxKind::METHOD_DEF), 0);
}

#[test]
fn test_compact_constructor() {
    let root = assert_parses("record R(int a) { R { if (a < 0) throw new IllegalArgumentException(); } }");
    assert_eq!(count(&root, SyntaxKind::COMPACT_CTOR_DEF), 1);
    assert_eq!(count(&root, SyntaxKind::CTOR_DEF), 0);
}

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_parameter_shape() {
    let root = assert_parses(&in_class("void f(@A final java.util.List<String>[] xs, int... rest) {}"));
    let params: Vec<_> = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::PARAMETER_DEF)
        .collect();
    assert_eq!(params.len(), 2);

    let kinds: Vec<_> = params[0].children().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::MODIFIERS, SyntaxKind::TYPE]);

    let ty = params[0].children().find(|n| n.kind() == SyntaxKind::TYPE).unwrap();
    assert_eq!(
        ty.first_child().map(|n| n.kind()),
        Some(SyntaxKind::ARRAY_DECLARATOR)
    );

    let tokens: Vec<_> = params[1]
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.kind())
        .collect();
    assert_eq!(tokens, vec![SyntaxKind::ELLIPSIS, SyntaxKind::IDENT]);
}

#[rstest]
#[case::c_style_array("void f(int a[]) {}")]
#[case::annotated_varargs("void f(String @NonNull ... args) {}")]
#[case::qualified_annotation("void f(@javax.annotation.Nullable Object o) {}")]
#[case::annotation_with_args("void f(@Named(value = \"x\") String s) {}")]
#[case::wildcards("void f(java.util.List<? extends Number> a, java.util.Map<?, ?> b) {}")]
#[case::annotated_type_argument("void f(java.util.Map<@NonNull String, @Size(max = 3) int[]> m) {}")]
#[case::non_ascii_names("void f(int größe, String 名前, double $δ) {}")]
fn test_parameter_forms_parse(#[case] member: &str) {
    let root = assert_parses(&in_class(member));
    assert!(count(&root, SyntaxKind::PARAMETER_DEF) >= 1);
}

// ============================================================================
// Statements
// ============================================================================

#[rstest]
#[case::try_with_resources("try (var in = open(); var out = create()) { } catch (Exception e) { }", SyntaxKind::RESOURCES)]
#[case::multi_catch("try { } catch (IllegalStateException | IllegalArgumentException e) { }", SyntaxKind::LITERAL_CATCH)]
#[case::finally("try { } finally { }", SyntaxKind::FINALLY_CLAUSE)]
#[case::for_each("for (final String s : list) { }", SyntaxKind::FOR_EACH_CLAUSE)]
#[case::for_each_var("for (var s : list) { }", SyntaxKind::FOR_EACH_CLAUSE)]
#[case::for_each_array_element("for (int[] row : grid) { }", SyntaxKind::FOR_EACH_CLAUSE)]
#[case::for_each_wildcard("for (Class<?> c : types) { }", SyntaxKind::FOR_EACH_CLAUSE)]
#[case::for_each_bounded_wildcard("for (java.util.List<? extends Number> l : lists) { }", SyntaxKind::FOR_EACH_CLAUSE)]
#[case::classic_for("for (int i = 0, j = 1; i < j; i++, j--) { }", SyntaxKind::FOR_HEADER)]
#[case::infinite_for("for (;;) { break; }", SyntaxKind::FOR_HEADER)]
#[case::for_with_ternary("for (int i = a ? 1 : 2; i < 3; i++) { }", SyntaxKind::FOR_HEADER)]
#[case::labeled("outer: while (true) { continue outer; }", SyntaxKind::LABELED_STMT)]
#[case::do_while("do { x++; } while (x < 10);", SyntaxKind::DO_STMT)]
#[case::if_else("if (a) b(); else if (c) { d(); } else e();", SyntaxKind::IF_STMT)]
#[case::synchronized("synchronized (this) { notify(); }", SyntaxKind::SYNCHRONIZED_STMT)]
#[case::switch_arrows("switch (k) { case 1, 2 -> f(); default -> { g(); } }", SyntaxKind::SWITCH_STMT)]
#[case::switch_expression("int v = switch (k) { case 1: yield 2; default: yield 3; };", SyntaxKind::SWITCH_STMT)]
#[case::local_class("class Local { void run(int x) { } }", SyntaxKind::CLASS_DEF)]
#[case::local_record("record Pair(int a, int b) { }", SyntaxKind::RECORD_DEF)]
fn test_statements_parse(#[case] body: &str, #[case] expected: SyntaxKind) {
    let root = assert_parses(&in_class(&format!("void m() {{ {} }}", body)));
    assert!(count(&root, expected) >= 1, "no {:?} in {}", expected, body);
}

#[rstest]
#[case::generic_call("java.util.Collections.<String>emptyList();")]
#[case::method_reference("list.forEach(System.out::println);")]
#[case::cast_and_shift("int x = (int) (y >> 2) >>> 1;")]
#[case::array_initializer("int[][] grid = { {1, 2}, {3} };")]
#[case::new_array("Object o = new int[] {1, 2, 3};")]
#[case::instanceof_pattern("if (o instanceof String s && !s.isEmpty()) { }")]
#[case::char_literals("char c = '\\'', d = '{';")]
#[case::string_with_braces("String s = \"{ ( [\";")]
#[case::comments("/* { */ int x = 1; // }\n")]
fn test_expressions_parse(#[case] body: &str) {
    assert_parses(&in_class(&format!("void m() {{ {} }}", body)));
}

#[test]
fn test_nested_bodies_in_expressions() {
    let root = assert_parses(&in_class(
        "void m() {
            Runnable r = new Runnable() {
                public void run() { for (String s : xs) { } }
            };
            xs.forEach(x -> { try { } catch (Exception e) { } });
            xs.sort(new java.util.Comparator<String>() {
                public int compare(String a, String b) { return 0; }
            });
        }",
    ));
    assert_eq!(count(&root, SyntaxKind::METHOD_DEF), 3);
    assert_eq!(count(&root, SyntaxKind::FOR_EACH_CLAUSE), 1);
    assert_eq!(count(&root, SyntaxKind::LITERAL_CATCH), 1);
}

#[test]
fn test_method_container_shape() {
    let root = assert_parses("interface I { void f(int x); }");
    let method = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::METHOD_DEF)
        .unwrap();
    let container = method.parent().and_then(|p| p.parent()).unwrap();
    assert_eq!(container.kind(), SyntaxKind::INTERFACE_DEF);
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case::unclosed_class("class A {")]
#[case::unclosed_params("class A { void f(int x { } }")]
#[case::missing_name("class A { void f(int) { } }")]
#[case::garbage_member("class A { + }")]
#[case::unclosed_generic("class A { java.util.List<String x; }")]
#[case::bad_character("class A { # }")]
#[case::top_level_statement("int x = 1;")]
fn test_errors_are_reported(#[case] input: &str) {
    let result = parse_java(input);
    assert!(!result.ok(), "expected errors for: {}", input);
    assert_eq!(result.syntax().text().to_string(), input);
    for error in &result.errors {
        assert!(!error.message.is_empty());
    }
}
