//! Edge-case tests for the parser: input shapes that are easy to get wrong
//! at a production boundary rather than within a single production.

use crate::{NodeKind, Parser};
use c0_lex::Lexer;

fn parse_ok(source: &str) -> crate::Ast {
    let tokens = Lexer::new(source).all_tokens().unwrap();
    crate::parse(&tokens).unwrap_or_else(|e| panic!("expected {source:?} to parse, got {e:?}"))
}

fn parse_err(source: &str) -> crate::ParseError {
    let tokens = Lexer::new(source).all_tokens().unwrap();
    crate::parse(&tokens).expect_err(&format!("expected {source:?} to fail"))
}

#[test]
fn empty_program() {
    let ast = parse_ok("");
    assert_eq!(ast.kind, NodeKind::C0Root);
    assert!(ast.children.is_empty());
}

#[test]
fn trailing_garbage_after_well_formed_program_errors() {
    parse_err("int x; )");
}

#[test]
fn unterminated_function_body_errors() {
    parse_err("int main() { return 0;");
}

#[test]
fn nested_blocks() {
    let ast = parse_ok("void f() { { { x = 1; } } }");
    assert_eq!(ast.children[0].kind, NodeKind::FunctionDefinition);
}

#[test]
fn deeply_nested_parenthesized_expression() {
    parse_ok("int x = ((((1))));");
}

#[test]
fn deeply_nested_casts() {
    parse_ok("double x = (double) (int) (double) 1;");
}

#[test]
fn const_without_initializer_is_a_parser_non_issue() {
    parse_ok("const int x;");
}

#[test]
fn const_with_initializer_is_fine() {
    parse_ok("const int x = 1;");
}

#[test]
fn function_then_variable_then_function() {
    let ast = parse_ok("int f() { return 0; } int g; int h() { return g; }");
    assert_eq!(ast.children.len(), 3);
}

#[test]
fn if_without_else_followed_by_statement_does_not_swallow_it() {
    let ast = parse_ok("void f() { if (x < 1) y = 1; y = 2; }");
    let body = &ast.children[0].children[3]; // compound-statement
    let seq = &body.children[1]; // statement-seq
    assert_eq!(seq.children.len(), 2);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    // Recursive descent naturally binds `else` to the innermost open `if`.
    let ast = parse_ok("void f() { if (a < 1) if (b < 1) x = 1; else x = 2; }");
    let if_outer = &ast.children[0].children[3].children[1].children[0].children[0];
    assert_eq!(if_outer.kind, NodeKind::ConditionStatement);
}

#[test]
fn empty_parameter_clause() {
    parse_ok("int f() { return 0; }");
}

#[test]
fn empty_function_call_args() {
    parse_ok("void f() { g(); }");
}

#[test]
fn for_loop_with_all_clauses_omitted() {
    parse_ok("void f() { for (;;) break; }");
}

#[test]
fn switch_with_only_default() {
    parse_ok("void f() { switch (x) { default: y = 1; } }");
}

#[test]
fn switch_with_no_cases_or_default() {
    parse_ok("void f() { switch (x) { } }");
}

#[test]
fn comma_separated_declarators_with_mixed_initializers() {
    parse_ok("int a, b = 1, c, d = 2;");
}

#[test]
fn missing_closing_paren_in_call_errors() {
    parse_err("void f() { g(1, 2; }");
}

#[test]
fn missing_semicolon_after_declaration_errors() {
    parse_err("int x = 1");
}

#[test]
fn unknown_type_name_errors() {
    parse_err("foo x;");
}

#[test]
fn string_literal_as_printable() {
    parse_ok("void f() { print(\"hello\"); }");
}

#[test]
fn multiple_printables_mixed_kinds() {
    parse_ok("void f() { print(\"x=\", x, \"y=\", y); }");
}
