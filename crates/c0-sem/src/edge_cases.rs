//! Edge-case tests for the analyzer: interactions between declarations,
//! scoping and codegen that are easy to get wrong at the seams between
//! `symbol_table`, `types` and `analysis`.

use c0_obj::{ObjectModel, Opcode};

use crate::error::SemaError;
use crate::generate;

fn analyze_ok(source: &str) -> ObjectModel {
    let tokens = c0_lex::Lexer::new(source).all_tokens().unwrap();
    let ast = c0_par::parse(&tokens).unwrap_or_else(|e| panic!("expected {source:?} to parse, got {e:?}"));
    generate(&ast).unwrap_or_else(|e| panic!("expected {source:?} to analyze, got {e:?}"))
}

fn analyze_err(source: &str) -> SemaError {
    let tokens = c0_lex::Lexer::new(source).all_tokens().unwrap();
    let ast = c0_par::parse(&tokens).unwrap_or_else(|e| panic!("expected {source:?} to parse, got {e:?}"));
    generate(&ast).expect_err(&format!("expected {source:?} to fail analysis"))
}

#[test]
fn shadowing_an_outer_variable_in_a_nested_block_is_allowed() {
    analyze_ok("void main() { int x; x = 1; { int x; x = 2; } }");
}

#[test]
fn sibling_blocks_reuse_stack_slots() {
    // Two non-overlapping blocks at the same nesting level each declare one
    // `int` — codegen should allocate the same offset for both rather than
    // growing the frame across both blocks.
    let model = analyze_ok("void main() { { int a; a = 1; } { int b; b = 2; } }");
    let main = model.function("main").unwrap();
    let snew_count = main.instructions.iter().filter(|i| i.opcode == Opcode::Snew).count();
    assert_eq!(snew_count, 2);
}

#[test]
fn recursive_call_compiles() {
    let model = analyze_ok("int fact(int n) { if (n < 2) return 1; return n * fact(n - 1); } int main() { return fact(5); }");
    let fact = model.function("fact").unwrap();
    assert!(fact.instructions.iter().any(|i| i.opcode == Opcode::Call));
}

#[test]
fn calling_a_function_defined_later_fails() {
    // Single-pass: a function only becomes callable once its own definition
    // has been analyzed, so forward calls are rejected.
    let err = analyze_err("void main() { helper(); } void helper() { }");
    assert!(matches!(err, SemaError::FunctionNotDefined { .. }));
}

#[test]
fn const_parameter_cannot_be_assigned_in_the_body() {
    let err = analyze_err("void f(const int n) { n = 1; }");
    assert!(matches!(err, SemaError::AssignToConstant { .. }));
}

#[test]
fn nested_function_call_as_an_argument_compiles() {
    let model = analyze_ok("int inc(int x) { return x + 1; } int main() { return inc(inc(1)); }");
    let main = model.function("main").unwrap();
    let calls = main.instructions.iter().filter(|i| i.opcode == Opcode::Call).count();
    assert_eq!(calls, 2);
}

#[test]
fn print_with_no_arguments_still_emits_a_newline() {
    let model = analyze_ok("void main() { print(); }");
    let main = model.function("main").unwrap();
    assert_eq!(main.instructions, vec![c0_obj::Instruction::nullary(Opcode::Printl)]);
}

#[test]
fn print_separates_multiple_items_with_a_space() {
    let model = analyze_ok(r#"void main() { print("x = ", 1); }"#);
    let main = model.function("main").unwrap();
    let space_pos = main.instructions.iter().position(|i| i.opcode == Opcode::Bipush && i.operands == vec![32]);
    assert!(space_pos.is_some());
}

#[test]
fn scanning_into_a_const_fails() {
    let err = analyze_err("void main() { const int x = 1; scan(x); }");
    assert!(matches!(err, SemaError::AssignToConstant { .. }));
}

#[test]
fn unary_minus_on_a_double_emits_dneg() {
    let model = analyze_ok("void main() { double x; x = -1.5; }");
    let main = model.function("main").unwrap();
    assert!(main.instructions.iter().any(|i| i.opcode == Opcode::Dneg));
}

#[test]
fn unary_minus_on_a_char_promotes_through_int_negation() {
    let model = analyze_ok("void main() { int x; x = -'a'; }");
    let main = model.function("main").unwrap();
    assert!(main.instructions.iter().any(|i| i.opcode == Opcode::Ineg));
}

#[test]
fn relational_condition_on_char_literals_compiles() {
    analyze_ok("void main() { if ('a' < 'b') { } }");
}

#[test]
fn chained_casts_apply_innermost_first() {
    // `(double)(int) 1.9` truncates to `int` before widening back to
    // `double` — two coercions, not a single double-to-double no-op.
    let model = analyze_ok("void main() { double x; x = (double) (int) 1.9; }");
    let main = model.function("main").unwrap();
    assert!(main.instructions.iter().any(|i| i.opcode == Opcode::D2i));
    assert!(main.instructions.iter().any(|i| i.opcode == Opcode::I2d));
}

#[test]
fn bare_function_call_statement_discards_its_return_value() {
    analyze_ok("int one() { return 1; } void main() { one(); }");
}

#[test]
fn global_and_local_variables_of_the_same_name_are_distinct_scopes() {
    let model = analyze_ok("int x; void main() { int x; x = 1; }");
    assert_eq!(model.start_instructions.iter().filter(|i| i.opcode == Opcode::Snew).count(), 1);
    let main = model.function("main").unwrap();
    assert_eq!(main.instructions.iter().filter(|i| i.opcode == Opcode::Snew).count(), 1);
}

#[test]
fn mixed_type_parameter_list_offsets_account_for_double_width() {
    // `a` (int, 1 slot) at offset 0, `b` (double, 2 slots) at offset 1,
    // `c` (int, 1 slot) at offset 3.
    let model = analyze_ok("int f(int a, double b, int c) { return a + c; } void main() { }");
    let f = model.function("f").unwrap();
    let loadas: Vec<_> = f.instructions.iter().filter(|i| i.opcode == Opcode::Loada).collect();
    assert_eq!(loadas[0].operands, vec![0, 0]);
    assert_eq!(loadas[1].operands, vec![0, 3]);
}

#[test]
fn empty_statement_is_a_no_op() {
    analyze_ok("void main() { ; ; ; }");
}

#[test]
fn deeply_nested_if_else_all_backpatch_correctly() {
    analyze_ok(
        "void main() { int x; x = 1; \
         if (x < 1) { x = 2; } else { if (x < 2) { x = 3; } else { x = 4; } } }",
    );
}

#[test]
fn void_function_with_empty_body_compiles_to_a_bare_ret() {
    let model = analyze_ok("void noop() { } void main() { noop(); }");
    let noop = model.function("noop").unwrap();
    assert_eq!(noop.instructions, vec![c0_obj::Instruction::nullary(Opcode::Ret)]);
}
