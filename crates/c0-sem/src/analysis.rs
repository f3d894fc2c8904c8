//! The analyzer: a single pass over the AST that both type-checks and emits
//! p-code into an [`ObjectModel`] as it goes. There is no separate codegen
//! pass — by the time a node's type is known, the instructions for it have
//! already been appended to the current stream.
//!
//! Only a subset of what the parser accepts is actually analyzed: `switch`,
//! `do`/`while`, `for`, `break` and `continue` parse without error but are
//! rejected here with [`SemaError::NotSupportedFeature`]. Everything else —
//! declarations, `if`/`else`, `while`, `return`, `scan`, `print`, assignment,
//! calls — is fully implemented.

use c0_lex::{TokenKind, TokenValue};
use c0_obj::{Constant, ObjectModel, Opcode, PrimitiveType};
use c0_par::{Ast, NodeKind};
use c0_util::{Span, Symbol};

use crate::error::{SemaError, SemaResult};
use crate::symbol_table::SymbolTable;
use crate::types;

/// Walks a parsed C0 program and emits its p-code object model. Fails fast:
/// the first semantic error aborts analysis.
pub fn generate(ast: &Ast) -> SemaResult<ObjectModel> {
    let mut analyzer = Analyzer::new();
    for item in &ast.children {
        analyzer.visit_item(item)?;
    }
    if !analyzer.object.has_function("main") {
        return Err(SemaError::MissingMain);
    }
    Ok(analyzer.object)
}

struct Analyzer {
    object: ObjectModel,
    symtab: SymbolTable,
    current_return_type: Option<PrimitiveType>,
    current_function_name: String,
}

impl Analyzer {
    fn new() -> Self {
        Self {
            object: ObjectModel::new(),
            symtab: SymbolTable::new(),
            current_return_type: None,
            current_function_name: String::new(),
        }
    }

    fn visit_item(&mut self, node: &Ast) -> SemaResult<()> {
        match node.kind {
            NodeKind::VariableDeclaration => self.visit_variable_declaration(node),
            NodeKind::FunctionDefinition => self.visit_function_definition(node),
            other => unreachable!("C0-root child {other:?} is neither a declaration nor a definition"),
        }
    }

    fn resolve_type(&self, type_specifier: &Ast) -> SemaResult<PrimitiveType> {
        let token = type_specifier.children[0].children[0].token.as_ref().unwrap();
        types::from_type_specifier(&token.literal).ok_or_else(|| SemaError::UnknownVariableType {
            found: token.literal.clone(),
            span: type_specifier.span(),
        })
    }

    fn emit_coercion(&mut self, from: PrimitiveType, to: PrimitiveType) {
        for instr in types::coerce(from, to) {
            self.object.emit(instr.opcode, instr.operands);
        }
    }

    /// Promotes a binary operator's two already-evaluated operands to a
    /// common type. The left operand's widening (if any) is inserted
    /// retroactively at `left_insertion_point` — the index its own code
    /// ended and the right operand's code began, since its type wasn't
    /// known until the right operand was evaluated.
    fn apply_binary_promotion(
        &mut self,
        left: PrimitiveType,
        right: PrimitiveType,
        left_insertion_point: usize,
        span: Span,
    ) -> SemaResult<PrimitiveType> {
        let result = types::promote(left, right, span)?;
        if left != result {
            let mut pos = left_insertion_point;
            for instr in types::coerce(left, result) {
                self.object.insert_at(pos, instr.opcode, instr.operands);
                pos += 1;
            }
        }
        if right != result {
            self.emit_coercion(right, result);
        }
        Ok(result)
    }

    // ---- declarations -----------------------------------------------

    fn visit_variable_declaration(&mut self, node: &Ast) -> SemaResult<()> {
        let is_const = node.children[0].kind == NodeKind::ConstQualifier;
        let type_specifier = &node.children[if is_const { 1 } else { 0 }];
        let decl_list = &node.children[if is_const { 2 } else { 1 }];

        let ty = self.resolve_type(type_specifier)?;
        for declarator in decl_list.children.iter().filter(|c| c.kind == NodeKind::InitDeclarator) {
            self.visit_init_declarator(declarator, ty, is_const)?;
        }
        Ok(())
    }

    fn visit_init_declarator(&mut self, node: &Ast, ty: PrimitiveType, is_const: bool) -> SemaResult<()> {
        let ident = &node.children[0];
        let name = ident.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);

        if ty == PrimitiveType::Void {
            return Err(SemaError::VoidVariableException { name, span: ident.span() });
        }
        if self.symtab.contains_in_current_scope(symbol) {
            return Err(SemaError::DuplicateSymbol { name, span: ident.span() });
        }

        self.symtab.add(symbol, ty, is_const);
        self.object.emit(Opcode::Snew, vec![ty.slots() as i64]);

        let has_init = node.children.len() == 3;
        if is_const && !has_init {
            return Err(SemaError::ConstantNotInitialized { name, span: ident.span() });
        }

        if has_init {
            let (level_diff, offset) = self.symtab.offset(symbol)?;
            self.object.emit(Opcode::Loada, vec![level_diff as i64, offset as i64]);
            let initializer = &node.children[2];
            let expr_ty = self.visit_expression(&initializer.children[0])?;
            if expr_ty == PrimitiveType::Void {
                return Err(SemaError::VoidTypeCalculationNotSupported { span: initializer.span() });
            }
            self.emit_coercion(expr_ty, ty);
            let store_op = if ty == PrimitiveType::Double { Opcode::Dstore } else { Opcode::Istore };
            self.object.emit(store_op, vec![]);
        }
        Ok(())
    }

    fn visit_function_definition(&mut self, node: &Ast) -> SemaResult<()> {
        let type_specifier = &node.children[0];
        let ident = &node.children[1];
        let param_clause = &node.children[2];
        let body = &node.children[3];

        let return_ty = self.resolve_type(type_specifier)?;
        let name = ident.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);

        if self.object.has_function(&name) {
            return Err(SemaError::FunctionRedefinitionException { name, span: ident.span() });
        }

        let params = collect_param_declarations(param_clause);
        let mut param_types = Vec::with_capacity(params.len());
        for p in &params {
            let p_ty_specifier = find_child(p, NodeKind::TypeSpecifier).unwrap();
            param_types.push(self.resolve_type(p_ty_specifier)?);
        }

        let name_idx = self.object.add_constant(Constant::Str(name.clone()));
        self.object
            .add_function(return_ty, name.clone(), name_idx, param_types)
            .expect("redefinition already checked above");

        self.symtab.add_function(symbol, return_ty);
        self.symtab.enter_scope(true);

        for p in &params {
            if let Err(err) = self.declare_parameter(p) {
                self.symtab.exit_scope();
                return Err(err);
            }
        }

        let saved_return_type = self.current_return_type.replace(return_ty);
        let saved_name = std::mem::replace(&mut self.current_function_name, name.clone());

        let body_result = self.visit_function_body(body);

        self.current_return_type = saved_return_type;
        self.current_function_name = saved_name;
        self.symtab.exit_scope();

        let returns = body_result?;
        if return_ty != PrimitiveType::Void && !returns {
            return Err(SemaError::NoReturnValueForNotVoidFunction { name, span: node.span() });
        }

        match return_ty {
            PrimitiveType::Void => {
                self.object.emit(Opcode::Ret, vec![]);
            }
            PrimitiveType::Double => {
                self.object.emit(Opcode::Ipush, vec![0]);
                self.object.emit(Opcode::I2d, vec![]);
                self.object.emit(Opcode::Dret, vec![]);
            }
            _ => {
                self.object.emit(Opcode::Ipush, vec![0]);
                self.object.emit(Opcode::Iret, vec![]);
            }
        }
        Ok(())
    }

    fn declare_parameter(&mut self, p: &Ast) -> SemaResult<()> {
        let is_const = p.children.iter().any(|c| c.kind == NodeKind::ConstQualifier);
        let p_ty_specifier = find_child(p, NodeKind::TypeSpecifier).unwrap();
        let p_ty = self.resolve_type(p_ty_specifier)?;
        let p_ident = p.children.last().unwrap();
        let p_name = p_ident.token.as_ref().unwrap().literal.clone();
        let p_symbol = Symbol::intern(&p_name);

        if p_ty == PrimitiveType::Void {
            return Err(SemaError::VoidVariableException { name: p_name, span: p_ident.span() });
        }
        if self.symtab.contains_in_current_scope(p_symbol) {
            return Err(SemaError::DuplicateSymbol { name: p_name, span: p_ident.span() });
        }
        self.symtab.add(p_symbol, p_ty, is_const);
        Ok(())
    }

    // ---- statements ---------------------------------------------------

    /// The function body shares the frame scope `enter_scope(true)` already
    /// pushed at the call site — unlike an ordinary nested block, it does
    /// not get a further scope of its own.
    fn visit_function_body(&mut self, node: &Ast) -> SemaResult<bool> {
        self.visit_statement_seq(&node.children[1])
    }

    fn visit_compound_statement(&mut self, node: &Ast) -> SemaResult<bool> {
        self.symtab.enter_scope(false);
        let result = self.visit_statement_seq(&node.children[1]);
        self.symtab.exit_scope();
        result
    }

    fn visit_statement_seq(&mut self, seq: &Ast) -> SemaResult<bool> {
        let mut returns = false;
        for stmt in &seq.children {
            if self.visit_statement(stmt)? {
                returns = true;
            }
        }
        Ok(returns)
    }

    /// Returns whether this statement is guaranteed to return on every path
    /// through it — the only thing missing-return detection needs.
    fn visit_statement(&mut self, node: &Ast) -> SemaResult<bool> {
        let inner = &node.children[0];
        match inner.kind {
            NodeKind::CompoundStatement => self.visit_compound_statement(inner),
            NodeKind::ConditionStatement => self.visit_condition_statement(inner),
            NodeKind::LoopStatement => {
                self.visit_loop_statement(inner)?;
                Ok(false)
            }
            NodeKind::JumpStatement => self.visit_jump_statement(inner),
            NodeKind::ScanStatement => {
                self.visit_scan_statement(inner)?;
                Ok(false)
            }
            NodeKind::PrintStatement => {
                self.visit_print_statement(inner)?;
                Ok(false)
            }
            NodeKind::LabeledStatement => Err(SemaError::NotSupportedFeature {
                feature: "switch".to_string(),
                span: inner.span(),
            }),
            NodeKind::Token => Ok(false),
            NodeKind::VariableDeclaration => {
                self.visit_variable_declaration(inner)?;
                Ok(false)
            }
            NodeKind::FunctionCall => {
                self.visit_function_call(inner)?;
                Ok(false)
            }
            NodeKind::AssignmentExpression => {
                self.visit_assignment_expression(inner)?;
                Ok(false)
            }
            other => unreachable!("unexpected statement child {other:?}"),
        }
    }

    fn visit_condition_statement(&mut self, node: &Ast) -> SemaResult<bool> {
        let false_op = self.visit_condition(&node.children[2])?;
        let j_idx = self.object.emit(false_op, vec![0]);
        let then_returns = self.visit_statement(&node.children[4])?;

        if node.children.len() > 5 {
            let jmp_idx = self.object.emit(Opcode::Jmp, vec![0]);
            let else_start = self.object.next_inst_idx() as i64;
            let else_returns = self.visit_statement(&node.children[6])?;
            let after_else = self.object.next_inst_idx() as i64;
            self.backpatch(j_idx, else_start);
            self.backpatch(jmp_idx, after_else);
            Ok(then_returns && else_returns)
        } else {
            let after_then = self.object.next_inst_idx() as i64;
            self.backpatch(j_idx, after_then);
            Ok(false)
        }
    }

    /// `<condition>`: bare expression (falsy check) or a relational compare.
    /// Returns the opcode that jumps when the condition is *false*.
    fn visit_condition(&mut self, node: &Ast) -> SemaResult<Opcode> {
        if node.children.len() == 1 {
            let ty = self.visit_expression(&node.children[0])?;
            if ty == PrimitiveType::Void {
                return Err(SemaError::VoidTypeCalculationNotSupported { span: node.span() });
            }
            if ty == PrimitiveType::Double {
                self.object.emit(Opcode::D2i, vec![]);
            }
            Ok(Opcode::Je)
        } else {
            let left_ty = self.visit_expression(&node.children[0])?;
            let insertion_point = self.object.next_inst_idx();
            let right_ty = self.visit_expression(&node.children[2])?;
            let result_ty = self.apply_binary_promotion(left_ty, right_ty, insertion_point, node.span())?;
            let cmp_op = if result_ty == PrimitiveType::Double { Opcode::Dcmp } else { Opcode::Icmp };
            self.object.emit(cmp_op, vec![]);

            let rel_token = node.children[1].children[0].token.as_ref().unwrap();
            Ok(match rel_token.kind {
                TokenKind::EqEq => Opcode::Jne,
                TokenKind::Ne => Opcode::Je,
                TokenKind::Lt => Opcode::Jge,
                TokenKind::Gt => Opcode::Jle,
                TokenKind::Le => Opcode::Jg,
                TokenKind::Ge => Opcode::Jl,
                other => unreachable!("{other:?} is not a relational operator"),
            })
        }
    }

    fn visit_loop_statement(&mut self, node: &Ast) -> SemaResult<()> {
        let keyword = node.children[0].token.as_ref().unwrap().kind;
        match keyword {
            TokenKind::KwWhile => self.visit_while_loop(node),
            TokenKind::KwDo => Err(SemaError::NotSupportedFeature {
                feature: "do-while".to_string(),
                span: node.span(),
            }),
            TokenKind::KwFor => Err(SemaError::NotSupportedFeature {
                feature: "for".to_string(),
                span: node.span(),
            }),
            other => unreachable!("{other:?} does not start a loop-statement"),
        }
    }

    fn visit_while_loop(&mut self, node: &Ast) -> SemaResult<()> {
        let cond_idx = self.object.next_inst_idx() as i64;
        let false_op = self.visit_condition(&node.children[2])?;
        let j_idx = self.object.emit(false_op, vec![0]);
        self.visit_statement(&node.children[4])?;
        self.object.emit(Opcode::Jmp, vec![cond_idx]);
        let after = self.object.next_inst_idx() as i64;
        self.backpatch(j_idx, after);
        Ok(())
    }

    fn backpatch(&mut self, index: usize, target: i64) {
        self.object
            .update_instruction_at(index, vec![target])
            .expect("jump index was returned by emit on the same stream");
    }

    fn visit_jump_statement(&mut self, node: &Ast) -> SemaResult<bool> {
        let first = &node.children[0];
        if first.kind == NodeKind::ReturnStatement {
            self.visit_return_statement(first)
        } else {
            let token = first.token.as_ref().unwrap();
            let feature = if token.kind == TokenKind::KwBreak { "break" } else { "continue" };
            Err(SemaError::NotSupportedFeature {
                feature: feature.to_string(),
                span: node.span(),
            })
        }
    }

    fn visit_return_statement(&mut self, node: &Ast) -> SemaResult<bool> {
        let has_expr = node.children.len() == 3;
        let return_ty = self.current_return_type.expect("return only occurs inside a function body");
        let fn_name = self.current_function_name.clone();

        if has_expr {
            if return_ty == PrimitiveType::Void {
                return Err(SemaError::ReturnValueForVoidFunction { name: fn_name, span: node.span() });
            }
            let expr_ty = self.visit_expression(&node.children[1])?;
            if expr_ty == PrimitiveType::Void {
                return Err(SemaError::VoidTypeCalculationNotSupported { span: node.children[1].span() });
            }
            self.emit_coercion(expr_ty, return_ty);
            let ret_op = if return_ty == PrimitiveType::Double { Opcode::Dret } else { Opcode::Iret };
            self.object.emit(ret_op, vec![]);
        } else if return_ty == PrimitiveType::Void {
            self.object.emit(Opcode::Ret, vec![]);
        } else {
            return Err(SemaError::NoReturnValueForNotVoidFunction { name: fn_name, span: node.span() });
        }
        Ok(true)
    }

    fn visit_scan_statement(&mut self, node: &Ast) -> SemaResult<()> {
        let ident = &node.children[2];
        let name = ident.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);

        if !self.symtab.contains(symbol) {
            return Err(SemaError::UndefinedSymbol { name, span: ident.span() });
        }
        if self.symtab.is_const(symbol)? {
            return Err(SemaError::AssignToConstant { name, span: ident.span() });
        }
        let ty = self.symtab.type_of(symbol)?;
        let (level_diff, offset) = self.symtab.offset(symbol)?;
        self.object.emit(Opcode::Loada, vec![level_diff as i64, offset as i64]);

        let scan_op = match ty {
            PrimitiveType::Int => Opcode::Iscan,
            PrimitiveType::Double => Opcode::Dscan,
            PrimitiveType::Char => Opcode::Cscan,
            PrimitiveType::Void => unreachable!("variables cannot have type void"),
        };
        self.object.emit(scan_op, vec![]);
        let store_op = if ty == PrimitiveType::Double { Opcode::Dstore } else { Opcode::Istore };
        self.object.emit(store_op, vec![]);
        Ok(())
    }

    fn visit_print_statement(&mut self, node: &Ast) -> SemaResult<()> {
        if let Some(list) = node.children.iter().find(|c| c.kind == NodeKind::PrintableList) {
            let printables: Vec<&Ast> = list.children.iter().filter(|c| c.kind == NodeKind::Printable).collect();
            for (i, printable) in printables.iter().enumerate() {
                if i > 0 {
                    self.object.emit(Opcode::Bipush, vec![32]);
                    self.object.emit(Opcode::Cprint, vec![]);
                }
                self.visit_printable(printable)?;
            }
        }
        self.object.emit(Opcode::Printl, vec![]);
        Ok(())
    }

    fn visit_printable(&mut self, node: &Ast) -> SemaResult<()> {
        let child = &node.children[0];
        if child.kind == NodeKind::StrLiteral {
            let bytes = literal_str(child);
            let text = String::from_utf8_lossy(&bytes).into_owned();
            let idx = self.object.add_constant(Constant::Str(text));
            self.object.emit(Opcode::Loadc, vec![idx as i64]);
            self.object.emit(Opcode::Sprint, vec![]);
        } else {
            let ty = self.visit_expression(child)?;
            let op = match ty {
                PrimitiveType::Int => Opcode::Iprint,
                PrimitiveType::Char => Opcode::Cprint,
                PrimitiveType::Double => Opcode::Dprint,
                PrimitiveType::Void => return Err(SemaError::VoidTypeCalculationNotSupported { span: node.span() }),
            };
            self.object.emit(op, vec![]);
        }
        Ok(())
    }

    fn visit_assignment_expression(&mut self, node: &Ast) -> SemaResult<()> {
        let ident = &node.children[0];
        let name = ident.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);

        if !self.symtab.contains(symbol) {
            return Err(SemaError::UndefinedSymbol { name, span: ident.span() });
        }
        if self.symtab.is_const(symbol)? {
            return Err(SemaError::AssignToConstant { name, span: ident.span() });
        }
        let ty = self.symtab.type_of(symbol)?;
        let (level_diff, offset) = self.symtab.offset(symbol)?;
        self.object.emit(Opcode::Loada, vec![level_diff as i64, offset as i64]);

        let expr_ty = self.visit_expression(&node.children[2])?;
        if expr_ty == PrimitiveType::Void {
            return Err(SemaError::VoidTypeCalculationNotSupported { span: node.children[2].span() });
        }
        self.emit_coercion(expr_ty, ty);
        let store_op = if ty == PrimitiveType::Double { Opcode::Dstore } else { Opcode::Istore };
        self.object.emit(store_op, vec![]);
        Ok(())
    }

    // ---- expressions ----------------------------------------------------

    fn visit_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        self.visit_additive_expression(&node.children[0])
    }

    fn visit_additive_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let mut result_ty = self.visit_multiplicative_expression(&node.children[0])?;
        let mut i = 1;
        while i < node.children.len() {
            let op_node = &node.children[i];
            let is_plus = op_node.children[0].token.as_ref().unwrap().kind == TokenKind::Plus;

            let insertion_point = self.object.next_inst_idx();
            let right_ty = self.visit_multiplicative_expression(&node.children[i + 1])?;
            result_ty = self.apply_binary_promotion(result_ty, right_ty, insertion_point, op_node.span())?;

            let opcode = match (is_plus, result_ty) {
                (true, PrimitiveType::Double) => Opcode::Dadd,
                (true, _) => Opcode::Iadd,
                (false, PrimitiveType::Double) => Opcode::Dsub,
                (false, _) => Opcode::Isub,
            };
            self.object.emit(opcode, vec![]);
            i += 2;
        }
        Ok(result_ty)
    }

    fn visit_multiplicative_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let mut result_ty = self.visit_cast_expression(&node.children[0])?;
        let mut i = 1;
        while i < node.children.len() {
            let op_node = &node.children[i];
            let is_star = op_node.children[0].token.as_ref().unwrap().kind == TokenKind::Star;

            let insertion_point = self.object.next_inst_idx();
            let right_ty = self.visit_cast_expression(&node.children[i + 1])?;
            result_ty = self.apply_binary_promotion(result_ty, right_ty, insertion_point, op_node.span())?;

            let opcode = match (is_star, result_ty) {
                (true, PrimitiveType::Double) => Opcode::Dmul,
                (true, _) => Opcode::Imul,
                (false, PrimitiveType::Double) => Opcode::Ddiv,
                (false, _) => Opcode::Idiv,
            };
            self.object.emit(opcode, vec![]);
            i += 2;
        }
        Ok(result_ty)
    }

    /// Applies `(T1)(T2)...(Tn) unary` in innermost-first order: `Tn` is
    /// applied to the unary expression's value first, then `Tn-1`, and so
    /// on, even though `T1` is the leftmost (outermost) in source order.
    fn visit_cast_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let unary = node.children.last().unwrap();
        let mut ty = self.visit_unary_expression(unary)?;

        let type_specifiers: Vec<&Ast> =
            node.children.iter().filter(|c| c.kind == NodeKind::TypeSpecifier).collect();
        for ts in type_specifiers.iter().rev() {
            let target = self.resolve_type(ts)?;
            if ty == PrimitiveType::Void || target == PrimitiveType::Void {
                return Err(SemaError::VoidTypeCalculationNotSupported { span: ts.span() });
            }
            self.emit_coercion(ty, target);
            ty = target;
        }
        Ok(ty)
    }

    fn visit_unary_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let has_unary_op = node.children[0].kind == NodeKind::UnaryOperator;
        let primary = if has_unary_op { &node.children[1] } else { &node.children[0] };
        let ty = self.visit_primary_expression(primary)?;

        if has_unary_op {
            let op_token = node.children[0].children[0].token.as_ref().unwrap();
            if op_token.kind == TokenKind::Minus {
                if ty == PrimitiveType::Void {
                    return Err(SemaError::VoidTypeCalculationNotSupported { span: node.span() });
                }
                let neg_op = if ty == PrimitiveType::Double { Opcode::Dneg } else { Opcode::Ineg };
                self.object.emit(neg_op, vec![]);
            }
        }
        Ok(ty)
    }

    fn visit_primary_expression(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let first = &node.children[0];
        match first.kind {
            NodeKind::Token => self.visit_expression(&node.children[1]),
            NodeKind::IntegerLiteral => {
                self.object.emit(Opcode::Ipush, vec![literal_int(first) as i64]);
                Ok(PrimitiveType::Int)
            }
            NodeKind::CharLiteral => {
                self.object.emit(Opcode::Bipush, vec![literal_char(first) as i64]);
                Ok(PrimitiveType::Char)
            }
            NodeKind::FloatLiteral => {
                let idx = self.object.add_constant(Constant::Double(literal_float(first)));
                self.object.emit(Opcode::Loadc, vec![idx as i64]);
                Ok(PrimitiveType::Double)
            }
            NodeKind::Identifier => self.visit_identifier_reference(first),
            NodeKind::FunctionCall => self.visit_function_call(first),
            other => unreachable!("unexpected primary-expression child {other:?}"),
        }
    }

    fn visit_identifier_reference(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let name = node.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);
        if !self.symtab.contains(symbol) {
            return Err(SemaError::UndefinedSymbol { name, span: node.span() });
        }
        let ty = self.symtab.type_of(symbol)?;
        let (level_diff, offset) = self.symtab.offset(symbol)?;
        self.object.emit(Opcode::Loada, vec![level_diff as i64, offset as i64]);
        let load_op = if ty == PrimitiveType::Double { Opcode::Dload } else { Opcode::Iload };
        self.object.emit(load_op, vec![]);
        Ok(ty)
    }

    fn visit_function_call(&mut self, node: &Ast) -> SemaResult<PrimitiveType> {
        let ident = &node.children[0];
        let name = ident.token.as_ref().unwrap().literal.clone();
        let symbol = Symbol::intern(&name);

        if self.symtab.contains(symbol) && !self.symtab.is_function(symbol)? {
            return Err(SemaError::NotCallingFunction { name, span: ident.span() });
        }
        let func_idx = self
            .object
            .function_index(&name)
            .ok_or_else(|| SemaError::FunctionNotDefined { name: name.clone(), span: ident.span() })?;

        let arg_exprs: Vec<&Ast> = node
            .children
            .iter()
            .find(|c| c.kind == NodeKind::ExpressionList)
            .map(|list| list.children.iter().filter(|c| c.kind == NodeKind::Expression).collect())
            .unwrap_or_default();

        let (param_types, return_type) = {
            let info = &self.object.functions[func_idx];
            (info.param_types.clone(), info.return_type)
        };

        if arg_exprs.len() != param_types.len() {
            return Err(SemaError::ArgumentsNumberNotMatchException {
                name,
                expected: param_types.len(),
                found: arg_exprs.len(),
                span: node.span(),
            });
        }

        for (expr, expected_ty) in arg_exprs.iter().zip(param_types.iter()) {
            let arg_ty = self.visit_expression(expr)?;
            if arg_ty == PrimitiveType::Void {
                return Err(SemaError::VoidTypeCalculationNotSupported { span: expr.span() });
            }
            self.emit_coercion(arg_ty, *expected_ty);
        }

        self.object.emit(Opcode::Call, vec![func_idx as i64]);
        Ok(return_type)
    }
}

fn find_child<'a>(node: &'a Ast, kind: NodeKind) -> Option<&'a Ast> {
    node.children.iter().find(|c| c.kind == kind)
}

fn collect_param_declarations(clause: &Ast) -> Vec<&Ast> {
    clause
        .children
        .iter()
        .find(|c| c.kind == NodeKind::ParameterDeclarationList)
        .map(|list| list.children.iter().filter(|c| c.kind == NodeKind::ParameterDeclaration).collect())
        .unwrap_or_default()
}

fn literal_int(node: &Ast) -> i32 {
    match node.token.as_ref().unwrap().value {
        TokenValue::Int(v) => v,
        _ => unreachable!("IntegerLiteral node without an Int token value"),
    }
}

fn literal_char(node: &Ast) -> u8 {
    match node.token.as_ref().unwrap().value {
        TokenValue::Char(v) => v,
        _ => unreachable!("CharLiteral node without a Char token value"),
    }
}

fn literal_float(node: &Ast) -> f64 {
    match node.token.as_ref().unwrap().value {
        TokenValue::Float(v) => v,
        _ => unreachable!("FloatLiteral node without a Float token value"),
    }
}

fn literal_str(node: &Ast) -> Vec<u8> {
    match &node.token.as_ref().unwrap().value {
        TokenValue::Str(bytes) => bytes.clone(),
        _ => unreachable!("StrLiteral node without a Str token value"),
    }
}
