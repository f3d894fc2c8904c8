//! `<type-specifier>`, `<simple-type-specifier>`, and `<const-qualifier>`.

use c0_lex::TokenKind;

use crate::ast::{Ast, NodeKind};
use crate::core::Parser;
use crate::error::{ParseError, ParseResult};

impl<'t> Parser<'t> {
    /// `<const-qualifier> ::= 'const'`
    pub(crate) fn parse_const_qualifier(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ConstQualifier);
        ast.add_child(self.assert_token(TokenKind::KwConst, "const")?);
        Ok(ast)
    }

    /// `<type-specifier> ::= <simple-type-specifier>`
    pub(crate) fn parse_type_specifier(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::TypeSpecifier);
        ast.add_child(self.parse_simple_type_specifier()?);
        Ok(ast)
    }

    /// `<simple-type-specifier> ::= 'void' | 'int' | 'char' | 'double'`
    pub(crate) fn parse_simple_type_specifier(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::SimpleTypeSpecifier);
        let token = self.next()?;
        if !token.kind.is_type_specifier() {
            return Err(ParseError::UnknownVariableType {
                found: token.literal.clone(),
                span: token.span,
            });
        }
        ast.add_child(Ast::token_leaf(token));
        Ok(ast)
    }

    /// Peeks whether the current token begins a type specifier (`void` /
    /// `int` / `char` / `double`), without consuming it.
    pub(crate) fn at_type_specifier(&self) -> bool {
        self.peek_opt().map(|t| t.kind.is_type_specifier()).unwrap_or(false)
    }
}
