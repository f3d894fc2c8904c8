//! Expression grammar: `<expression>` down through `<primary-expression>`,
//! plus the identifier/literal/operator leaves and `<function-call>` /
//! `<expression-list>` that the primary production bottoms out in.
//!
//! Precedence is baked into the grammar shape rather than a binding-power
//! table: `<expression>` is additive, `<additive-expression>` loops over
//! `<multiplicative-expression>`, which loops over `<cast-expression>`,
//! which wraps `<unary-expression>`. No Pratt loop is needed because C0 has
//! exactly two precedence levels plus casts and unary sign.

use c0_lex::TokenKind;

use crate::ast::{Ast, NodeKind};
use crate::core::Parser;
use crate::error::{ParseError, ParseResult};

impl<'t> Parser<'t> {
    /// `<expression> ::= <additive-expression>`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::Expression);
        ast.add_child(self.parse_additive_expression()?);
        Ok(ast)
    }

    /// `<additive-expression> ::=
    ///     <multiplicative-expression>{<additive-operator><multiplicative-expression>}`
    fn parse_additive_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::AdditiveExpression);
        ast.add_child(self.parse_multiplicative_expression()?);

        while matches!(
            self.peek_opt().map(|t| t.kind),
            Some(TokenKind::Plus) | Some(TokenKind::Minus)
        ) {
            ast.add_child(self.parse_additive_operator()?);
            ast.add_child(self.parse_multiplicative_expression()?);
        }
        Ok(ast)
    }

    /// `<multiplicative-expression> ::=
    ///     <cast-expression>{<multiplicative-operator><cast-expression>}`
    fn parse_multiplicative_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::MultiplicativeExpression);
        ast.add_child(self.parse_cast_expression()?);

        while matches!(
            self.peek_opt().map(|t| t.kind),
            Some(TokenKind::Star) | Some(TokenKind::Slash)
        ) {
            ast.add_child(self.parse_multiplicative_operator()?);
            ast.add_child(self.parse_cast_expression()?);
        }
        Ok(ast)
    }

    /// `<cast-expression> ::= {'('<type-specifier>')'}<unary-expression>`
    fn parse_cast_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::CastExpression);

        loop {
            match self.peek() {
                Err(_) => return Err(ParseError::InvalidExpression { span: self.prev_span() }),
                Ok(token) if token.kind != TokenKind::LParen => break,
                Ok(_) => {}
            }
            ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
            ast.add_child(self.parse_type_specifier()?);
            ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        }

        ast.add_child(self.parse_unary_expression()?);
        Ok(ast)
    }

    /// `<unary-expression> ::= [<unary-operator>]<primary-expression>`
    fn parse_unary_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::UnaryExpression);

        let token = self
            .peek()
            .map_err(|_| ParseError::InvalidExpression { span: self.prev_span() })?;

        if matches!(token.kind, TokenKind::Plus | TokenKind::Minus) {
            ast.add_child(self.parse_unary_operator()?);
        }
        ast.add_child(self.parse_primary_expression()?);
        Ok(ast)
    }

    /// `<primary-expression> ::=
    ///     '('<expression>')' | <identifier> | <integer-literal>
    ///     | <char-literal> | <floating-literal> | <function-call>`
    fn parse_primary_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::PrimaryExpression);

        let token = self
            .peek()
            .map_err(|_| ParseError::InvalidExpression { span: self.prev_span() })?;

        match token.kind {
            TokenKind::LParen => {
                ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
                ast.add_child(self.parse_expression()?);
                ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
            }
            TokenKind::IntLiteral => ast.add_child(self.parse_integer_literal()?),
            TokenKind::CharLiteral => ast.add_child(self.parse_char_literal()?),
            TokenKind::FloatLiteral => ast.add_child(self.parse_float_literal()?),
            TokenKind::Identifier => {
                self.next()?;
                let next_is_call = matches!(
                    self.peek_opt().map(|t| t.kind),
                    Some(TokenKind::LParen)
                );
                self.unread();
                if next_is_call {
                    ast.add_child(self.parse_function_call()?);
                } else {
                    ast.add_child(self.parse_identifier()?);
                }
            }
            _ => return Err(ParseError::InvalidExpression { span: token.span }),
        }
        Ok(ast)
    }

    /// `<unary-operator> ::= '+' | '-'`
    fn parse_unary_operator(&mut self) -> ParseResult<Ast> {
        self.parse_sign_operator(NodeKind::UnaryOperator)
    }

    /// `<additive-operator> ::= '+' | '-'`
    fn parse_additive_operator(&mut self) -> ParseResult<Ast> {
        self.parse_sign_operator(NodeKind::AdditiveOperator)
    }

    fn parse_sign_operator(&mut self, kind: NodeKind) -> ParseResult<Ast> {
        let mut ast = Ast::new(kind);
        let token = self.next()?;
        if !matches!(token.kind, TokenKind::Plus | TokenKind::Minus) {
            return Err(ParseError::ExpectedSymbol { symbol: "+ or -", span: token.span });
        }
        ast.add_child(Ast::token_leaf(token));
        Ok(ast)
    }

    /// `<multiplicative-operator> ::= '*' | '/'`
    fn parse_multiplicative_operator(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::MultiplicativeOperator);
        let token = self.next()?;
        if !matches!(token.kind, TokenKind::Star | TokenKind::Slash) {
            return Err(ParseError::ExpectedSymbol { symbol: "* or /", span: token.span });
        }
        ast.add_child(Ast::token_leaf(token));
        Ok(ast)
    }

    /// `<relational-operator> ::= '<' | '<=' | '>' | '>=' | '!=' | '=='`
    pub(crate) fn parse_relational_operator(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::RelationalOperator);
        let token = self.next()?;
        if !is_relational(token.kind) {
            return Err(ParseError::ExpectedSymbol {
                symbol: "'<' | '<=' | '>' | '>=' | '!=' | '=='",
                span: token.span,
            });
        }
        ast.add_child(Ast::token_leaf(token));
        Ok(ast)
    }

    pub(crate) fn peek_is_relational(&self) -> bool {
        self.peek_opt().map(|t| is_relational(t.kind)).unwrap_or(false)
    }

    /// `<assignment-operator> ::= '='`
    pub(crate) fn parse_assignment_operator(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::AssignmentOperator);
        ast.add_child(self.assert_token(TokenKind::Assign, "=")?);
        Ok(ast)
    }

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Ast> {
        let token = self
            .next_opt()
            .ok_or(ParseError::ExpectedIdentifier { span: self.prev_span() })?;
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedIdentifier { span: token.span });
        }
        Ok(Ast::leaf(NodeKind::Identifier, token))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> ParseResult<Ast> {
        let token = self.next()?;
        if token.kind != TokenKind::IntLiteral {
            return Err(ParseError::ExpectedInt32 { span: token.span });
        }
        Ok(Ast::leaf(NodeKind::IntegerLiteral, token))
    }

    pub(crate) fn parse_char_literal(&mut self) -> ParseResult<Ast> {
        let token = self.next()?;
        if token.kind != TokenKind::CharLiteral {
            return Err(ParseError::ExpectedCharLiteral { span: token.span });
        }
        Ok(Ast::leaf(NodeKind::CharLiteral, token))
    }

    fn parse_float_literal(&mut self) -> ParseResult<Ast> {
        let token = self.next()?;
        if token.kind != TokenKind::FloatLiteral {
            return Err(ParseError::ExpectedFloatLiteral { span: token.span });
        }
        Ok(Ast::leaf(NodeKind::FloatLiteral, token))
    }

    pub(crate) fn parse_str_literal(&mut self) -> ParseResult<Ast> {
        let token = self.next()?;
        if token.kind != TokenKind::StringLiteral {
            return Err(ParseError::ExpectedStrLiteral { span: token.span });
        }
        Ok(Ast::leaf(NodeKind::StrLiteral, token))
    }

    /// `<function-call> ::= <identifier> '(' [<expression-list>] ')'`
    pub(crate) fn parse_function_call(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::FunctionCall);
        ast.add_child(self.parse_identifier()?);
        ast.add_child(self.assert_token(TokenKind::LParen, "(")?);

        match self.peek() {
            Err(_) => return Err(ParseError::ExpectedSymbol { symbol: ")", span: self.prev_span() }),
            Ok(token) if token.kind != TokenKind::RParen => {
                ast.add_child(self.parse_expression_list()?);
            }
            Ok(_) => {}
        }

        ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        Ok(ast)
    }

    /// `<expression-list> ::= <expression>{','<expression>}`
    fn parse_expression_list(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ExpressionList);
        ast.add_child(self.parse_expression()?);
        while matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Comma)) {
            ast.add_child(self.assert_token(TokenKind::Comma, ",")?);
            ast.add_child(self.parse_expression()?);
        }
        Ok(ast)
    }
}

fn is_relational(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge | TokenKind::EqEq | TokenKind::Ne
    )
}
