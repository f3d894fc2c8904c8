//! Statement grammar: `<compound-statement>` down through `<printable>`.
//!
//! A statement is dispatched purely off its leading token — C0's grammar
//! never needs more than one token of lookahead to decide which statement
//! production applies, except for the identifier-led case (assignment vs.
//! bare function-call statement), which is resolved the same way
//! `<primary-expression>` resolves it: consume, peek one more, unread.

use c0_lex::TokenKind;

use crate::ast::{Ast, NodeKind};
use crate::core::Parser;
use crate::error::{ParseError, ParseResult};

impl<'t> Parser<'t> {
    /// `<compound-statement> ::= '{' <statement-seq> '}'`
    pub(crate) fn parse_compound_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::CompoundStatement);
        ast.add_child(self.assert_token(TokenKind::LBrace, "{")?);
        ast.add_child(self.parse_statement_seq()?);
        ast.add_child(self.assert_token(TokenKind::RBrace, "}")?);
        Ok(ast)
    }

    /// `<statement-seq> ::= {<statement>}`
    fn parse_statement_seq(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::StatementSeq);
        while !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::RBrace) | None) {
            ast.add_child(self.parse_statement()?);
        }
        Ok(ast)
    }

    fn parse_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::Statement);
        let token = self
            .peek()
            .map_err(|_| ParseError::InvalidStatement { span: self.prev_span() })?;

        match token.kind {
            TokenKind::LBrace => ast.add_child(self.parse_compound_statement()?),
            TokenKind::KwIf => ast.add_child(self.parse_condition_statement()?),
            TokenKind::KwWhile | TokenKind::KwDo | TokenKind::KwFor => {
                ast.add_child(self.parse_loop_statement()?)
            }
            TokenKind::KwReturn | TokenKind::KwBreak | TokenKind::KwContinue => {
                ast.add_child(self.parse_jump_statement()?)
            }
            TokenKind::KwScan => ast.add_child(self.parse_scan_statement()?),
            TokenKind::KwPrint => ast.add_child(self.parse_print_statement()?),
            TokenKind::KwSwitch => ast.add_child(self.parse_labeled_statement()?),
            TokenKind::Semicolon => ast.add_child(self.assert_token(TokenKind::Semicolon, ";")?),
            TokenKind::KwConst => ast.add_child(self.parse_variable_declaration()?),
            kind if kind.is_type_specifier() => ast.add_child(self.parse_variable_declaration()?),
            TokenKind::Identifier => {
                self.next()?;
                let is_call = matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::LParen));
                self.unread();
                if is_call {
                    ast.add_child(self.parse_function_call()?);
                } else {
                    ast.add_child(self.parse_assignment_expression()?);
                }
                ast.add_child(self.expect_semicolon()?);
            }
            _ => return Err(ParseError::InvalidStatement { span: token.span }),
        }
        Ok(ast)
    }

    /// `<assignment-expression> ::= <identifier><assignment-operator><expression>`
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::AssignmentExpression);
        ast.add_child(self.parse_identifier()?);
        ast.add_child(self.parse_assignment_operator()?);
        ast.add_child(self.parse_expression()?);
        Ok(ast)
    }

    /// `<condition-statement> ::=
    ///     'if' '(' <condition> ')' <statement> ['else' <statement>]`
    fn parse_condition_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ConditionStatement);
        ast.add_child(self.assert_token(TokenKind::KwIf, "if")?);
        ast.add_child(
            self.assert_token(TokenKind::LParen, "(")
                .map_err(|_| ParseError::InvalidIfStatement { span: self.current_span() })?,
        );
        ast.add_child(self.parse_condition()?);
        ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        ast.add_child(self.parse_statement()?);

        if matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::KwElse)) {
            ast.add_child(self.assert_token(TokenKind::KwElse, "else")?);
            ast.add_child(self.parse_statement()?);
        }
        Ok(ast)
    }

    /// `<condition> ::= <expression>[<relational-operator><expression>]`
    fn parse_condition(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::Condition);
        ast.add_child(self.parse_expression()?);
        if self.peek_is_relational() {
            ast.add_child(self.parse_relational_operator()?);
            ast.add_child(self.parse_expression()?);
        }
        Ok(ast)
    }

    /// `<labeled-statement> ::=
    ///     'switch' '(' <expression> ')' '{'
    ///         {'case' (<integer-literal>|<char-literal>) ':' <statement-seq>}
    ///         ['default' ':' <statement-seq>]
    ///     '}'`
    fn parse_labeled_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::LabeledStatement);
        ast.add_child(self.assert_token(TokenKind::KwSwitch, "switch")?);
        ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
        ast.add_child(self.parse_expression()?);
        ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        ast.add_child(self.assert_token(TokenKind::LBrace, "{")?);

        while matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::KwCase)) {
            ast.add_child(self.assert_token(TokenKind::KwCase, "case")?);
            let label = self
                .peek()
                .map_err(|_| ParseError::InvalidSwitchStatement { span: self.prev_span() })?;
            match label.kind {
                TokenKind::IntLiteral => ast.add_child(self.parse_integer_literal()?),
                TokenKind::CharLiteral => ast.add_child(self.parse_char_literal()?),
                _ => return Err(ParseError::InvalidSwitchStatement { span: label.span }),
            }
            ast.add_child(self.assert_token(TokenKind::Colon, ":")?);
            ast.add_child(self.parse_statement_seq()?);
        }

        if matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::KwDefault)) {
            ast.add_child(self.assert_token(TokenKind::KwDefault, "default")?);
            ast.add_child(self.assert_token(TokenKind::Colon, ":")?);
            ast.add_child(self.parse_statement_seq()?);
        }

        ast.add_child(self.assert_token(TokenKind::RBrace, "}")?);
        Ok(ast)
    }

    /// `<loop-statement> ::=
    ///     'while' '(' <condition> ')' <statement>
    ///     | 'do' <statement> 'while' '(' <condition> ')' ';'
    ///     | 'for' '(' [<for-init-statement>] ';' [<condition>] ';'
    ///           [<for-update-expression>] ')' <statement>`
    fn parse_loop_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::LoopStatement);
        let token = self.peek()?;

        match token.kind {
            TokenKind::KwWhile => {
                ast.add_child(self.assert_token(TokenKind::KwWhile, "while")?);
                ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
                ast.add_child(self.parse_condition()?);
                ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
                ast.add_child(self.parse_statement()?);
            }
            TokenKind::KwDo => {
                ast.add_child(self.assert_token(TokenKind::KwDo, "do")?);
                ast.add_child(self.parse_statement()?);
                ast.add_child(self.assert_token(TokenKind::KwWhile, "while")?);
                ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
                ast.add_child(self.parse_condition()?);
                ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
                ast.add_child(self.expect_semicolon()?);
            }
            TokenKind::KwFor => {
                ast.add_child(self.assert_token(TokenKind::KwFor, "for")?);
                ast.add_child(self.assert_token(TokenKind::LParen, "(")?);

                if !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Semicolon)) {
                    ast.add_child(self.parse_for_init_statement()?);
                }
                ast.add_child(self.expect_semicolon()?);

                if !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Semicolon)) {
                    ast.add_child(self.parse_condition()?);
                }
                ast.add_child(self.expect_semicolon()?);

                if !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::RParen)) {
                    ast.add_child(self.parse_for_update_expression()?);
                }
                ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
                ast.add_child(self.parse_statement()?);
            }
            _ => return Err(ParseError::InvalidStatement { span: token.span }),
        }
        Ok(ast)
    }

    /// `<for-init-statement> ::= <assignment-expression>{','<assignment-expression>}`
    fn parse_for_init_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ForInitStatement);
        ast.add_child(self.parse_assignment_expression()?);
        while matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Comma)) {
            ast.add_child(self.assert_token(TokenKind::Comma, ",")?);
            ast.add_child(self.parse_assignment_expression()?);
        }
        Ok(ast)
    }

    /// `<for-update-expression> ::=
    ///     (<assignment-expression>|<function-call>)
    ///     {','(<assignment-expression>|<function-call>)}`
    fn parse_for_update_expression(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ForUpdateStatement);
        ast.add_child(self.parse_update_item()?);
        while matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Comma)) {
            ast.add_child(self.assert_token(TokenKind::Comma, ",")?);
            ast.add_child(self.parse_update_item()?);
        }
        Ok(ast)
    }

    fn parse_update_item(&mut self) -> ParseResult<Ast> {
        self.next()?;
        let is_call = matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::LParen));
        self.unread();
        if is_call {
            self.parse_function_call()
        } else {
            self.parse_assignment_expression()
        }
    }

    /// `<jump-statement> ::= 'break' ';' | 'continue' ';' | <return-statement>`
    fn parse_jump_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::JumpStatement);
        let token = self.peek()?;

        match token.kind {
            TokenKind::KwBreak => {
                ast.add_child(self.assert_token(TokenKind::KwBreak, "break")?);
                ast.add_child(self.expect_semicolon()?);
            }
            TokenKind::KwContinue => {
                ast.add_child(self.assert_token(TokenKind::KwContinue, "continue")?);
                ast.add_child(self.expect_semicolon()?);
            }
            TokenKind::KwReturn => ast.add_child(self.parse_return_statement()?),
            _ => return Err(ParseError::InvalidStatement { span: token.span }),
        }
        Ok(ast)
    }

    /// `<return-statement> ::= 'return' [<expression>] ';'`
    fn parse_return_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ReturnStatement);
        ast.add_child(self.assert_token(TokenKind::KwReturn, "return")?);
        if !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Semicolon)) {
            ast.add_child(self.parse_expression()?);
        }
        ast.add_child(self.expect_semicolon()?);
        Ok(ast)
    }

    /// `<scan-statement> ::= 'scan' '(' <identifier> ')' ';'`
    fn parse_scan_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::ScanStatement);
        ast.add_child(self.assert_token(TokenKind::KwScan, "scan")?);
        ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
        ast.add_child(self.parse_identifier()?);
        ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        ast.add_child(self.expect_semicolon()?);
        Ok(ast)
    }

    /// `<print-statement> ::= 'print' '(' [<printable-list>] ')' ';'`
    fn parse_print_statement(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::PrintStatement);
        ast.add_child(self.assert_token(TokenKind::KwPrint, "print")?);
        ast.add_child(self.assert_token(TokenKind::LParen, "(")?);
        if !matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::RParen)) {
            ast.add_child(self.parse_printable_list()?);
        }
        ast.add_child(self.assert_token(TokenKind::RParen, ")")?);
        ast.add_child(self.expect_semicolon()?);
        Ok(ast)
    }

    /// `<printable-list> ::= <printable>{','<printable>}`
    fn parse_printable_list(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::PrintableList);
        ast.add_child(self.parse_printable()?);
        while matches!(self.peek_opt().map(|t| t.kind), Some(TokenKind::Comma)) {
            ast.add_child(self.assert_token(TokenKind::Comma, ",")?);
            ast.add_child(self.parse_printable()?);
        }
        Ok(ast)
    }

    /// `<printable> ::= <expression> | <string-literal>`
    fn parse_printable(&mut self) -> ParseResult<Ast> {
        let mut ast = Ast::new(NodeKind::Printable);
        let token = self
            .peek()
            .map_err(|_| ParseError::InvalidExpression { span: self.prev_span() })?;

        if token.kind == TokenKind::StringLiteral {
            ast.add_child(self.parse_str_literal()?);
        } else {
            ast.add_child(self.parse_expression()?);
        }
        Ok(ast)
    }
}
