//! Statements and blocks.

use super::Precedence;
use crate::{ParseError, Parser};
use monkey_ir::{Block, Stmt, StmtId, StmtKind, TokenKind};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `let name = value;`
    fn parse_let(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(self
            .arena
            .alloc_stmt(Stmt::new(StmtKind::Let { name, value }, span)))
    }

    /// `return value;` or a bare `return;`
    fn parse_return(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let value = match self.cursor.current_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(self.parse_expression(Precedence::Lowest)?),
        };
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Return(value), span)))
    }

    fn parse_expr_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Expr(expr), span)))
    }

    /// `{ stmt* }`. Any failing statement fails the whole block.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.expect(TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_statement()?);
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;

        Ok(Block {
            stmts: self.arena.alloc_stmt_list(stmts),
            span: start.merge(end),
        })
    }
}
