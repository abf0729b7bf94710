//! Recursive-descent parser for one side of an equation.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | <implicit> unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | VARIABLE | '(' expr ')'
//! ```
//!
//! Implicit multiplication (`2x`, `3(x+1)`, `(x+1)y`) applies when a factor is
//! followed directly by a variable or an opening parenthesis.

use crate::core::ast::Expr;
use crate::core::error::SolveError;
use crate::core::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct ParserError {
    pub message: String,
    pub column: usize,
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at column {}", self.message, self.column)
    }
}

impl std::error::Error for ParserError {}

impl From<ParserError> for SolveError {
    fn from(err: ParserError) -> Self {
        SolveError::parse_at(&err.message, err.column)
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create new parser instance; ensure trailing EOF token present
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = match tokens.last() {
            Some(t) => !matches!(t.kind, TokenKind::EOF),
            None => true,
        };
        if needs_eof {
            let column = tokens.last().map(|t| t.column + 1).unwrap_or(1);
            tokens.push(Token::new(TokenKind::EOF, column));
        }
        Parser { tokens, pos: 0 }
    }

    /// Parse the whole token stream as a single expression.
    pub fn parse(&mut self) -> Result<Expr, ParserError> {
        if self.is_at_end() {
            return Err(self.err_here("Expected an expression"));
        }
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            let tok = self.peek();
            return Err(self.err_at(&format!("Unexpected '{}'", tok.kind), tok.column));
        }
        Ok(expr)
    }

    /* ── Precedence ───────────────────────────────────────── */
    pub fn parse_expression(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_term()?;
        while self.match_token(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = self.previous().kind.clone();
            let right = self.parse_term()?;
            expr = Expr::new_binary_expr(op, expr, right);
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_unary()?;
        loop {
            if self.match_token(&[TokenKind::Star, TokenKind::Slash]) {
                let op = self.previous().kind.clone();
                let right = self.parse_unary()?;
                expr = Expr::new_binary_expr(op, expr, right);
            } else if self.starts_implicit_factor() {
                let right = self.parse_unary()?;
                expr = Expr::new_binary_expr(TokenKind::Star, expr, right);
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParserError> {
        if self.match_token(&[TokenKind::Minus, TokenKind::Plus]) {
            let op = self.previous().kind.clone();
            let right = self.parse_unary()?;
            return Ok(Expr::new_unary_expr(op, right));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParserError> {
        let tok = self.advance().clone();
        match tok.kind {
            TokenKind::Number(v) => Ok(Expr::Number(v)),
            TokenKind::Variable(name) => Ok(Expr::Variable(name)),
            TokenKind::OpenParen => {
                let expr = self.parse_expression()?;
                self.consume(TokenKind::CloseParen, "Expected ')'")?;
                Ok(expr)
            }
            TokenKind::EOF => Err(self.err_at("Expression ends unexpectedly", tok.column)),
            other => Err(self.err_at(&format!("Unexpected '{}'", other), tok.column)),
        }
    }

    fn starts_implicit_factor(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Variable(_) | TokenKind::OpenParen)
    }

    /* ── Token utils ─────────────────────────────────────── */
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
            self.previous()
        } else {
            self.peek()
        }
    }

    fn previous(&self) -> &Token {
        if self.pos == 0 {
            &self.tokens[0]
        } else {
            &self.tokens[self.pos - 1]
        }
    }

    fn peek(&self) -> &Token {
        // Safe: we ensure there's always an EOF at the end
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && &self.peek().kind == kind
    }

    fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn consume(&mut self, kind: TokenKind, msg: &str) -> Result<&Token, ParserError> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.err_at(msg, self.peek().column))
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::EOF)
    }

    fn err_here(&self, msg: &str) -> ParserError {
        self.err_at(msg, self.peek().column)
    }

    fn err_at(&self, msg: &str, column: usize) -> ParserError {
        ParserError { message: msg.into(), column }
    }
}
