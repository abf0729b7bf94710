// lexer.rs

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::core::error::SolveError;
use crate::core::token::{Token, TokenKind};

/// Lexer error types with column location.
#[derive(Debug, Clone, PartialEq)]
pub enum LexerError {
    UnexpectedCharacter(char, usize),
    InvalidNumber(String, usize),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LexerError::*;
        match self {
            UnexpectedCharacter(ch, col) => write!(f, "Unexpected character '{}' at column {}", ch, col),
            InvalidNumber(num, col) => write!(f, "Invalid number literal '{}' at column {}", num, col),
        }
    }
}

impl std::error::Error for LexerError {}

impl From<LexerError> for SolveError {
    fn from(err: LexerError) -> Self {
        match err {
            LexerError::UnexpectedCharacter(ch, col) => {
                SolveError::parse_at(&format!("unexpected character '{}'", ch), col)
            }
            LexerError::InvalidNumber(num, col) => {
                SolveError::parse_at(&format!("invalid number literal '{}'", num), col)
            }
        }
    }
}

/// Tokenizer over one already-normalized equation or side.
///
/// Letters are folded to lower case so `X` and `x` name the same variable.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    col: usize,
    consumed_eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, 0)
    }

    /// Start column numbering after `offset` characters, so a right-hand side
    /// lexed on its own still reports columns of the whole equation.
    pub fn with_offset(input: &'a str, offset: usize) -> Self {
        Self { chars: input.chars().peekable(), col: offset, consumed_eof: false }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        if self.consumed_eof {
            return Ok(None);
        }
        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                self.consumed_eof = true;
                return Ok(Some(Token::new(TokenKind::EOF, self.col + 1)));
            }
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.lex_number().map(Some);
        }

        let column = self.advance();
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Equals,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            c if c.is_ascii_alphabetic() => TokenKind::Variable(c.to_ascii_lowercase()),
            other => return Err(LexerError::UnexpectedCharacter(other, column)),
        };
        Ok(Some(Token::new(kind, column)))
    }

    fn advance(&mut self) -> usize {
        self.chars.next();
        self.col += 1;
        self.col
    }

    fn lex_number(&mut self) -> Result<Token, LexerError> {
        let start = self.col + 1;
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if text.matches('.').count() > 1 || text == "." {
            return Err(LexerError::InvalidNumber(text, start));
        }
        text.parse::<f64>()
            .map(|v| Token::new(TokenKind::Number(v), start))
            .map_err(|_| LexerError::InvalidNumber(text, start))
    }
}
