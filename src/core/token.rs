// src/core/token.rs
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Variable(char),

    // Operators
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Equals, // =

    // Delimiters
    OpenParen,  // (
    CloseParen, // )

    // Special
    EOF,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based column in the normalized equation.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Self { kind, column }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number(_) => "number",
            TokenKind::Variable(_) => "variable",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equals => "=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::EOF => "end of input",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Number(v) => write!(f, "Number({}) @{}", v, self.column),
            TokenKind::Variable(v) => write!(f, "Variable('{}') @{}", v, self.column),
            other => write!(f, "{} @{}", other, self.column),
        }
    }
}
