use std::fmt::Display;

use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedPrimary { token: Token },
    MissingClosingParen { token: Token },
    TrailingCharacters { token: Token },
    DivisionByZero,
    ZeroToNegativePower,
    NegativeBaseFractionalExponent,
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    /// 1-based byte position of the first offending character.
    pub fn position(&self) -> u32 {
        self.span.position()
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedPrimary { token } => {
                ("Expected a number or `(`", vec![format!("Found {}", describe(token))])
            },
            ParseErrorType::MissingClosingParen { token } => {
                ("Expected `)`", vec![format!("Found {}", describe(token))])
            },
            ParseErrorType::TrailingCharacters { token } => {
                ("Extra characters after expression", vec![format!("Found {}", describe(token))])
            },
            ParseErrorType::DivisionByZero => ("Division by zero", vec![]),
            ParseErrorType::ZeroToNegativePower => ("Zero raised to a negative power", vec![]),
            ParseErrorType::NegativeBaseFractionalExponent => {
                ("Negative base raised to a fractional power", vec![])
            },
            ParseErrorType::LexError { error } => error.details()
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.details().0, self.position())
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(_) => "a number".to_string(),
        Token::End => "the end of input".to_string(),
        Token::Invalid => "an invalid character".to_string(),
        _ => format!("`{}`", token.as_literal())
    }
}
