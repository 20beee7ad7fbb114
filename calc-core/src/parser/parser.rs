use crate::{
    eval::prelude::EvalOptions,
    lexer::prelude::{Lexer, Spanned, Token},
    utils::prelude::SrcSpan
};
use super::error::{ParseError, ParseErrorType};

// Headroom left before a nested group switches to a fresh stack segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Recursive-descent evaluator over one token of lookahead.
///
/// Every rule returns `Result<f64, ParseError>`, so the first failure travels
/// straight to [`Parser::parse`] and nothing after it is evaluated.
pub struct Parser<'a> {
    pub current_token: Spanned,

    options: EvalOptions,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_options(lexer, EvalOptions::default())
    }

    pub fn with_options(mut lexer: Lexer<'a>, options: EvalOptions) -> Self {
        let current_token = lexer.next_token();

        Self {
            current_token,
            options,
            lexer,
        }
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Spanned {
        let next = self.lexer.next_token();

        std::mem::replace(&mut self.current_token, next)
    }

    /// `expression := additive END`
    pub fn parse(&mut self) -> Result<f64, ParseError> {
        let value = self.parse_additive()?;

        match self.current_token {
            (_, Token::End, _) => Ok(value),
            (start, token, end) => self.fail(
                ParseErrorType::TrailingCharacters { token },
                SrcSpan { start, end }
            )
        }
    }

    /// `additive := term { ('+' | '-') term }`
    pub fn parse_additive(&mut self) -> Result<f64, ParseError> {
        let mut result = self.parse_term()?;

        loop {
            match self.current_token.1 {
                Token::Plus => {
                    self.step();
                    result += self.parse_term()?;
                },
                Token::Minus => {
                    self.step();
                    result -= self.parse_term()?;
                },
                _ => return Ok(result)
            }
        }
    }

    /// `term := power { ('*' | '/') power }`
    pub fn parse_term(&mut self) -> Result<f64, ParseError> {
        let mut result = self.parse_power()?;

        loop {
            let (start, token, end) = self.current_token;

            match token {
                Token::Star => {
                    self.step();
                    result *= self.parse_power()?;
                },
                Token::Slash => {
                    self.step();
                    let divisor = self.parse_power()?;

                    if self.is_zero(divisor) {
                        return self.fail(ParseErrorType::DivisionByZero, SrcSpan { start, end });
                    }

                    result /= divisor;
                },
                _ => return Ok(result)
            }
        }
    }

    /// `power := primary [ '**' power ]`, right-associative.
    pub fn parse_power(&mut self) -> Result<f64, ParseError> {
        let base = self.parse_primary()?;

        let (start, end) = match self.current_token {
            (start, Token::Pow, end) => (start, end),
            _ => return Ok(base)
        };

        self.step();
        let exponent = self.parse_power()?;

        if base == 0.0 && exponent < 0.0 {
            return self.fail(ParseErrorType::ZeroToNegativePower, SrcSpan { start, end });
        }

        if base < 0.0 && exponent.fract() != 0.0 {
            return self.fail(ParseErrorType::NegativeBaseFractionalExponent, SrcSpan { start, end });
        }

        Ok(base.powf(exponent))
    }

    /// `primary := NUMBER | '(' additive ')'`
    pub fn parse_primary(&mut self) -> Result<f64, ParseError> {
        match self.current_token {
            (_, Token::Number(value), _) => {
                self.step();
                Ok(value)
            },
            (_, Token::LParen, _) => {
                self.step();
                let value = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
                    self.parse_additive()
                })?;
                self.expect_closing_paren()?;

                Ok(value)
            },
            (start, token, end) => self.fail(
                ParseErrorType::ExpectedPrimary { token },
                SrcSpan { start, end }
            )
        }
    }

    pub fn expect_closing_paren(&mut self) -> Result<(), ParseError> {
        match self.current_token {
            (_, Token::RParen, _) => {
                self.step();
                Ok(())
            },
            (start, token, end) => self.fail(
                ParseErrorType::MissingClosingParen { token },
                SrcSpan { start, end }
            )
        }
    }

    fn is_zero(&self, value: f64) -> bool {
        value == 0.0 || value.abs() < self.options.zero_tolerance
    }

    // The lexer reports its error while scanning lookahead, before any
    // later parser error, so a latched lexical error always wins.
    fn fail<T>(&self, error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
        match self.lexer.error() {
            Some(lex_error) => parse_error(
                ParseErrorType::LexError { error: *lex_error },
                lex_error.location
            ),
            None => parse_error(error, span)
        }
    }
}

pub fn parse_expression(src: &str) -> Result<f64, ParseError> {
    parse_bytes(src.as_bytes())
}

/// Same as [`parse_expression`] for raw input that may not be UTF-8.
pub fn parse_bytes(src: &[u8]) -> Result<f64, ParseError> {
    let mut parser = Parser::new(Lexer::new(src));

    parser.parse()
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
