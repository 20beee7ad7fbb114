#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    // [+|-]<digits>[.<digits>][(e|E)[+|-]<digits>], sign only where an operand may start
    Number(f64),

    Plus, // +
    Minus, // -
    Star, // *
    Slash, // /
    Pow, // **

    LParen, // (
    RParen, // )

    End,
    Invalid,
}

impl Token {
    /// Whether a binary operator may follow this token directly.
    pub fn can_end_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::RParen)
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Number(value) => format!("{}", value),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Pow => "**".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::End => "end of input".to_string(),
            Token::Invalid => "invalid character".to_string(),
        }
    }
}
