use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t]+")] // Cells may be padded with spaces or tabs
pub enum Token {
    // --- Literals ---

    // Unsigned decimals (ex: 42, 3.5, 5., .25, 1e-3)
    // Kept as text so the token stays hashable; the parser converts it.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // --- Operators ---
    #[token("-")]
    Minus,

    #[token("+")]
    Plus,

    #[token("/")]
    Slash, // Fraction bar (3/4)

    // A lone dot, only meaningful in the "-." sentinel
    #[token(".")]
    Dot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Minus => write!(f, "-"),
            Token::Plus => write!(f, "+"),
            Token::Slash => write!(f, "/"),
            Token::Dot => write!(f, "."),
        }
    }
}
