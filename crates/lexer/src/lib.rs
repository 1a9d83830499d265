pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Byte range of a token inside the cell text
pub type Span = Range<usize>;

/// Tokenize a cell and return a Vec of tokens, dropping anything unrecognised
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize a cell keeping byte spans.
///
/// Fails with the span of the first character no token matches.
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Span)>, Span> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| token.map(|t| (t, span.clone())).map_err(|_| span))
        .collect()
}

#[cfg(test)]
mod tests;
