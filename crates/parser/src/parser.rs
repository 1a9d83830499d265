use crate::cell::CellValue;
use crate::error::ParseError;
use chumsky::prelude::*;
use chumsky::Stream;
use lexer::token::Token;

/// Grammar for a single cell:
///
/// ```text
/// cell     := fraction | decimal | "-" "." | "-" | <nothing>
/// fraction := decimal "/" decimal
/// decimal  := ("-" | "+")? NUMBER
/// ```
pub fn parser() -> impl Parser<Token, CellValue, Error = Simple<Token>> {
    let sign = just(Token::Minus)
        .to(-1.0)
        .or(just(Token::Plus).to(1.0))
        .or_not()
        .map(|sign: Option<f64>| sign.unwrap_or(1.0));

    let unsigned = select! { Token::Number(text) => text }.try_map(|text: String, span| {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(Simple::custom(span, format!("'{}' is out of range", text))),
            Err(_) => Err(Simple::custom(span, format!("'{}' is not a decimal number", text))),
        }
    });

    let decimal = sign
        .then(unsigned)
        .map(|(sign, value): (f64, f64)| sign * value);

    let fraction = decimal
        .clone()
        .then_ignore(just(Token::Slash))
        .then(decimal.clone())
        .map(|(numerator, denominator)| CellValue::Fraction(numerator, denominator));

    // Half-typed negatives
    let sentinel = just(Token::Minus)
        .ignore_then(just(Token::Dot).or_not())
        .map(|dot| match dot {
            Some(_) => CellValue::NegativeDot,
            None => CellValue::Negative,
        });

    fraction
        .or(decimal.map(CellValue::Number))
        .or(sentinel)
        .or(empty().to(CellValue::Empty))
        .then_ignore(end())
}

/// Lex and parse one cell. Error spans are byte offsets into `text`.
pub fn parse_cell(text: &str) -> Result<CellValue, Vec<ParseError>> {
    let tokens = lexer::lex_spanned(text)
        .map_err(|span| vec![Simple::custom(span, "unexpected character")])?;

    let eoi = text.len()..text.len() + 1;
    parser().parse(Stream::from_iter(eoi, tokens.into_iter()))
}
