// Symbol Token Tests
//
// Signs, fraction bar and the bare dot.

use crate::lex;
use crate::token::Token;

#[test]
fn test_minus() {
    assert_eq!(lex("-"), vec![Token::Minus]);
}

#[test]
fn test_plus() {
    assert_eq!(lex("+"), vec![Token::Plus]);
}

#[test]
fn test_slash() {
    assert_eq!(lex("/"), vec![Token::Slash]);
}

#[test]
fn test_dot() {
    assert_eq!(lex("."), vec![Token::Dot]);
}

#[test]
fn test_negative_dot_sentinel_is_two_tokens() {
    assert_eq!(lex("-."), vec![Token::Minus, Token::Dot]);
}

#[test]
fn test_negative_number() {
    assert_eq!(
        lex("-3.5"),
        vec![Token::Minus, Token::Number("3.5".to_string())]
    );
}

#[test]
fn test_fraction() {
    assert_eq!(
        lex("3/4"),
        vec![
            Token::Number("3".to_string()),
            Token::Slash,
            Token::Number("4".to_string())
        ]
    );
}

#[test]
fn test_signed_fraction() {
    assert_eq!(
        lex("-1.5/-2"),
        vec![
            Token::Minus,
            Token::Number("1.5".to_string()),
            Token::Slash,
            Token::Minus,
            Token::Number("2".to_string())
        ]
    );
}

#[test]
fn test_display_round_trips_text() {
    let rendered: String = lex("-7/.5").iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, "-7/.5");
}
