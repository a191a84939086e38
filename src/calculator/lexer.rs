use crate::parsers::TokenSource;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Raw tokens recognized in calculator input
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// The token classes of the calculator grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Eof,
    Error,
}

impl Class {
    fn of(token: Token) -> Class {
        match token {
            Token::Number => Class::Number,
            Token::Plus => Class::Plus,
            Token::Minus => Class::Minus,
            Token::Star => Class::Star,
            Token::Slash => Class::Slash,
            Token::Caret => Class::Caret,
            Token::LParen => Class::LParen,
            Token::RParen => Class::RParen,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Class::Number => "NUMBER",
            Class::Plus => "'+'",
            Class::Minus => "'-'",
            Class::Star => "'*'",
            Class::Slash => "'/'",
            Class::Caret => "'^'",
            Class::LParen => "'('",
            Class::RParen => "')'",
            Class::Eof => "EOF",
            Class::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// The text of a token and its byte range in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Splits calculator input into classified tokens
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Returns a new lexer for the given input string
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            inner: Token::lexer(input),
        }
    }
}

impl<'a> TokenSource<Class, Lexeme<'a>> for Lexer<'a> {
    fn next_token(&mut self) -> (Class, Lexeme<'a>) {
        let class = match self.inner.next() {
            Some(Ok(token)) => Class::of(token),
            Some(Err(())) => Class::Error,
            None => {
                let end = self.inner.source().len();
                return (
                    Class::Eof,
                    Lexeme {
                        text: "",
                        span: end..end,
                    },
                );
            }
        };

        (
            class,
            Lexeme {
                text: self.inner.slice(),
                span: self.inner.span(),
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn classes(input: &str, n: usize) -> Vec<Class> {
        let mut lexer = Lexer::new(input);
        (0..n).map(|_| lexer.next_token().0).collect()
    }

    #[test]
    fn test_lexer() {
        assert_eq!(
            classes("3 * 13 + 4", 7),
            vec![
                Class::Number,
                Class::Star,
                Class::Number,
                Class::Plus,
                Class::Number,
                Class::Eof,
                Class::Eof,
            ]
        );
        assert_eq!(
            classes("(2.5^-1)/x", 9),
            vec![
                Class::LParen,
                Class::Number,
                Class::Caret,
                Class::Minus,
                Class::Number,
                Class::RParen,
                Class::Slash,
                Class::Error,
                Class::Eof,
            ]
        );
    }

    #[test]
    fn test_lexemes() {
        let mut lexer = Lexer::new(" 12.5+7");

        assert_eq!(
            lexer.next_token(),
            (
                Class::Number,
                Lexeme {
                    text: "12.5",
                    span: 1..5
                }
            )
        );
        assert_eq!(
            lexer.next_token(),
            (
                Class::Plus,
                Lexeme {
                    text: "+",
                    span: 5..6
                }
            )
        );
        assert_eq!(lexer.next_token().1.text, "7");
        assert_eq!(
            lexer.next_token(),
            (
                Class::Eof,
                Lexeme {
                    text: "",
                    span: 7..7
                }
            )
        );
    }
}
