use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    macros::{MK_TOKEN, MK_TOKEN_FACTORIES},
    Location,
};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Func,
    Return,
    While,
    If,
    Else,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Semi,

    Equal,    // =
    Equality, // ==
    Comma,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Int,
    String,
    Ident,
    End,
}

impl TokenKind {
    /// Whether tokens of this kind carry a payload.
    pub fn has_payload(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::String | TokenKind::Ident)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            TokenKind::Func => "func",
            TokenKind::Return => "return",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semi => ";",
            TokenKind::Equal => "=",
            TokenKind::Equality => "==",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Ident => "IDENT",
            TokenKind::End => "END",
        };
        write!(f, "{}", spelling)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    None,
    Int(u64),
    Text(String),
}

/// A classified unit of source text.
///
/// Fields are private: the factories below are the only way to build one,
/// so `payload` always agrees with `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    payload: Payload,
    loc: Location,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        match (&self.kind, &self.payload) {
            (TokenKind::Int, Payload::Int(value)) => write!(f, "({})", value),
            (TokenKind::String, Payload::Text(text)) => write!(f, "(\"{}\")", text),
            (TokenKind::Ident, Payload::Text(text)) => write!(f, "({})", text),
            _ => Ok(()),
        }
    }
}

impl Token {
    pub fn ident(loc: Location, text: impl Into<String>) -> Self {
        MK_TOKEN!(TokenKind::Ident, Payload::Text(text.into()), loc)
    }

    pub fn string(loc: Location, text: impl Into<String>) -> Self {
        MK_TOKEN!(TokenKind::String, Payload::Text(text.into()), loc)
    }

    pub fn integer(loc: Location, value: u64) -> Self {
        MK_TOKEN!(TokenKind::Int, Payload::Int(value), loc)
    }

    MK_TOKEN_FACTORIES! {
        func => TokenKind::Func,
        return_ => TokenKind::Return,
        while_ => TokenKind::While,
        if_ => TokenKind::If,
        else_ => TokenKind::Else,
        lparen => TokenKind::LParen,
        rparen => TokenKind::RParen,
        lbrace => TokenKind::LBrace,
        rbrace => TokenKind::RBrace,
        colon => TokenKind::Colon,
        semi => TokenKind::Semi,
        equal => TokenKind::Equal,
        equality => TokenKind::Equality,
        comma => TokenKind::Comma,
        plus => TokenKind::Plus,
        minus => TokenKind::Minus,
        star => TokenKind::Star,
        slash => TokenKind::Slash,
        percent => TokenKind::Percent,
        end => TokenKind::End,
    }

    /// Builds a payload-free token of `kind`.
    ///
    /// Only reachable with kinds coming from the keyword table or the
    /// punctuation table, none of which carry a payload.
    pub(crate) fn simple(kind: TokenKind, loc: Location) -> Self {
        debug_assert!(!kind.has_payload(), "{kind:?} needs a payload");
        MK_TOKEN!(kind, Payload::None, loc)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The text of an IDENT or STRING token.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The value of an INT token.
    pub fn integer_value(&self) -> Option<u64> {
        match self.payload {
            Payload::Int(value) => Some(value),
            _ => None,
        }
    }
}
