use std::{fs::File, io::Read, path::Path, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

use super::{
    scanner::{is_ident_letter, is_ident_start, is_space, Scanner},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Pull-based tokenizer over one character source.
///
/// Construction reads the first character and the first token, so
/// [`Lexer::current`] is always valid. After `next` has returned an error the
/// lexer must not be resumed.
pub struct Lexer<R: Read> {
    scanner: Scanner<R>,
    current: Token,
}

impl Lexer<File> {
    /// Opens the file at `path`, naming the source after the path.
    pub fn open(path: impl AsRef<Path>) -> Result<Lexer<File>, Error> {
        let path = path.as_ref();
        let name = Rc::new(path.display().to_string());
        let file = File::open(path)
            .map_err(|err| Error::new(ErrorImpl::io(&err), Location::start(Rc::clone(&name))))?;

        Lexer::with_name(name, file)
    }
}

impl<'a> Lexer<&'a [u8]> {
    pub fn from_source(name: impl Into<String>, source: &'a str) -> Result<Self, Error> {
        Lexer::new(name, source.as_bytes())
    }
}

impl<R: Read> Lexer<R> {
    pub fn new(name: impl Into<String>, source: R) -> Result<Self, Error> {
        Lexer::with_name(Rc::new(name.into()), source)
    }

    fn with_name(name: Rc<String>, source: R) -> Result<Self, Error> {
        let scanner = Scanner::new(name, source)?;
        let current = Token::end(scanner.location());
        let mut lexer = Lexer { scanner, current };
        lexer.next()?;
        Ok(lexer)
    }

    pub fn name(&self) -> &str {
        self.scanner.name()
    }

    /// The most recent result of [`Lexer::next`].
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Scans the next token and makes it current.
    ///
    /// At end of input this keeps returning END.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&Token, Error> {
        let token = self.scan()?;
        trace!("Tokenized: {} at {}", token, token.loc());
        self.current = token;
        Ok(&self.current)
    }

    fn scan(&mut self) -> Result<Token, Error> {
        while self.scanner.peek().is_some_and(is_space) {
            self.scanner.advance()?;
        }

        let loc = self.scanner.location();
        let chr = match self.scanner.peek() {
            Some(chr) => chr,
            None => return Ok(Token::end(loc)),
        };

        if let Some(kind) = punctuation(chr) {
            self.scanner.advance()?;
            return Ok(Token::simple(kind, loc));
        }

        match chr {
            b'=' => {
                self.scanner.advance()?;
                if self.scanner.peek() == Some(b'=') {
                    self.scanner.advance()?;
                    Ok(Token::equality(loc))
                } else {
                    Ok(Token::equal(loc))
                }
            }
            b'"' => self.lex_string(loc),
            c if is_ident_start(c) => self.lex_word(loc),
            c if c.is_ascii_digit() => self.lex_integer(loc),
            c => Err(self.error(ErrorImpl::UnknownCharacter { byte: c })),
        }
    }

    fn lex_string(&mut self, loc: Location) -> Result<Token, Error> {
        self.scanner.advance()?;

        let mut text = Vec::new();
        loop {
            match self.scanner.peek() {
                Some(b'"') => break,
                Some(c) => {
                    text.push(c);
                    self.scanner.advance()?;
                }
                None => return Err(self.error(ErrorImpl::UnterminatedString)),
            }
        }
        self.scanner.advance()?;

        Ok(Token::string(loc, String::from_utf8_lossy(&text).into_owned()))
    }

    fn lex_word(&mut self, loc: Location) -> Result<Token, Error> {
        let mut word = String::new();
        while let Some(c) = self.scanner.peek().filter(|&c| is_ident_letter(c)) {
            word.push(c as char);
            self.scanner.advance()?;
        }

        match RESERVED_LOOKUP.get(word.as_str()) {
            Some(kind) => Ok(Token::simple(*kind, loc)),
            None => Ok(Token::ident(loc, word)),
        }
    }

    /// Decimal digits, most significant first. Runs past `u64::MAX` wrap.
    fn lex_integer(&mut self, loc: Location) -> Result<Token, Error> {
        let mut value: u64 = 0;
        while let Some(c) = self.scanner.peek().filter(u8::is_ascii_digit) {
            value = value.wrapping_mul(10).wrapping_add((c - b'0') as u64);
            self.scanner.advance()?;
        }

        Ok(Token::integer(loc, value))
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.scanner.location())
    }
}

fn punctuation(chr: u8) -> Option<TokenKind> {
    Some(match chr {
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semi,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b',' => TokenKind::Comma,
        b'*' => TokenKind::Star,
        b'/' => TokenKind::Slash,
        b'%' => TokenKind::Percent,
        _ => return None,
    })
}

/// Runs a lexer over `source` to completion, END included.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = file.unwrap_or_else(|| String::from("shell"));
    debug!("Starting tokenization of {}", file_name);

    let mut lex = Lexer::from_source(file_name, &source)?;
    let mut tokens = vec![lex.current().clone()];

    while !lex.current().is(TokenKind::End) {
        tokens.push(lex.next()?.clone());
    }

    debug!("Tokenization complete. Total tokens: {}", tokens.len());
    Ok(tokens)
}
