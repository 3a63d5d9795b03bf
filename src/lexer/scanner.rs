use std::{
    io::{BufReader, Bytes, Read},
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

/// Single-byte lookahead over a character source, with line and column
/// bookkeeping.
///
/// The lookahead is `None` once the source is exhausted. After that no
/// further reads happen and the position stays put.
pub struct Scanner<R: Read> {
    name: Rc<String>,
    bytes: Bytes<BufReader<R>>,
    chr: Option<u8>,
    exhausted: bool,
    line: u32,
    column: u32,
}

impl<R: Read> Scanner<R> {
    /// Wraps `source` and reads the first lookahead character.
    pub fn new(name: Rc<String>, source: R) -> Result<Self, Error> {
        let mut scanner = Scanner {
            name,
            bytes: BufReader::new(source).bytes(),
            chr: None,
            exhausted: false,
            line: 1,
            column: 0,
        };
        scanner.advance()?;
        Ok(scanner)
    }

    pub fn advance(&mut self) -> Result<(), Error> {
        if self.exhausted {
            self.chr = None;
            return Ok(());
        }

        if self.chr == Some(b'\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        match self.bytes.next() {
            Some(Ok(byte)) => self.chr = Some(byte),
            Some(Err(err)) => {
                self.chr = None;
                self.exhausted = true;
                return Err(Error::new(ErrorImpl::io(&err), self.location()));
            }
            None => {
                self.chr = None;
                self.exhausted = true;
            }
        }

        Ok(())
    }

    /// The lookahead character, `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.chr
    }

    /// Location of the lookahead character.
    pub fn location(&self) -> Location {
        Location::new(Rc::clone(&self.name), self.line, self.column)
    }

    pub fn name(&self) -> &Rc<String> {
        &self.name
    }
}

/// The C `isspace` set.
pub fn is_space(chr: u8) -> bool {
    matches!(chr, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

pub fn is_ident_start(chr: u8) -> bool {
    chr == b'_' || chr.is_ascii_alphabetic()
}

pub fn is_ident_letter(chr: u8) -> bool {
    is_ident_start(chr) || chr.is_ascii_digit()
}
