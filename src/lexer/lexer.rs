use std::{iter::Fuse, rc::Rc};

use log::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// On-demand scanner over any character stream.
///
/// Tokens are produced one at a time by [`Scanner::next_token`]. Characters read
/// past the end of a token are pushed back onto an unbounded stack and re-read by
/// the next call.
pub struct Scanner<I: Iterator<Item = char>> {
    input: Fuse<I>,
    pushback: Vec<char>,
    buffer: String,
    pos: u32,
    file: Rc<String>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(input: I, file: Option<String>) -> Scanner<I> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            input: input.fuse(),
            pushback: vec![],
            buffer: String::new(),
            pos: 0,
            file: file_name,
        }
    }

    /// The lexeme of the most recently scanned token.
    pub fn lexeme(&self) -> &str {
        &self.buffer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn read(&mut self) -> Option<char> {
        let c = self.pushback.pop().or_else(|| self.input.next());
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Pushes `c` back so that the next read returns it.
    pub fn unread(&mut self, c: char) {
        self.pushback.push(c);
        self.pos = self.pos.saturating_sub(1);
    }

    /// Scans the next token. At end of input this returns `EOF`, every time it
    /// is called.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.buffer.clear();

        let mut c = self.read();
        while let Some(ch) = c {
            if !is_whitespace(ch) {
                break;
            }
            c = self.read();
        }

        let Some(first) = c else {
            trace!("scanned EOF at {}", self.pos);
            return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self.pos, self.pos, self.file)));
        };

        let start = self.pos - 1;
        let kind = match first {
            '=' => TokenKind::Equals,
            '+' => TokenKind::Plus,
            _ if first.is_ascii_digit() => {
                self.scan_run(first, |c| c.is_ascii_digit());
                TokenKind::IntLiteral
            }
            _ if first.is_alphabetic() => {
                self.scan_run(first, char::is_alphabetic);
                match RESERVED_LOOKUP.get(self.buffer.as_str()) {
                    Some(kind) => *kind,
                    None => TokenKind::Identifier,
                }
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character: first },
                    Position(start, Rc::clone(&self.file)),
                ));
            }
        };

        let token = MK_TOKEN!(kind, self.buffer.clone(), MK_SPAN!(start, self.pos, self.file));
        trace!("scanned {}", token);
        Ok(token)
    }

    /// Appends `first` and every following character accepted by `accept` to the
    /// lexeme buffer. The first rejected character is pushed back.
    fn scan_run(&mut self, first: char, accept: fn(char) -> bool) {
        self.buffer.push(first);

        while let Some(c) = self.read() {
            if accept(c) {
                self.buffer.push(c);
            } else {
                self.unread(c);
                break;
            }
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Scans all of `source`. The returned tokens end with exactly one `EOF`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source.chars(), file);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token()?;
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return Ok(tokens);
        }
    }
}
