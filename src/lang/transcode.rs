use super::cursor::Cursor;
use super::keyword::KeywordTable;
use super::number::{encode_float, encode_integer, parse_integer};
use super::Error;
use crate::error;
use crate::MAX_PROGRAM_LEN;

type Result<T> = std::result::Result<T, Error>;

/// Terminates every tokenized line.
pub const LINE_END: u8 = 0x0D;

const MAX_LINE_NUMBER: u64 = 9999;

fn is_basic_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

fn is_exponent(c: u8) -> bool {
    c == b'e' || c == b'E'
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    LineStart,
    NextLineStart,
    LineNumber,
    CommandExpected,
    ReadingString,
    ReadingCommand,
    ReadingNumber,
    ReadingNumberDecimal,
    SymbolPrefix,
    SingleLineComment,
}

/// Radix of the next integer literal; `BIN` switches it for one literal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NumberBase {
    Decimal,
    Binary,
}

/// What the driving loop does with the character a state just saw.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Consume,
    Reprocess,
}

/// Single pass scanner turning a BASIC listing into tokenized program lines.
///
/// Each line comes out as its number (big-endian), its length (little-endian,
/// patched once the line ends), the tokenized body and `LINE_END`.
///
/// A newline straight after a line number closes that line as an empty one
/// rather than being skipped as whitespace, so `10\n20 CLS` is two lines and
/// not `20 CLS` folded into the body of line 10.
pub struct Transcoder<'k> {
    keywords: &'k KeywordTable,
    state: State,
    base: NumberBase,
    acc: Vec<u8>,
    out: Vec<u8>,
    patch: Option<usize>,
    bin: Option<u8>,
    less_equal: Option<u8>,
    greater_equal: Option<u8>,
    not_equal: Option<u8>,
}

impl<'k> Transcoder<'k> {
    pub fn new(keywords: &'k KeywordTable) -> Transcoder<'k> {
        Transcoder {
            keywords,
            state: State::LineStart,
            base: NumberBase::Decimal,
            acc: vec![],
            out: vec![],
            patch: None,
            bin: keywords.lookup("BIN"),
            less_equal: keywords.lookup("<="),
            greater_equal: keywords.lookup(">="),
            not_equal: keywords.lookup("<>"),
        }
    }

    /// Tokenize a whole listing.
    pub fn transcode(mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(input);
        loop {
            let c = cursor.next();
            let before = self.state;
            let step = self.step(c, cursor.location())?;
            if self.state != before {
                log::trace!("{:?} -> {:?} at {:?}", before, self.state, cursor.location());
            }
            match c {
                None => break,
                Some(_) if step == Step::Reprocess => cursor.back(),
                Some(_) => {}
            }
        }
        self.close_line();
        if self.out.len() > MAX_PROGRAM_LEN {
            return Err(error!(OutOfMemory; "PROGRAM TOO LARGE"));
        }
        Ok(self.out)
    }

    fn step(&mut self, c: Option<u8>, at: (usize, usize)) -> Result<Step> {
        use State::*;
        match self.state {
            LineStart => self.line_start(c, at),
            NextLineStart => self.next_line_start(c, at),
            LineNumber => self.line_number(c, at),
            SingleLineComment => {
                if c == Some(b'\n') {
                    self.state = LineStart;
                }
                Ok(Step::Consume)
            }
            CommandExpected => Ok(self.command_expected(c)),
            ReadingString => {
                if let Some(c) = c {
                    self.out.push(c);
                    if c == b'"' {
                        self.state = CommandExpected;
                    }
                }
                Ok(Step::Consume)
            }
            SymbolPrefix => Ok(self.symbol_prefix(c)),
            ReadingNumber => Ok(self.reading_number(c)),
            ReadingNumberDecimal => Ok(self.reading_number_decimal(c)),
            ReadingCommand => Ok(self.reading_command(c)),
        }
    }

    fn syntax_error(at: (usize, usize)) -> Error {
        error!(SyntaxError, at.0, ..at.1; "LINE NUMBER EXPECTED")
    }

    fn line_start(&mut self, c: Option<u8>, at: (usize, usize)) -> Result<Step> {
        match c {
            Some(c) if is_basic_digit(c) => {
                self.acc.push(c);
                self.state = State::LineNumber;
            }
            Some(b';') => self.state = State::SingleLineComment,
            Some(c) if is_basic_whitespace(c) => {}
            None => {}
            Some(_) => return Err(Self::syntax_error(at)),
        }
        Ok(Step::Consume)
    }

    fn next_line_start(&mut self, c: Option<u8>, at: (usize, usize)) -> Result<Step> {
        match c {
            Some(c) if is_basic_digit(c) || c == b';' => {
                self.close_line();
                return self.line_start(Some(c), at);
            }
            Some(c) if is_basic_alphabetic(c) => {
                self.acc.push(c);
                self.state = State::ReadingCommand;
            }
            Some(b'"') => {
                self.out.push(b'"');
                self.state = State::ReadingString;
            }
            Some(c) if is_basic_whitespace(c) => {}
            None => {}
            Some(_) => return Err(Self::syntax_error(at)),
        }
        Ok(Step::Consume)
    }

    fn line_number(&mut self, c: Option<u8>, at: (usize, usize)) -> Result<Step> {
        match c {
            Some(c) if is_basic_digit(c) => {
                self.acc.push(c);
                Ok(Step::Consume)
            }
            Some(c) if !is_basic_whitespace(c) => Err(Self::syntax_error(at)),
            _ => {
                let number = parse_integer(&String::from_utf8_lossy(&self.acc), 10);
                if number > MAX_LINE_NUMBER {
                    log::warn!("line number {} out of range at {}:{}", number, at.0, at.1);
                }
                self.acc.clear();
                self.open_line(number as u16);
                self.state = State::CommandExpected;
                if c == Some(b'\n') {
                    Ok(Step::Reprocess)
                } else {
                    Ok(Step::Consume)
                }
            }
        }
    }

    fn command_expected(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(c) if is_basic_digit(c) => {
                self.acc.push(c);
                self.out.push(c);
                self.state = State::ReadingNumber;
            }
            Some(b'.') => {
                self.acc.push(b'.');
                self.out.push(b'.');
                self.state = State::ReadingNumberDecimal;
            }
            Some(c) if is_basic_alphabetic(c) => {
                self.acc.push(c);
                self.state = State::ReadingCommand;
            }
            Some(b'"') => {
                self.out.push(b'"');
                self.state = State::ReadingString;
            }
            Some(c @ b'<') | Some(c @ b'>') => {
                self.acc.push(c);
                self.state = State::SymbolPrefix;
            }
            Some(b'\n') | None => self.state = State::NextLineStart,
            Some(c) if is_basic_whitespace(c) => {}
            Some(c) => self.out.push(c),
        }
        Step::Consume
    }

    fn symbol_prefix(&mut self, c: Option<u8>) -> Step {
        let token = match (self.acc.first().copied(), c) {
            (Some(b'<'), Some(b'=')) => self.less_equal,
            (Some(b'>'), Some(b'=')) => self.greater_equal,
            (Some(b'<'), Some(b'>')) => self.not_equal,
            _ => None,
        };
        self.state = State::CommandExpected;
        let step = match token {
            Some(token) => {
                self.out.push(token);
                Step::Consume
            }
            None => {
                self.out.extend_from_slice(&self.acc);
                Step::Reprocess
            }
        };
        self.acc.clear();
        step
    }

    fn reading_number(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(c) if is_basic_digit(c) => {
                self.acc.push(c);
                self.out.push(c);
            }
            Some(c) if c == b'.' || is_exponent(c) => {
                self.acc.push(c);
                self.out.push(c);
                self.state = State::ReadingNumberDecimal;
            }
            _ => {
                let radix = match self.base {
                    NumberBase::Decimal => 10,
                    NumberBase::Binary => 2,
                };
                self.base = NumberBase::Decimal;
                let value = parse_integer(&String::from_utf8_lossy(&self.acc), radix);
                self.out.extend_from_slice(&encode_integer(value));
                return self.end_literal();
            }
        }
        Step::Consume
    }

    fn reading_number_decimal(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(c) if is_basic_digit(c) || is_exponent(c) => {
                self.acc.push(c);
                self.out.push(c);
                Step::Consume
            }
            _ => {
                let encoded = encode_float(&String::from_utf8_lossy(&self.acc));
                self.out.extend_from_slice(&encoded);
                self.end_literal()
            }
        }
    }

    fn reading_command(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(c) if is_basic_alphabetic(c) => {
                self.acc.push(c);
                return Step::Consume;
            }
            Some(b' ') if self.acc.eq_ignore_ascii_case(b"GO") => {
                self.acc.push(b' ');
                return Step::Consume;
            }
            Some(c @ b'$') | Some(c @ b'#') if self.is_keyword_with(c) => {
                self.acc.push(c);
                return Step::Consume;
            }
            _ => {}
        }
        match self.keywords.lookup_bytes(&self.acc) {
            Some(token) => {
                self.out.push(token);
                if Some(token) == self.bin {
                    self.base = NumberBase::Binary;
                }
            }
            None => self.out.extend_from_slice(&self.acc),
        }
        self.end_literal()
    }

    fn is_keyword_with(&self, c: u8) -> bool {
        let mut word = self.acc.clone();
        word.push(c);
        self.keywords.lookup_bytes(&word).is_some()
    }

    fn end_literal(&mut self) -> Step {
        self.acc.clear();
        self.state = State::CommandExpected;
        Step::Reprocess
    }

    fn open_line(&mut self, number: u16) {
        debug_assert!(self.patch.is_none());
        self.out.extend_from_slice(&number.to_be_bytes());
        self.patch = Some(self.out.len());
        self.out.extend_from_slice(&[0, 0]);
    }

    fn close_line(&mut self) {
        if let Some(site) = self.patch.take() {
            self.out.push(LINE_END);
            let len = self.out.len() - site - 2;
            self.out[site..site + 2].copy_from_slice(&(len as u16).to_le_bytes());
            log::debug!(
                "line {} is {} bytes",
                u16::from_be_bytes([self.out[site - 2], self.out[site - 1]]),
                len
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/transcode_test.rs"]
mod tests;
