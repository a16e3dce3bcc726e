/// Byte cursor over the whole input with one character of push back.
///
/// Line and column are 1-based and count each input byte once, no matter how
/// often it is pushed back and read again.
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
    prev: (usize, usize),
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Cursor<'a> {
        Cursor {
            bytes,
            pos: 0,
            line: 1,
            column: 1,
            prev: (1, 1),
        }
    }

    /// The next byte, or `None` at end of input.
    pub fn next(&mut self) -> Option<u8> {
        let c = *self.bytes.get(self.pos)?;
        self.pos += 1;
        self.prev = (self.line, self.column);
        if c == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Push the byte just returned by `next` back onto the input.
    pub fn back(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos -= 1;
        let (line, column) = self.prev;
        self.line = line;
        self.column = column;
    }

    /// Line and column of the byte most recently returned by `next`.
    pub fn location(&self) -> (usize, usize) {
        self.prev
    }
}
