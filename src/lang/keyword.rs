/// Token value of the first entry in the Spectrum keyword table.
pub const FIRST_TOKEN: u8 = 0xA5;

/// The ZX Spectrum 48K keyword vocabulary in token order.
///
/// `DEF FN`, `OPEN #` and `CLOSE #` are listed without their inner spaces.
pub const SPECTRUM_KEYWORDS: [&str; 91] = [
    "RND", "INKEY$", "PI", "FN", "POINT", "SCREEN$", "ATTR", "AT", "TAB", "VAL$", "CODE", "VAL",
    "LEN", "SIN", "COS", "TAN", "ASN", "ACS", "ATN", "LN", "EXP", "INT", "SQR", "SGN", "ABS",
    "PEEK", "IN", "USR", "STR$", "CHR$", "NOT", "BIN", "OR", "AND", "<=", ">=", "<>", "LINE",
    "THEN", "TO", "STEP", "DEFFN", "CAT", "FORMAT", "MOVE", "ERASE", "OPEN#", "CLOSE#", "MERGE",
    "VERIFY", "BEEP", "CIRCLE", "INK", "PAPER", "FLASH", "BRIGHT", "INVERSE", "OVER", "OUT",
    "LPRINT", "LLIST", "STOP", "READ", "DATA", "RESTORE", "NEW", "BORDER", "CONTINUE", "DIM",
    "REM", "FOR", "GO TO", "GO SUB", "INPUT", "LOAD", "LIST", "LET", "PAUSE", "NEXT", "POKE",
    "PRINT", "PLOT", "RUN", "SAVE", "RANDOMIZE", "IF", "CLS", "DRAW", "CLEAR", "RETURN", "COPY",
];

/// Ordered mapping of keyword spellings to single byte tokens.
///
/// The token of an entry is the base token plus its index. Lookup is a
/// case-insensitive exact match and the first matching entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    first: u8,
    entries: Vec<&'static str>,
}

impl KeywordTable {
    /// Build a table from caller-supplied spellings.
    ///
    /// Entries that would push the token past 0xFF are dropped.
    pub fn new(first: u8, entries: &[&'static str]) -> KeywordTable {
        let room = 0x100 - first as usize;
        if entries.len() > room {
            log::warn!(
                "keyword table truncated to {} of {} entries",
                room,
                entries.len()
            );
        }
        KeywordTable {
            first,
            entries: entries.iter().take(room).copied().collect(),
        }
    }

    pub fn spectrum() -> KeywordTable {
        KeywordTable::new(FIRST_TOKEN, &SPECTRUM_KEYWORDS)
    }

    pub fn lookup(&self, s: &str) -> Option<u8> {
        self.lookup_bytes(s.as_bytes())
    }

    pub fn lookup_bytes(&self, s: &[u8]) -> Option<u8> {
        self.entries
            .iter()
            .position(|k| k.as_bytes().eq_ignore_ascii_case(s))
            .map(|index| self.first + index as u8)
    }

    pub fn spelling(&self, token: u8) -> Option<&'static str> {
        let index = token.checked_sub(self.first)?;
        self.entries.get(index as usize).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, k)| (*k, self.first + index as u8))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        KeywordTable::spectrum()
    }
}
