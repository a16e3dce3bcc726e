#![allow(dead_code)]

/// Split a tokenized program into `(line number, body)` pairs.
///
/// The body includes the trailing 0x0D. Panics on a malformed program.
pub fn split_lines(program: &[u8]) -> Vec<(u16, &[u8])> {
    let mut lines = vec![];
    let mut rest = program;
    while !rest.is_empty() {
        let number = u16::from_be_bytes([rest[0], rest[1]]);
        let len = u16::from_le_bytes([rest[2], rest[3]]) as usize;
        lines.push((number, &rest[4..4 + len]));
        rest = &rest[4 + len..];
    }
    lines
}

/// Value of the five bytes following a number marker.
pub fn decode_number(bytes: &[u8]) -> f64 {
    assert_eq!(bytes.len(), 5);
    if bytes.iter().all(|&b| b == 0) {
        return 0.0;
    }
    if bytes[0] == 0 {
        return u16::from_le_bytes([bytes[2], bytes[3]]) as f64;
    }
    let mantissa = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
    let m = 0.5 + mantissa as f64 / 4294967296.0;
    m * 2f64.powi(bytes[0] as i32 - 128)
}

pub struct Block {
    pub flag: u8,
    pub body: Vec<u8>,
    pub checksum_ok: bool,
}

/// Read the length-prefixed blocks of a TAP image.
pub fn read_blocks(tap: &[u8]) -> Vec<Block> {
    let mut blocks = vec![];
    let mut rest = tap;
    while !rest.is_empty() {
        let len = u16::from_le_bytes([rest[0], rest[1]]) as usize;
        let block = &rest[2..2 + len];
        blocks.push(Block {
            flag: block[0],
            body: block[1..len - 1].to_vec(),
            checksum_ok: block.iter().fold(0, |a, b| a ^ b) == 0,
        });
        rest = &rest[2 + len..];
    }
    blocks
}
