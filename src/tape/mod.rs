/*!
# Rust Tape Module

This Rust module frames a tokenized program as a TAP image: a header block
followed by a data block. Every block is prefixed by its little-endian length
and ends with the XOR of its flag and body bytes.

*/

mod checksum;
mod header;

pub use checksum::ChecksumWriter;
pub use header::{Header, NAME_LEN, NO_AUTOSTART, PROGRAM_TYPE};

use crate::error;
use crate::lang::Error;
use crate::MAX_PROGRAM_LEN;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

pub const HEADER_FLAG: u8 = 0x00;
pub const DATA_FLAG: u8 = 0xFF;

/// Write one length-prefixed block and return the number of bytes written.
pub fn write_block<W: Write>(out: &mut W, flag: u8, body: &[u8]) -> Result<usize> {
    let len = body.len() + 2;
    if len > u16::max_value() as usize {
        return Err(error!(OutOfMemory; "BLOCK TOO LARGE"));
    }
    out.write_all(&(len as u16).to_le_bytes())?;
    let mut block = ChecksumWriter::new(out);
    block.write_all(&[flag])?;
    block.write_all(body)?;
    block.finish()?;
    Ok(len + 2)
}

/// Write `program` as a named BASIC program: header block then data block.
pub fn write_program<W: Write>(
    mut out: W,
    name: &str,
    program: &[u8],
    autostart: Option<u16>,
) -> Result<usize> {
    if program.len() > MAX_PROGRAM_LEN {
        return Err(error!(OutOfMemory; "PROGRAM TOO LARGE"));
    }
    let header = Header::program(name, program.len() as u16, autostart);
    let mut written = write_block(&mut out, HEADER_FLAG, &header.to_bytes())?;
    written += write_block(&mut out, DATA_FLAG, program)?;
    out.flush()?;
    log::debug!(
        "tape {:?}: {} program bytes, {} tape bytes",
        String::from_utf8_lossy(&header.name),
        program.len(),
        written
    );
    Ok(written)
}
