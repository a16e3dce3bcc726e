/// Autostart parameter meaning "do not run after loading".
pub const NO_AUTOSTART: u16 = 0x8000;

pub const NAME_LEN: usize = 10;

const MAX_AUTOSTART: u16 = 9999;

/// Header type byte of a BASIC program.
pub const PROGRAM_TYPE: u8 = 0;

/// The 17 bytes following the flag of a header block.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub block_type: u8,
    pub name: [u8; NAME_LEN],
    pub length: u16,
    pub param1: u16,
    pub param2: u16,
}

impl Header {
    /// Header of a BASIC program without variables.
    ///
    /// The name is cut or space padded to ten bytes. `param1` holds the
    /// autostart line and `param2` the program length.
    pub fn program(name: &str, length: u16, autostart: Option<u16>) -> Header {
        let mut padded = [b' '; NAME_LEN];
        for (dst, src) in padded.iter_mut().zip(name.bytes()) {
            *dst = src;
        }
        let param1 = match autostart {
            Some(line) if line <= MAX_AUTOSTART => line,
            Some(line) => {
                log::warn!("autostart line {} out of range, ignored", line);
                NO_AUTOSTART
            }
            None => NO_AUTOSTART,
        };
        Header {
            block_type: PROGRAM_TYPE,
            name: padded,
            length,
            param1,
            param2: length,
        }
    }

    pub fn to_bytes(&self) -> [u8; 17] {
        let mut bytes = [0; 17];
        bytes[0] = self.block_type;
        bytes[1..11].copy_from_slice(&self.name);
        bytes[11..13].copy_from_slice(&self.length.to_le_bytes());
        bytes[13..15].copy_from_slice(&self.param1.to_le_bytes());
        bytes[15..17].copy_from_slice(&self.param2.to_le_bytes());
        bytes
    }
}
