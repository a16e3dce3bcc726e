use crate::lang::{Error, KeywordTable, Transcoder};
use crate::tape;
use std::io::{Read, Write};

/// Settings for one conversion.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Program name shown by `LOAD`; only the first ten bytes are kept.
    pub name: String,
    /// Line to run after loading, `None` to just load.
    pub autostart: Option<u16>,
    pub keywords: KeywordTable,
}

impl Options {
    pub fn new(name: &str) -> Options {
        Options {
            name: name.to_string(),
            ..Options::default()
        }
    }

    pub fn with_autostart(self, autostart: Option<u16>) -> Options {
        Options { autostart, ..self }
    }

    pub fn with_keywords(self, keywords: KeywordTable) -> Options {
        Options { keywords, ..self }
    }
}

/// Convert a BASIC listing into a TAP image.
///
/// The whole input is tokenized before anything is written, so a syntax
/// error leaves `output` untouched. Returns the number of tape bytes written.
pub fn convert<R: Read, W: Write>(options: &Options, mut input: R, output: W) -> Result<usize, Error> {
    let mut source = vec![];
    input.read_to_end(&mut source)?;
    let program = Transcoder::new(&options.keywords).transcode(&source)?;
    let written = tape::write_program(output, &options.name, &program, options.autostart)?;
    log::info!(
        "{} source bytes, {} program bytes, {} tape bytes",
        source.len(),
        program.len(),
        written
    );
    Ok(written)
}
