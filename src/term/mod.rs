extern crate ansi_term;
use ansi_term::Style;
use bas2tap::{convert, Options};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

/// Convert a ZX Spectrum BASIC listing into a TAP tape image.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Program name stored in the tape header (first 10 characters)
    name: String,

    /// BASIC listing to read; standard input when omitted
    input: Option<PathBuf>,

    /// TAP image to write; standard output when omitted
    output: Option<PathBuf>,

    /// Line to RUN automatically after loading
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=9999))]
    autostart: Option<u16>,
}

pub fn main() -> i32 {
    env_logger::init();
    let args = Args::parse();
    let options = Options::new(&args.name).with_autostart(args.autostart);

    let input: Box<dyn Read> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(error) => {
                report(&format!("Cannot open input file {}: {}", path.display(), error));
                return 2;
            }
        },
        None => Box::new(io::stdin()),
    };

    // Nothing is written until the whole listing converted cleanly.
    let mut tap: Vec<u8> = vec![];
    if let Err(error) = convert(&options, input, &mut tap) {
        report(&error.to_string());
        return 1;
    }

    let written = match &args.output {
        Some(path) => File::create(path).and_then(|mut file| file.write_all(&tap)),
        None => io::stdout().lock().write_all(&tap),
    };
    if let Err(error) = written {
        let target = match &args.output {
            Some(path) => path.display().to_string(),
            None => "<stdout>".to_string(),
        };
        report(&format!("Cannot write output file {}: {}", target, error));
        return 3;
    }
    0
}

fn report(message: &str) {
    eprintln!("{}", Style::new().bold().paint(message));
}
