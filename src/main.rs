//! # bas2tap
//!
//! ZX Spectrum BASIC listing to TAP converter.
//!

mod term;

fn main() {
    std::process::exit(term::main());
}
