// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Little program to decode the given binary file for the specified range.
//!
//! Usage: ./decode <input file> [-o <output file>] [-b <beginning pos>] [-e <ending position>]

use m68000_decoder::Sweep;

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::num::TryFromIntError;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args();
    let exec = args.next().unwrap_or_else(|| "decode".to_string());
    if args.len() < 1 || args.len() > 7 {
        println!("Decodes the instructions in the given input binary file, starting and ending at the given locations.");
        println!("Outputs the instructions in the given output file, or on the standard output if the output file is not supplied.");
        println!("Usage: {} <input file> [-o <output file>] [-b <beginning pos>] [-e <ending position>]", exec);
        std::process::exit(1);
    }

    let inname = args.next().ok_or("Expected input filename")?;
    let mut data = std::fs::read(&inname).map_err(|e| format!("Failed to open input file \"{}\": {}", inname, e))?;

    let mut outname = None;
    let mut beg = 0;
    let mut end = data.len();

    while let Some(arg) = args.next() {
        match &arg[..] {
            "-o" => outname = Some(args.next().ok_or("Expected output filename with parameter -o")?),
            "-b" => beg = args.next().ok_or("Expected beginning position with parameter -b")?.parse()?,
            "-e" => end = args.next().ok_or("Expected ending position with parameter -e")?.parse()?,
            _ => return Err(format!("Unknown parameter \"{}\"", arg).into()),
        }
    }

    let mut out: Box<dyn Write> = match outname {
        Some(name) => Box::new(File::create(name)?),
        None => Box::new(io::stdout().lock()),
    };

    let end = sweep_end(end, data.len())?;
    for (pc, res) in Sweep::new(&mut data[..], beg, end) {
        match res {
            Ok(inst) => writeln!(out, "{:#X} {:04X} {:?} {:?}", pc, inst.opcode, inst.isa, inst.operands)?,
            Err(e) => writeln!(out, "{:#X} ?? {}", pc, e)?,
        }
    }

    Ok(())
}

/// Clamps the ending position to the file size. Fails if the image does not fit the 32-bits address space.
fn sweep_end(end: usize, len: usize) -> Result<u32, TryFromIntError> {
    u32::try_from(end.min(len))
}
