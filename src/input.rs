//! The `input` module is used to gather the generation parameters, either
//! from the command line or by asking the user.

#![warn(missing_docs)]

use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use log::debug;

use crate::{usage, RawArgs};

/// Takes the parameters from positional arguments (without the program name).
/// Returns `None` unless exactly three arguments were given.
///
/// # Examples
///
/// ```
/// use std::ffi::OsString;
/// use csv_generator::input::from_args;
///
/// let raw = from_args(["out.csv", "2", "3"].map(OsString::from)).unwrap();
/// assert_eq!(raw.columns, Some(OsString::from("2")));
/// assert!(from_args([OsString::from("out.csv")]).is_none());
/// ```
pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Option<RawArgs> {
    let args: Vec<OsString> = args.into_iter().collect();
    match <[OsString; 3]>::try_from(args) {
        Ok([output_file, columns, rows]) => Some(RawArgs::new(output_file, columns, rows)),
        Err(args) => {
            debug!("{} arguments given, prompting instead", args.len());
            None
        }
    }
}

/// Asks the user for each parameter in turn, writing the questions to `wtr`
/// and reading one line per answer from `rdr`.
/// A parameter is left absent when the input ends before it is answered.
/// Answers that are not valid UTF-8 fail with `io::ErrorKind::InvalidData`.
pub fn prompt<R: BufRead, W: Write>(
    mut rdr: R,
    mut wtr: W,
    program_name: &str,
) -> io::Result<RawArgs> {
    writeln!(
        wtr,
        "Creation parameters can be passed to the script as arguments like so:"
    )?;
    writeln!(wtr, "{}", usage(program_name))?;
    writeln!(wtr)?;
    writeln!(wtr, "Proceeding with prompted questions...")?;

    let output_file = ask(&mut rdr, &mut wtr, "Name of output file?")?;
    let columns = ask(&mut rdr, &mut wtr, "How many columns?")?;
    let rows = ask(&mut rdr, &mut wtr, "How many rows?")?;
    writeln!(wtr)?;
    wtr.flush()?;

    Ok(RawArgs {
        output_file: output_file.map(PathBuf::from),
        columns: columns.map(OsString::from),
        rows: rows.map(OsString::from),
    })
}

/// Takes the parameters from `args` when there are exactly three of them,
/// otherwise prompts for them.
pub fn resolve<I, R, W>(args: I, rdr: R, wtr: W, program_name: &str) -> io::Result<RawArgs>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    match from_args(args) {
        Some(raw) => Ok(raw),
        None => prompt(rdr, wtr, program_name),
    }
}

fn ask<R: BufRead, W: Write>(rdr: &mut R, wtr: &mut W, question: &str) -> io::Result<Option<String>> {
    writeln!(wtr, "{}", question)?;
    wtr.flush()?;

    let mut line = String::new();
    if rdr.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
}
