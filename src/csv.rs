//! The `csv` module is used to write placeholder tables to a CSV buffer,
//! _e.g._, a file or a string.

#![warn(missing_docs)]

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    iter,
    path::{Path, PathBuf},
};

use csv::{Terminator, WriterBuilder};
use log::{debug, info};

use crate::{Error, GenerationRequest};

/// Creates `dir` unless it is already a directory.
/// Parent directories are not created.
pub fn create_output_directory(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("creating directory {}", dir.display());
    fs::create_dir(dir)
}

/// Write a placeholder table of `columns` columns and `rows` rows to a
/// `Write`r `wtr`, reporting progress to `status`.
/// The first row is a header row naming each column by its index.
/// Every record starts with an empty field.
///
/// # Examples
///
/// ```
/// use std::io::{self, BufWriter};
/// use csv_generator::csv::*;
///
/// let mut buf: Vec<u8> = vec![];
///
/// write_table(2, 2, BufWriter::new(&mut buf), io::sink()).unwrap();
///
/// assert_eq!(
///     std::str::from_utf8(&buf).unwrap(),
///     ",0_Column,1_Column
/// ,data,data
/// ,data,data
/// "
/// );
/// ```
pub fn write_table<W: io::Write, S: io::Write>(
    columns: usize,
    rows: usize,
    wtr: W,
    mut status: S,
) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(wtr);

    writeln!(status, "Writing columns...")?;
    writer.write_record(
        iter::once(String::new()).chain((0..columns).map(|col| format!("{}_Column", col))),
    )?;

    writeln!(status, "Writing rows...")?;
    let row: Vec<&str> = iter::once("")
        .chain(iter::repeat("data").take(columns))
        .collect();
    for _ in 0..rows {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Generates the file described by `req`, reporting progress to `status`.
///
/// The output directory is created when missing.
/// When the file already exists, the table is appended to it.
/// Returns the path of the generated file.
pub fn generate<W: io::Write>(req: &GenerationRequest, mut status: W) -> Result<PathBuf, Error> {
    write!(
        status,
        "\n\nCreating {} to contain {} columns and {} rows...\n\n",
        req.output_file().display(),
        req.columns(),
        req.rows()
    )?;

    create_output_directory(req.output_directory())?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(req.path())?;
    write_table(req.columns(), req.rows(), file, &mut status)?;

    writeln!(status, "File has been generated here: {}", req.path().display())?;
    status.flush()?;
    info!(
        "generated {} ({} columns, {} rows)",
        req.path().display(),
        req.columns(),
        req.rows()
    );

    Ok(req.path().to_path_buf())
}
