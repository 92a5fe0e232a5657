//! The `csv-generator` crate is used to generate placeholder CSV files,
//! _e.g._, fixtures for tests that need a file of a given shape.

#![warn(missing_docs)]

pub mod csv;
pub mod input;

use std::{
    error,
    ffi::{OsStr, OsString},
    fmt, io,
    path::{Component, Path, PathBuf},
};

use log::debug;

/// Represents the parameters a `GenerationRequest` is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name or path of the file to generate.
    OutputFile,
    /// The number of data columns.
    Columns,
    /// The number of data rows.
    Rows,
}

impl Field {
    /// Returns the name used for this field in diagnostics and usage text.
    pub fn name(self) -> &'static str {
        match self {
            Field::OutputFile => "output_file",
            Field::Columns => "number_of_columns",
            Field::Rows => "number_of_rows",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents the kind of errors returned while generating a file.
#[derive(Debug)]
pub enum Error {
    /// When one or more parameters are absent, non-numeric or not positive.
    /// The fields are listed in the order they appear on the command line.
    InvalidArgument(Vec<Field>),
    /// When the output directory or file cannot be created or written.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
                let plural = if fields.len() > 1 { "s" } else { "" };
                write!(f, "Missing argument{}: {}", plural, names.join(", "))
            }
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<::csv::Error> for Error {
    fn from(err: ::csv::Error) -> Self {
        Error::Io(err.into())
    }
}

/// Represents the unvalidated parameters, as typed by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawArgs {
    /// The name or path of the file to generate.
    pub output_file: Option<PathBuf>,
    /// The number of columns, not yet parsed.
    pub columns: Option<OsString>,
    /// The number of rows, not yet parsed.
    pub rows: Option<OsString>,
}

impl RawArgs {
    /// Creates a `RawArgs` where every parameter is present.
    pub fn new<P: Into<PathBuf>, S: Into<OsString>>(output_file: P, columns: S, rows: S) -> Self {
        Self {
            output_file: Some(output_file.into()),
            columns: Some(columns.into()),
            rows: Some(rows.into()),
        }
    }
}

/// Represents a validated request to generate a file.
///
/// The output directory and the file path are resolved once, when the
/// request is built, and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    output_file: PathBuf,
    columns: usize,
    rows: usize,
    output_directory: PathBuf,
    path: PathBuf,
}

impl GenerationRequest {
    /// Creates a new request from already typed values.
    ///
    /// `program_name` is used to name the default output directory and
    /// `cwd` is the directory relative paths are resolved against.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use csv_generator::*;
    ///
    /// let req = GenerationRequest::new("out.csv", 2, 3, "gen", Path::new("/tmp")).unwrap();
    /// assert_eq!(req.path(), Path::new("/tmp/gen_output/out.csv"));
    /// assert!(GenerationRequest::new("out.csv", 0, 3, "gen", Path::new("/tmp")).is_err());
    /// ```
    pub fn new<P: AsRef<Path>>(
        output_file: P,
        columns: usize,
        rows: usize,
        program_name: &str,
        cwd: &Path,
    ) -> Result<Self, Error> {
        let output_file = Some(output_file.as_ref().to_path_buf()).filter(|name| is_file_name(name));
        let columns = Some(columns).filter(|&n| n > 0);
        let rows = Some(rows).filter(|&n| n > 0);
        Self::build(output_file, columns, rows, program_name, cwd)
    }

    /// Creates a new request from the parameters typed by the user.
    ///
    /// Counts must parse as positive integers.
    /// Every failing parameter is reported, not only the first one.
    pub fn from_raw(raw: RawArgs, program_name: &str, cwd: &Path) -> Result<Self, Error> {
        let output_file = raw.output_file.filter(|name| is_file_name(name));
        let columns = parse_count(raw.columns.as_deref());
        let rows = parse_count(raw.rows.as_deref());
        Self::build(output_file, columns, rows, program_name, cwd)
    }

    fn build(
        output_file: Option<PathBuf>,
        columns: Option<usize>,
        rows: Option<usize>,
        program_name: &str,
        cwd: &Path,
    ) -> Result<Self, Error> {
        match (output_file, columns, rows) {
            (Some(output_file), Some(columns), Some(rows)) => {
                let output_directory = resolve_output_directory(&output_file, program_name, cwd);
                let mut path = output_directory.clone();
                // `is_file_name` guarantees there is one.
                if let Some(name) = output_file.file_name() {
                    path.push(name);
                }
                debug!(
                    "resolved {} to {} ({} columns, {} rows)",
                    output_file.display(),
                    path.display(),
                    columns,
                    rows
                );
                Ok(Self {
                    output_file,
                    columns,
                    rows,
                    output_directory,
                    path,
                })
            }
            (output_file, columns, rows) => {
                let mut missing = vec![];
                if output_file.is_none() {
                    missing.push(Field::OutputFile);
                }
                if columns.is_none() {
                    missing.push(Field::Columns);
                }
                if rows.is_none() {
                    missing.push(Field::Rows);
                }
                Err(Error::InvalidArgument(missing))
            }
        }
    }

    /// Returns the output file as given by the user.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the number of data columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of data rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the absolute directory the file is written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Returns the absolute path of the file to generate.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolves the directory `output_file` is written to.
///
/// When `output_file` has no directory component (or it is `.`), the
/// default `<program_name>_output` directory under `cwd` is used.
/// Otherwise its directory is joined onto `cwd` when relative.
/// `.` and `..` components are folded without looking at the filesystem.
pub fn resolve_output_directory(output_file: &Path, program_name: &str, cwd: &Path) -> PathBuf {
    let dir = match output_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && dir != Path::new(".") => cwd.join(dir),
        _ => cwd.join(format!("{}_output", program_name)),
    };
    normalize(&dir)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Returns the base name, without extension, of the invoked executable.
///
/// # Examples
///
/// ```
/// assert_eq!(csv_generator::program_name("/usr/local/bin/gen.exe"), "gen");
/// assert_eq!(csv_generator::program_name("./csv-generator"), "csv-generator");
/// ```
pub fn program_name<P: AsRef<Path>>(argv0: P) -> String {
    argv0
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

/// Returns the usage line for `program_name`.
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} <{}> <{}> <{}>",
        program_name,
        Field::OutputFile,
        Field::Columns,
        Field::Rows
    )
}

fn is_file_name(name: &Path) -> bool {
    name.file_name().is_some()
}

fn parse_count(value: Option<&OsStr>) -> Option<usize> {
    value
        .and_then(|value| value.to_str())
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}
