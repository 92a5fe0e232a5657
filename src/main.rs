use std::{env, error::Error, io, path::PathBuf, process};

use csv_generator::{csv::generate, input, program_name, usage, Error as GenError, GenerationRequest};

/// Exit status for missing or malformed parameters.
const INVALID_ARGUMENT: exitcode::ExitCode = 1;

fn run(program: &str) -> Result<PathBuf, GenError> {
    let mut args = env::args_os();
    args.next();
    let cwd = env::current_dir()?;

    let raw = input::resolve(args, io::stdin().lock(), io::stdout(), program)?;
    let req = GenerationRequest::from_raw(raw, program, &cwd)?;
    generate(&req, io::stdout())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let program = env::args_os()
        .next()
        .map(program_name)
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());

    match run(&program) {
        Ok(_) => Ok(()),
        Err(err @ GenError::InvalidArgument(_)) => {
            println!("{}", err);
            println!("{}", usage(&program));
            process::exit(INVALID_ARGUMENT);
        }
        Err(GenError::Io(err)) => {
            eprintln!("Error: {}", err);
            process::exit(exitcode::IOERR);
        }
    }
}
