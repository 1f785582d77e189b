//! Checks chess positions written in Forsyth-Edwards Notation (FEN).
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use clap::{App, Arg, ArgMatches, ErrorKind, crate_version};
use simplelog::{WriteLogger, LevelFilter, Config};
use fencheck::report::{self, Report, EXIT_ERROR};

fn main() {
    let matches =
        match App::new("fencheck")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Checks that positions are written in valid Forsyth-Edwards Notation (FEN). \
                    Reads from\nstandard input if no positions or file are given.")
            .arg(Arg::with_name("file")
                .long("file")
                .short("f")
                .value_name("FEN_FILE")
                .takes_value(true)
                .conflicts_with("fen")
                .help("A file of FEN strings, one per line (\"-\" for standard input)"))
            .arg(Arg::with_name("yaml")
                .long("yaml")
                .short("y")
                .help("Prints the report as YAML"))
            .arg(Arg::with_name("quiet")
                .long("quiet")
                .short("q")
                .conflicts_with("yaml")
                .help("Prints nothing; the exit status gives the result"))
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("fencheck.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .arg(Arg::with_name("fen")
                .value_name("FEN_STRING")
                .multiple(true)
                .help("Position in Forsyth-Edwards Notation (FEN), quoted as one argument"))
            .get_matches_safe() {
            Ok(matches) => matches,
            Err(err) => match err.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
                _ => {
                    eprintln!("{}", err.message);
                    process::exit(EXIT_ERROR);
                },
            },
        };

    match run(&matches) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(EXIT_ERROR);
        },
    }
}

/// Checks the requested positions and prints the report. Returns the exit status.
fn run(matches: &ArgMatches<'_>) -> Result<i32, Error> {
    init_logging(matches)?;

    let report = if let Some(fens) = matches.values_of("fen") {
        report::check_all(fens)
    } else {
        let path = matches.value_of_os("file").map_or_else(|| PathBuf::from("-"), PathBuf::from);
        let stdin = io::stdin();
        report::read_fen_file(&path, stdin.lock()).map_err(|err| {
            Error(format!("{}: {}", path.display(), err))
        })?
    };

    print_report(matches, &report)?;

    Ok(report.exit_code())
}

fn print_report(matches: &ArgMatches<'_>, report: &Report) -> Result<(), Error> {
    if matches.is_present("quiet") {
        return Ok(());
    }

    if matches.is_present("yaml") {
        println!("{}", report.to_yaml()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn init_logging(matches: &ArgMatches<'_>) -> Result<(), Error> {
    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let result = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), io::sink())
    };

    result.map_err(|err| Error(err.to_string()))
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error(err.to_string())
    }
}
