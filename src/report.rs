//! Checks batches of FEN strings and reports the results.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use chrono::Local;
use log::{info, warn};
use serde::Serialize;
use crate::fen::{self, Field, Fields};

/// Exit status when every FEN string is valid
pub const EXIT_VALID: i32 = 0;
/// Exit status when any FEN string is invalid
pub const EXIT_INVALID: i32 = 1;
/// Exit status for usage and I/O errors
pub const EXIT_ERROR: i32 = 2;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The result of checking a single FEN string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Line number, starting from 1, if the FEN string was read from a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The FEN string as given
    pub fen: String,
    /// Whether the FEN string is valid
    pub valid: bool,
    /// The field containing the error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    /// The text of the field containing the error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// A description of the error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Entry {
    /// Checks `fen` and records the result
    pub fn check(fen: &str, line: Option<usize>) -> Entry {
        let (valid, field, reason) = match fen::check_fen(fen) {
            Ok(()) => (true, None, None),
            Err(err) => (false, err.field(), Some(err.to_string())),
        };
        let text = field.and_then(|field| {
            Fields::split(fen).ok().map(|fields| fields.get(field).to_owned())
        });

        Entry { line, fen: fen.to_owned(), valid, field, text, reason }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "{}: ", line)?;
        }
        match (&self.reason, &self.text) {
            (None, _) => write!(f, "{}: ok", self.fen),
            (Some(reason), None) => write!(f, "{}: invalid: {}", self.fen, reason),
            (Some(reason), Some(text)) => {
                write!(f, "{}: invalid: {} \"{}\"", self.fen, reason, text)
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The results of checking a number of FEN strings
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the check was run, in RFC 3339 format
    pub checked: String,
    /// Number of FEN strings checked
    pub total: usize,
    /// Number of valid FEN strings
    pub valid: usize,
    /// Number of invalid FEN strings
    pub invalid: usize,
    /// Each FEN string checked, in order
    pub entries: Vec<Entry>,
}

impl Report {
    /// Creates a report from a list of entries
    pub fn new(entries: Vec<Entry>) -> Report {
        let valid = entries.iter().filter(|entry| entry.valid).count();

        Report {
            checked: Local::now().to_rfc3339(),
            total: entries.len(),
            valid,
            invalid: entries.len() - valid,
            entries,
        }
    }

    /// Returns true if every FEN string in the report is valid. An empty report is all valid.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Returns the process exit status for the report: `EXIT_VALID` or `EXIT_INVALID`
    pub fn exit_code(&self) -> i32 {
        if self.all_valid() { EXIT_VALID } else { EXIT_INVALID }
    }

    /// Number of valid FEN strings
    pub fn valid_count(&self) -> usize {
        self.valid
    }

    /// Number of invalid FEN strings
    pub fn invalid_count(&self) -> usize {
        self.invalid
    }

    /// Serializes the report as YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "{} checked, {} valid, {} invalid", self.total, self.valid, self.invalid)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Checks each of the given FEN strings
pub fn check_all<'a, I: IntoIterator<Item = &'a str>>(fens: I) -> Report {
    Report::new(fens.into_iter().map(|fen| Entry::check(fen, None)).collect())
}

/// Reads and checks one FEN string per line. Blank lines and lines starting with '#' are skipped.
///
/// Fails only if `reader` does. A line that is not valid UTF-8 is logged and reported as invalid.
pub fn read_fen_lines<R: BufRead>(mut reader: R) -> io::Result<Report> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(err) => {
                warn!("line {}: {}", line_num, err);
                entries.push(Entry {
                    line: Some(line_num),
                    fen: String::from_utf8_lossy(&buf).trim().to_owned(),
                    valid: false,
                    field: None,
                    text: None,
                    reason: Some("not valid UTF-8".to_owned()),
                });
                continue;
            }
        };

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        entries.push(Entry::check(line, Some(line_num)));
    }

    let report = Report::new(entries);
    info!("read {} lines: {} valid, {} invalid", line_num, report.valid, report.invalid);

    Ok(report)
}

/// Reads and checks the FEN strings in the file at `path`, one per line. A path of "-" reads
/// from `stdin` instead.
pub fn read_fen_file<P: AsRef<Path>, R: BufRead>(path: P, stdin: R) -> io::Result<Report> {
    let path = path.as_ref();

    if path.as_os_str() == "-" {
        info!("reading standard input");
        read_fen_lines(stdin)
    } else {
        info!("reading {}", path.display());
        read_fen_lines(BufReader::new(File::open(path)?))
    }
}
