use crate::ports::outbound::{GraphSource, RecordStream};
use crate::report::domain::{Edge, Identifier};
use crate::shared::error::ReportError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Field separator inside a record line
const FIELD_SEPARATOR: char = '\t';

/// RecordFileSource adapter reading identifiers and edges from record files
///
/// A record file holds one record per line, two fields separated by the first
/// tab on the line. Lines are read lazily through a buffered reader, so files
/// of any size are streamed without being loaded into memory. Empty lines are
/// skipped; a non-empty line without a tab is yielded as
/// [`ReportError::MalformedRecord`].
///
/// A sequence whose path is `None` is empty.
pub struct RecordFileSource {
    identifiers_path: Option<PathBuf>,
    edges_path: Option<PathBuf>,
}

impl RecordFileSource {
    pub fn new(identifiers_path: Option<PathBuf>, edges_path: Option<PathBuf>) -> Self {
        Self {
            identifiers_path,
            edges_path,
        }
    }

    /// Opens a record file after checking that it is an existing regular file
    fn open(&self, path: &Path, file_description: &str) -> Result<BufReader<File>> {
        if !path.exists() {
            return Err(ReportError::RecordFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The {} does not exist.\n   \
                     Please check the path given on the command line or in the config file.",
                    file_description
                ),
            }
            .into());
        }

        validate_regular_file(path, file_description)?;

        let file = File::open(path).map_err(|e| ReportError::RecordFileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(BufReader::new(file))
    }

    /// Streams the records of `path`, converting each field pair with `build`
    fn stream<T: 'static>(
        &self,
        path: Option<&Path>,
        file_description: &str,
        build: fn(&str, &str) -> T,
    ) -> Result<RecordStream<'_, T>> {
        let Some(path) = path else {
            return Ok(Box::new(std::iter::empty::<Result<T>>()));
        };

        let reader = self.open(path, file_description)?;
        let path = path.to_path_buf();

        let records = reader
            .lines()
            .enumerate()
            .filter_map(move |(index, line)| -> Option<Result<T>> {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        return Some(Err(ReportError::RecordFileReadError {
                            path: path.clone(),
                            details: e.to_string(),
                        }
                        .into()))
                    }
                };

                if line.is_empty() || line == "\r" {
                    return None;
                }

                Some(match parse_record(&line) {
                    Some((first, second)) => Ok(build(first, second)),
                    None => Err(ReportError::MalformedRecord {
                        path: path.clone(),
                        line: index + 1,
                        content: line.clone(),
                    }
                    .into()),
                })
            });

        Ok(Box::new(records))
    }
}

/// Splits a record line into its two fields.
///
/// Only the first tab separates; the second field keeps any further tabs.
/// A trailing carriage return is dropped.
fn parse_record(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split_once(FIELD_SEPARATOR)
}

impl GraphSource for RecordFileSource {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        self.stream(
            self.identifiers_path.as_deref(),
            "identifiers record file",
            |name, value| Identifier::new(name, value),
        )
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        self.stream(
            self.edges_path.as_deref(),
            "edges record file",
            |source, target| Edge::new(source, target),
        )
    }
}
