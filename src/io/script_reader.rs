//! Streaming reader over action scripts
//!
//! A script is a CSV file with an `action` header and one action name per
//! row. The reader yields one `Result<Action, AppError>` per row, so a bad
//! row can be reported and skipped without stopping the script.
//!
//! ```no_run
//! use bank_account_reducer::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::from_path(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(action) => println!("next action: {}", action),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from the constructors
//! - Individual row errors are yielded as Err variants carrying the line number
//! - Blank lines and rows whose action starts with `#` (after trimming) are skipped

use crate::io::csv_format::{convert_script_record, ScriptRecord};
use crate::types::{Action, AppError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Iterator over the actions of a script
#[derive(Debug)]
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
    failed: bool,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns `AppError::FileNotFound` if the file does not exist, and an
    /// I/O or parse error if it cannot be opened or its header cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::file_not_found(&path.display().to_string()),
            _ => AppError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any reader producing script CSV
    ///
    /// The CSV reader is configured to trim whitespace from all fields and
    /// allow flexible field counts. Comment rows, indented or not, are dropped
    /// by the iterator.
    pub fn from_reader(input: R) -> Result<Self, AppError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(input);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            failed: false,
        })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Action, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) if is_comment(&self.record) => continue,
                Ok(true) => {
                    let line = self.record.position().map(|pos| pos.line());
                    let parsed = self
                        .record
                        .deserialize::<ScriptRecord>(Some(&self.headers))
                        .map_err(|e| e.to_string())
                        .and_then(convert_script_record)
                        .map_err(|message| AppError::parse_error(line, &message));
                    return Some(parsed);
                }
                Err(e) => {
                    // The underlying reader is unusable after an I/O error.
                    self.failed = e.is_io_error();
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Fields are already trimmed, so indented comments match too
fn is_comment(record: &StringRecord) -> bool {
    record.get(0).is_some_and(|field| field.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary script file for testing
    fn create_temp_script(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<Action, AppError>> {
        ScriptReader::from_reader(content.as_bytes())
            .expect("header")
            .collect()
    }

    #[test]
    fn test_from_path_opens_file() {
        let file = create_temp_script("action\nopenAccount\n");
        let actions: Vec<_> = ScriptReader::from_path(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(actions, vec![Action::OpenAccount]);
    }

    #[test]
    fn test_from_path_fails_on_missing_file() {
        let result = ScriptReader::from_path(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(AppError::FileNotFound { .. })));
    }

    #[test]
    fn test_reads_all_action_types() {
        let records = read_all(
            "action\nopenAccount\ndeposit\nwithdraw\nrequestLoan\npayLoan\ncloseAccount\n",
        );
        let actions: Vec<Action> = records.into_iter().map(Result::unwrap).collect();
        assert_eq!(actions, Action::KNOWN.to_vec());
    }

    #[test]
    fn test_unknown_names_are_not_errors() {
        let records = read_all("action\nteleport\n");
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            Ok(Action::Unrecognized("teleport".to_string()))
        );
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let records = read_all("action\n# open first\nopenAccount\n\n  deposit  \n");
        assert_eq!(records, vec![Ok(Action::OpenAccount), Ok(Action::Deposit)]);
    }

    #[test]
    fn test_skips_indented_comment_rows() {
        let records = read_all("action\nopenAccount\n  # note\n\t#tabbed\nwithdraw\n");
        assert_eq!(records, vec![Ok(Action::OpenAccount), Ok(Action::Withdraw)]);
    }

    #[test]
    fn test_comment_rows_do_not_shift_line_numbers() {
        let records = read_all("action\n  # note\n\"\"\n");
        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0],
            Err(AppError::ParseError { line: Some(3), .. })
        ));
    }

    #[test]
    fn test_empty_cell_reports_line_and_continues() {
        let records = read_all("action\nopenAccount\n\"\"\ndeposit\n");

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(matches!(error, AppError::ParseError { line: Some(3), .. }));
        assert!(error.to_string().contains("Missing action name"));
    }

    #[test]
    fn test_wrong_header_fails_every_row() {
        let records = read_all("command\ndeposit\n");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_err());
    }

    #[test]
    fn test_empty_script_after_header() {
        assert!(read_all("action\n").is_empty());
    }
}
