use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Where the structured request log goes. Selected by configuration before
/// the server starts; the capture side only ever sees the opened writer.
#[derive(Debug, Clone, PartialEq)]
pub enum LogDestination {
    Stdout,
    Stderr,
    Discard,
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LogWriterError {
    #[error("Log file {path} could not be opened: {source}")]
    Open { path: String, source: io::Error },
}

impl FromStr for LogDestination {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "stdout" => LogDestination::Stdout,
            "stderr" => LogDestination::Stderr,
            "DISCARD" => LogDestination::Discard,
            path => LogDestination::File(PathBuf::from(path)),
        })
    }
}

impl LogDestination {
    pub fn open(&self) -> Result<Box<dyn Write + Send>, LogWriterError> {
        match self {
            LogDestination::Stdout => Ok(Box::new(io::stdout())),
            LogDestination::Stderr => Ok(Box::new(io::stderr())),
            LogDestination::Discard => Ok(Box::new(io::sink())),
            LogDestination::File(path) => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(|source| LogWriterError::Open {
                        path: path.display().to_string(),
                        source,
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::log_writer::LogDestination;

    #[test]
    fn should_parse_the_reserved_destination_names() {
        assert_eq!("stdout".parse(), Ok(LogDestination::Stdout));
        assert_eq!("stderr".parse(), Ok(LogDestination::Stderr));
        assert_eq!("DISCARD".parse(), Ok(LogDestination::Discard));
    }

    #[test]
    fn should_parse_anything_else_as_a_file_path() {
        assert_eq!(
            "/tmp/requests.log".parse(),
            Ok(LogDestination::File("/tmp/requests.log".into()))
        );
    }

    #[test]
    fn should_open_a_file_destination_in_append_mode() {
        let path = std::env::temp_dir().join(format!("request-logger-test-{}.log", std::process::id()));

        let destination = LogDestination::File(path.clone());
        let mut writer = destination.open().unwrap();
        writer.write_all(b"first\n").unwrap();
        drop(writer);

        let mut writer = destination.open().unwrap();
        writer.write_all(b"second\n").unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn should_fail_to_open_a_file_in_a_missing_directory() {
        let destination = LogDestination::File("/nonexistent-directory/requests.log".into());

        assert!(destination.open().is_err());
    }
}
