use std::io;
use std::path::Path;
use thiserror::Error;

/// Everything a built-in or the external-command path can fail with.
///
/// None of these end the session: the loop reports them through the active
/// language table and reads the next line.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid input: {0}")]
    Input(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("'{program}' could not be run: {reason}")]
    ExternalProcess { program: String, reason: String },
    /// Only built where the process table has no backend.
    #[cfg_attr(unix, allow(dead_code))]
    #[error("{0} is not supported on this platform")]
    Unsupported(String),
    #[error("OS error on '{subject}': {source}")]
    Os {
        subject: String,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    /// Classifies an OS error raised while working on `subject`.
    pub fn from_io(err: io::Error, subject: impl AsRef<Path>) -> Self {
        let subject = subject.as_ref().display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ShellError::NotFound(subject),
            io::ErrorKind::NotADirectory => ShellError::NotADirectory(subject),
            io::ErrorKind::PermissionDenied => ShellError::PermissionDenied(subject),
            _ => ShellError::Os {
                subject,
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classification() {
        let err = ShellError::from_io(io::Error::from(io::ErrorKind::NotFound), "a/b");
        assert!(matches!(err, ShellError::NotFound(ref s) if s == "a/b"));

        let err = ShellError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "/root");
        assert!(matches!(err, ShellError::PermissionDenied(_)));

        let err = ShellError::from_io(io::Error::from(io::ErrorKind::NotADirectory), "f.txt");
        assert!(matches!(err, ShellError::NotADirectory(_)));

        let err = ShellError::from_io(io::Error::other("disk on fire"), "x");
        assert!(matches!(err, ShellError::Os { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }
}
