use crate::error::ShellError;
use std::env;
use std::path::{Path, PathBuf};

pub fn current_dir() -> Result<PathBuf, ShellError> {
    env::current_dir().map_err(|e| ShellError::from_io(e, "."))
}

/// First argument as a path, `.` when absent.
pub fn path_arg(args: &[String]) -> &Path {
    args.first().map(Path::new).unwrap_or(Path::new("."))
}

pub fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    }
}
