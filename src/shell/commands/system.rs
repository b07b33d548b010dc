// External programs: resolving them and running them
use crate::shell::commands::CommandTable;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedOutput {
    /// `None` when the child was ended by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program to completion and hands back what it printed.
///
/// A non-zero exit is not an error here; callers decide what to make of it.
pub trait Spawner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> io::Result<CapturedOutput>;
}

pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn run(&self, program: &Path, args: &[String], cwd: &Path) -> io::Result<CapturedOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .output()?;

        Ok(CapturedOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Builtin,
    Runnable(PathBuf),
    NotFound,
}

pub fn classify(
    name: &str,
    table: &CommandTable,
    cwd: &Path,
    search_path: Option<&OsStr>,
) -> Verdict {
    if table.contains_key(name) {
        return Verdict::Builtin;
    }
    match resolve_executable(name, cwd, search_path) {
        Some(path) => Verdict::Runnable(path),
        None => Verdict::NotFound,
    }
}

/// Finds an executable file for `name`, first on the search path (bare names
/// only), then relative to `cwd`. Anything that is not an executable regular
/// file is rejected.
pub fn resolve_executable(name: &str, cwd: &Path, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let has_separator = name.contains('/') || (cfg!(windows) && name.contains('\\'));
    if !has_separator {
        if let Some(paths) = search_path {
            if let Ok(found) = which::which_in(name, Some(paths), cwd) {
                if is_executable(&found) {
                    return Some(found);
                }
            }
        }
    }

    // join() keeps absolute names as they are
    let candidate = cwd.join(name);
    with_suffixes(&candidate).into_iter().find(|p| is_executable(p))
}

#[cfg(unix)]
fn with_suffixes(path: &Path) -> Vec<PathBuf> {
    vec![path.to_path_buf()]
}

#[cfg(not(unix))]
fn with_suffixes(path: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![path.to_path_buf()];
    for ext in executable_extensions() {
        let mut name = path.as_os_str().to_os_string();
        name.push(&ext);
        candidates.push(PathBuf::from(name));
    }
    candidates
}

#[cfg(not(unix))]
fn executable_extensions() -> Vec<String> {
    std::env::var("PATHEXT")
        .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
        .split(';')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()));
    meta.is_file() && ext.is_some_and(|e| executable_extensions().contains(&e))
}
