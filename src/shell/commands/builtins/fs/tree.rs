// Tree command

use crate::error::ShellError;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::path_arg;
use crate::shell::context::ShellContext;
use colored::Color;
use std::fs;
use std::io;
use std::path::Path;

pub struct TreeCommand;

impl Executable for TreeCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let root = path_arg(args);
        // Only a bad root is an error; unreadable subdirectories are reported inline
        let entries = sorted_entries(root).map_err(|e| ShellError::from_io(e, root))?;
        walk(ctx, entries, 0);
        Ok(())
    }
}

fn walk(ctx: &mut ShellContext, entries: Vec<fs::DirEntry>, depth: usize) {
    for entry in entries {
        let line = format!("{}{}", "  ".repeat(depth), entry.file_name().to_string_lossy());
        ctx.line(&line, Color::Cyan);

        // file_type() does not follow symlinks, so linked directories are not entered
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let path = entry.path();
        match sorted_entries(&path) {
            Ok(children) => walk(ctx, children, depth + 1),
            Err(e) => ctx.report(&ShellError::from_io(e, &path)),
        }
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    // Sort for consistent output
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
