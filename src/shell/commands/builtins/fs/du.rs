// Du command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::path_arg;
use crate::shell::context::ShellContext;
use crate::utils::format_mb;
use std::fs;
use std::io;
use std::path::Path;

pub struct DuCommand;

impl Executable for DuCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let root = path_arg(args);
        let total = disk_usage(root).map_err(|e| ShellError::from_io(e, root))?;

        let msg = ctx.msg(
            MessageKey::DiskUsage,
            &[("path", &root.display().to_string()), ("size", &format_mb(total))],
        );
        ctx.success(&msg);
        Ok(())
    }
}

/// Total size in bytes of the regular files under `path`. Symbolic links are
/// neither counted nor followed; unreadable subtrees count as empty.
pub fn disk_usage(path: &Path) -> io::Result<u64> {
    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() {
        return Ok(0);
    }
    if !meta.is_dir() {
        return Ok(meta.len());
    }

    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else { continue };
        let Ok(file_type) = entry.file_type() else { continue };

        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            total += disk_usage(&entry.path()).unwrap_or_else(|e| {
                log::debug!("Skipping {}: {}", entry.path().display(), e);
                0
            });
        } else if let Ok(meta) = entry.metadata() {
            total += meta.len();
        }
    }
    Ok(total)
}
