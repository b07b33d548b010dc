// Cd command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::current_dir;
use crate::shell::context::ShellContext;
use std::env;

pub struct CdCommand;

impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let Some(target) = args.first() else {
            let cwd = current_dir()?;
            let msg = ctx.msg(MessageKey::CurrentDir, &[("path", &cwd.display().to_string())]);
            ctx.header(&msg);
            return Ok(());
        };

        // On failure the OS leaves the directory untouched
        env::set_current_dir(target).map_err(|e| ShellError::from_io(e, target))?;

        let cwd = current_dir()?;
        log::info!("Working directory is now {}", cwd.display());
        let msg = ctx.msg(MessageKey::DirChanged, &[("path", &cwd.display().to_string())]);
        ctx.success(&msg);
        Ok(())
    }
}
