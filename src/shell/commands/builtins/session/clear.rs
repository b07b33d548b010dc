// Clear command

use crate::error::ShellError;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

/// Erase display, cursor to top-left.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[1;1H";

pub struct ClearCommand;

impl Executable for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        ctx.raw(CLEAR_SEQUENCE);
        ctx.flush();
        Ok(())
    }
}
