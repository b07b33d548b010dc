pub mod builtins;
pub mod system;

use crate::error::ShellError;
use crate::shell::context::ShellContext;
use std::collections::HashMap;

pub trait Executable: Send + Sync {
    /// `args` excludes the command name.
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError>;
}

/// Built-in name to handler. Lookup is exact and case-sensitive.
pub type CommandTable = HashMap<String, Box<dyn Executable>>;
