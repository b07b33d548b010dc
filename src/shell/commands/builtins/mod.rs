pub mod common;
pub mod fs;
pub mod process;
pub mod session;

use crate::shell::commands::{CommandTable, Executable};

fn register(table: &mut CommandTable, name: &str, command: Box<dyn Executable>) {
    table.insert(name.to_string(), command);
}

/// Helper to build the full built-in table at once
pub fn builtin_table() -> CommandTable {
    let mut table = CommandTable::new();

    // Filesystem
    register(&mut table, "cd", Box::new(fs::cd::CdCommand));
    register(&mut table, "tree", Box::new(fs::tree::TreeCommand));
    register(&mut table, "du", Box::new(fs::du::DuCommand));

    // Processes
    register(&mut table, "process_list", Box::new(process::list::ProcessListCommand));
    register(&mut table, "kill", Box::new(process::kill::KillCommand));
    register(&mut table, "run", Box::new(process::run::RunCommand));
    register(&mut table, "system_info", Box::new(process::info::SystemInfoCommand));

    // Session
    register(&mut table, "lang", Box::new(session::lang::LangCommand));
    register(&mut table, "theme", Box::new(session::theme::ThemeCommand));
    register(&mut table, "calc", Box::new(session::calc::CalcCommand));
    register(&mut table, "clear", Box::new(session::clear::ClearCommand));
    register(&mut table, "cls", Box::new(session::clear::ClearCommand));
    register(&mut table, "help", Box::new(session::help::HelpCommand));

    table
}
