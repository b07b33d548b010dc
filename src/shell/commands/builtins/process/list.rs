// Process list command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::procinfo::ProcessEntry;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

const NAME_WIDTH: usize = 15;

pub struct ProcessListCommand;

impl Executable for ProcessListCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let filter = args.first().map(|f| f.to_lowercase());
        let procs = ctx.processes.list()?;

        let header = ctx.lang.text(MessageKey::ProcessHeader).to_string();
        ctx.header(&header);
        for entry in procs.iter().filter(|p| matches_filter(p, filter.as_deref())) {
            ctx.say(&format_row(entry));
        }
        Ok(())
    }
}

fn matches_filter(entry: &ProcessEntry, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => entry.name.to_lowercase().contains(f),
        None => true,
    }
}

pub fn format_row(entry: &ProcessEntry) -> String {
    let name: String = entry.name.chars().take(NAME_WIDTH).collect();
    format!("{}\t{}\t\t{:.1}", entry.pid, name, entry.cpu_percent)
}
