// Help command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

const USAGE: &[(&str, MessageKey)] = &[
    ("cd [path]", MessageKey::HelpCd),
    ("tree [path]", MessageKey::HelpTree),
    ("du [path]", MessageKey::HelpDu),
    ("process_list [filter]", MessageKey::HelpProcessList),
    ("kill <pid>", MessageKey::HelpKill),
    ("run <script> [args...]", MessageKey::HelpRun),
    ("lang [code]", MessageKey::HelpLang),
    ("theme [path]", MessageKey::HelpTheme),
    ("theme none", MessageKey::HelpThemeReset),
    ("system_info", MessageKey::HelpSystemInfo),
    ("calc", MessageKey::HelpCalc),
    ("clear, cls", MessageKey::HelpClear),
    ("help", MessageKey::HelpHelp),
    ("exit", MessageKey::HelpExit),
];

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let title = ctx.lang.text(MessageKey::AvailableCommands).to_string();
        ctx.header(&title);
        for (usage, key) in USAGE {
            let line = format!("  {:<24} {}", usage, ctx.lang.text(*key));
            ctx.say(&line);
        }
        Ok(())
    }
}
