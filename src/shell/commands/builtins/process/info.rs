// System info command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::utils::format_gb_from_kb;

pub struct SystemInfoCommand;

impl Executable for SystemInfoCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let snapshot = ctx.processes.snapshot();
        let unknown = ctx.lang.text(MessageKey::Unknown).to_string();

        let rows = [
            (MessageKey::SysHost, snapshot.host.clone()),
            (MessageKey::SysOs, Some(snapshot.os.clone())),
            (MessageKey::SysCpus, snapshot.cpus.map(|n| n.to_string())),
            (MessageKey::SysLoad, snapshot.load.clone()),
            (MessageKey::SysMemTotal, snapshot.mem_total_kb.map(format_gb_from_kb)),
            (MessageKey::SysMemAvailable, snapshot.mem_available_kb.map(format_gb_from_kb)),
        ];

        let header = ctx.lang.text(MessageKey::SystemInfoHeader).to_string();
        ctx.header(&header);
        for (key, value) in rows {
            let value = value.unwrap_or_else(|| unknown.clone());
            let msg = ctx.msg(key, &[("value", &value)]);
            ctx.say(&msg);
        }
        Ok(())
    }
}
