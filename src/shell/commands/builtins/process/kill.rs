// Kill command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct KillCommand;

impl Executable for KillCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let Some(raw) = args.first() else {
            return Err(ShellError::Input(ctx.lang.text(MessageKey::KillUsage).to_string()));
        };

        let pid = parse_pid(raw)
            .ok_or_else(|| ShellError::Input(ctx.msg(MessageKey::KillInvalidPid, &[("pid", raw)])))?;

        ctx.processes.kill(pid)?;
        let msg = ctx.msg(MessageKey::KillSuccess, &[("pid", &pid.to_string())]);
        ctx.success(&msg);
        Ok(())
    }
}

/// Accepts 1..=i32::MAX; 0 and larger values address process groups or
/// nothing at all.
pub fn parse_pid(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|p| *p > 0)
        .map(|p| p as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("1234"), Some(1234));
        assert_eq!(parse_pid("0"), None);
        assert_eq!(parse_pid("-5"), None);
        assert_eq!(parse_pid("abc"), None);
        assert_eq!(parse_pid("2147483648"), None);
        assert_eq!(parse_pid("2147483647"), Some(i32::MAX as u32));
    }
}
