// Theme command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{current_dir, resolve_path};
use crate::shell::context::ShellContext;
use crate::theme::load_theme;

/// Argument that drops the active theme.
const RESET_ARG: &str = "none";

pub struct ThemeCommand;

impl Executable for ThemeCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let Some(arg) = args.first() else {
            let msg = match &ctx.theme {
                Some(theme) => ctx.msg(
                    MessageKey::CurrentTheme,
                    &[("path", &theme.path.display().to_string())],
                ),
                None => ctx.lang.text(MessageKey::NoTheme).to_string(),
            };
            ctx.header(&msg);
            return Ok(());
        };

        if arg == RESET_ARG {
            ctx.theme = None;
            ctx.config.last_theme = None;
            ctx.save_config();
            log::info!("Theme reset");
            let msg = ctx.lang.text(MessageKey::ThemeReset).to_string();
            ctx.success(&msg);
            return Ok(());
        }

        let path = resolve_path(&current_dir()?, arg);
        match load_theme(&path) {
            Ok(theme) => {
                let shown = theme.path.display().to_string();
                ctx.config.last_theme = Some(theme.path.clone());
                ctx.theme = Some(theme);
                ctx.save_config();
                log::info!("Theme applied from {}", shown);
                let msg = ctx.msg(MessageKey::ThemeApplied, &[("path", &shown)]);
                ctx.success(&msg);
            }
            Err(e) => {
                // The previous theme stays active
                let msg = ctx.msg(
                    MessageKey::ThemeLoadFailed,
                    &[("path", arg), ("detail", &format!("{:#}", e))],
                );
                ctx.fail(&msg);
            }
        }
        Ok(())
    }
}
