// Lang command

use crate::error::ShellError;
use crate::i18n::{self, LangError, MessageKey};
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;

pub struct LangCommand;

impl Executable for LangCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let Some(code) = args.first() else {
            let msg = ctx.msg(MessageKey::CurrentLanguage, &[("code", ctx.lang.code())]);
            ctx.header(&msg);
            return Ok(());
        };

        if !i18n::is_valid_code(code) {
            return Err(ShellError::Input(LangError::InvalidCode(code.clone()).to_string()));
        }

        let (table, err) = i18n::load_or_builtin(&ctx.paths.languages_dir, code);
        ctx.lang = table;
        match err {
            None => {
                log::info!("Language switched to {}", code);
                ctx.config.language = Some(code.clone());
                ctx.save_config();
                let msg = ctx.msg(MessageKey::LanguageChanged, &[("code", code)]);
                ctx.success(&msg);
            }
            Some(e) => {
                // The built-in table is active now, but the choice is not persisted
                let msg = ctx.msg(
                    MessageKey::LanguageFallback,
                    &[("code", code), ("detail", &e.to_string())],
                );
                ctx.fail(&msg);
            }
        }
        Ok(())
    }
}
