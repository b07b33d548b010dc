// Run command

use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{current_dir, resolve_path};
use crate::shell::context::ShellContext;
use crate::utils::script_interpreter;
use std::path::Path;

pub struct RunCommand;

impl Executable for RunCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let Some((script_arg, script_args)) = args.split_first() else {
            return Err(ShellError::Input(ctx.lang.text(MessageKey::ScriptUsage).to_string()));
        };

        let cwd = current_dir()?;
        let script = resolve_path(&cwd, script_arg);
        // Checked before anything is spawned
        if !script.is_file() {
            return Err(ShellError::NotFound(script_arg.clone()));
        }

        let (program, mut full_args) = script_interpreter(ctx.config.interpreter.as_deref(), &script)
            .map_err(|e| ShellError::Input(format!("interpreter: {}", e)))?;
        full_args.push(script.display().to_string());
        full_args.extend(script_args.iter().cloned());

        log::info!("Running {} with {}", script.display(), program);
        let output = ctx
            .spawner
            .run(Path::new(&program), &full_args, &cwd)
            .map_err(|e| ShellError::ExternalProcess {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if output.success() {
            let header = ctx.lang.text(MessageKey::ScriptOutput).to_string();
            ctx.header(&header);
            ctx.raw(&output.stdout);
        } else {
            let code = match output.code {
                Some(code) => code.to_string(),
                None => ctx.lang.text(MessageKey::Unknown).to_string(),
            };
            let msg = ctx.msg(MessageKey::ScriptFailed, &[("path", script_arg), ("code", &code)]);
            ctx.fail(&msg);
            if !output.stderr.trim().is_empty() {
                let header = ctx.lang.text(MessageKey::ScriptErrors).to_string();
                ctx.header(&header);
                ctx.raw_error(&output.stderr);
            }
        }
        Ok(())
    }
}
