use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::shell::commands::builtins::common::current_dir;
use crate::shell::commands::system::{Verdict, classify};
use crate::shell::context::ShellContext;
use std::env;
use std::path::Path;
use std::sync::Arc;

/// Runs one command: a built-in when the name is in the table, otherwise an
/// external program that passed the executable check. Nothing is spawned for
/// a name that fails the check.
pub fn dispatch(name: &str, args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
    let registry = Arc::clone(&ctx.registry);
    if let Some(cmd) = registry.get(name) {
        log::debug!("Built-in '{}' with {} argument(s)", name, args.len());
        return cmd.execute(args, ctx);
    }

    let cwd = current_dir()?;
    match classify(name, &registry, &cwd, env::var_os("PATH").as_deref()) {
        Verdict::Runnable(path) => run_external(name, &path, args, &cwd, ctx),
        Verdict::NotFound | Verdict::Builtin => {
            log::debug!("'{}' did not resolve to an executable", name);
            Err(ShellError::CommandNotFound(name.to_string()))
        }
    }
}

fn run_external(
    name: &str,
    program: &Path,
    args: &[String],
    cwd: &Path,
    ctx: &mut ShellContext,
) -> Result<(), ShellError> {
    log::debug!("Spawning {} {:?}", program.display(), args);
    let output = ctx
        .spawner
        .run(program, args, cwd)
        .map_err(|e| ShellError::ExternalProcess {
            program: name.to_string(),
            reason: e.to_string(),
        })?;

    if !output.stdout.is_empty() {
        ctx.raw(&output.stdout);
    }
    if !output.stderr.is_empty() {
        ctx.raw_error(&output.stderr);
    }

    if !output.success() {
        let code = match output.code {
            Some(code) => code.to_string(),
            None => ctx.lang.text(MessageKey::Unknown).to_string(),
        };
        let msg = ctx.msg(MessageKey::ExitStatus, &[("name", name), ("code", &code)]);
        ctx.fail(&msg);
    }
    Ok(())
}
