pub mod commands;
pub mod context;
pub mod executor;
pub mod parser;

use crate::input::ReadOutcome;
use context::ShellContext;
use parser::Input;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Handles one input line. Errors are reported and never end the session;
/// only the exit keyword does.
pub fn run_command_line(line: &str, ctx: &mut ShellContext) -> Flow {
    let result = parser::classify_line(line).and_then(|input| match input {
        Input::Empty => Ok(Flow::Continue),
        Input::Exit => Ok(Flow::Exit),
        Input::Command { name, args } => {
            executor::dispatch(&name, &args, ctx).map(|_| Flow::Continue)
        }
    });

    match result {
        Ok(flow) => flow,
        Err(e) => {
            ctx.report(&e);
            Flow::Continue
        }
    }
}

/// Reads and runs lines until `exit`, end of input or Ctrl-C at the prompt.
pub fn run_loop(ctx: &mut ShellContext) {
    loop {
        let prompt = ctx.prompt();
        match ctx.input.read_line(&prompt) {
            Ok(ReadOutcome::Line(line)) => {
                let flow = run_command_line(&line, ctx);
                ctx.flush();
                if flow == Flow::Exit {
                    break;
                }
            }
            Ok(ReadOutcome::Interrupted) | Ok(ReadOutcome::Eof) => break,
            Err(e) => {
                log::error!("Reading input failed: {}", e);
                break;
            }
        }
    }
    log::info!("Session ended");
    ctx.flush();
}
