// Calc command

use crate::calc::{self, EvalError, ParseError};
use crate::error::ShellError;
use crate::i18n::MessageKey;
use crate::input::ReadOutcome;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::parser::EXIT_KEYWORD;

pub struct CalcCommand;

impl Executable for CalcCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<(), ShellError> {
        let banner = ctx.lang.text(MessageKey::CalcBanner).to_string();
        ctx.header(&banner);

        loop {
            let prompt = ctx.paint(ctx.lang.text(MessageKey::CalcPrompt), ctx.palette().prompt);
            let line = match ctx.input.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Interrupted) | Ok(ReadOutcome::Eof) => break,
                Err(e) => {
                    log::error!("Reading calculator input failed: {}", e);
                    break;
                }
            };

            let expr = line.trim();
            if expr.is_empty() {
                continue;
            }
            if expr == EXIT_KEYWORD {
                break;
            }

            match calc::evaluate(expr) {
                Ok(value) => ctx.say(&calc::format_number(value)),
                Err(EvalError::DivisionByZero) => {
                    let msg = ctx.lang.text(MessageKey::CalcDivisionByZero).to_string();
                    ctx.fail(&msg);
                }
                Err(e) => {
                    log::debug!("Rejected expression {:?}: {}", expr, e);
                    let detail = describe(ctx, &e);
                    let msg = ctx.msg(MessageKey::CalcError, &[("detail", &detail)]);
                    ctx.fail(&msg);
                }
            }
            ctx.flush();
        }
        Ok(())
    }
}

/// The error in the active language.
fn describe(ctx: &ShellContext, err: &EvalError) -> String {
    match err {
        EvalError::Parse(parse) => match parse {
            ParseError::Empty => ctx.msg(MessageKey::CalcEmpty, &[]),
            ParseError::UnexpectedChar { ch, pos } => ctx.msg(
                MessageKey::CalcUnexpectedChar,
                &[("ch", &ch.to_string()), ("pos", &pos.to_string())],
            ),
            ParseError::UnknownIdentifier(name) => {
                ctx.msg(MessageKey::CalcUnknownIdentifier, &[("name", name)])
            }
            ParseError::UnsupportedLiteral(literal) => {
                ctx.msg(MessageKey::CalcUnsupportedLiteral, &[("literal", literal)])
            }
            ParseError::UnexpectedToken(token) => {
                ctx.msg(MessageKey::CalcUnexpectedToken, &[("token", token)])
            }
            ParseError::UnexpectedEnd => ctx.msg(MessageKey::CalcUnexpectedEnd, &[]),
            ParseError::TooLong(limit) => {
                ctx.msg(MessageKey::CalcTooLong, &[("limit", &limit.to_string())])
            }
        },
        EvalError::DivisionByZero => ctx.msg(MessageKey::CalcDivisionByZero, &[]),
        EvalError::Overflow => ctx.msg(MessageKey::CalcOverflow, &[]),
    }
}
