use crate::error::ShellError;

/// Ends the session. Matched on the whole trimmed line before tokenizing.
pub const EXIT_KEYWORD: &str = "exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Empty,
    Exit,
    Command { name: String, args: Vec<String> },
}

/// Shell-style split: quotes group words, backslash escapes. An unbalanced
/// quote is an input error.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    shell_words::split(line).map_err(|e| ShellError::Input(e.to_string()))
}

pub fn classify_line(line: &str) -> Result<Input, ShellError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Empty);
    }
    if line == EXIT_KEYWORD {
        return Ok(Input::Exit);
    }

    let mut tokens = tokenize(line)?.into_iter();
    match tokens.next() {
        None => Ok(Input::Empty),
        Some(name) => Ok(Input::Command {
            name,
            args: tokens.collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_argument_stays_whole() {
        assert_eq!(tokenize(r#"echo "a b""#).unwrap(), vec!["echo", "a b"]);
        assert_eq!(tokenize(r"echo a\ b 'c d'").unwrap(), vec!["echo", "a b", "c d"]);
    }

    #[test]
    fn test_unbalanced_quote_is_input_error() {
        assert!(matches!(tokenize(r#"echo "a"#), Err(ShellError::Input(_))));
        assert!(matches!(classify_line("echo 'a"), Err(ShellError::Input(_))));
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("").unwrap(), Input::Empty);
        assert_eq!(classify_line("   \t ").unwrap(), Input::Empty);
        assert_eq!(classify_line("  exit  ").unwrap(), Input::Exit);
        assert_eq!(
            classify_line("cd /tmp").unwrap(),
            Input::Command {
                name: "cd".to_string(),
                args: vec!["/tmp".to_string()],
            }
        );
    }

    #[test]
    fn test_exit_is_exact() {
        // Arguments or different case make it an ordinary command name
        assert!(matches!(classify_line("exit now").unwrap(), Input::Command { .. }));
        assert!(matches!(classify_line("EXIT").unwrap(), Input::Command { .. }));
    }
}
