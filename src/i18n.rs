//! Language tables.
//!
//! A table maps every [`MessageKey`] to a template. Files live in the languages
//! directory as `<code>.toml`, one `key = "text"` pair per message. A file that
//! misses any key is rejected at load time, so lookups never fail later.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LANGUAGE: &str = "en_US";

macro_rules! message_keys {
    ($($variant:ident => $key:literal, $default:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)*
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)*];

            /// Name of the key inside a language file.
            pub fn key(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)*
                }
            }

            /// English text, used by the built-in table.
            pub fn default_text(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $default,)*
                }
            }
        }
    };
}

message_keys! {
    Prompt => "prompt", "> ";
    CalcPrompt => "calc_prompt", "calc> ";
    AvailableCommands => "available_commands", "Available commands:";
    HelpCd => "help_cd", "change the current directory";
    HelpTree => "help_tree", "show the directory tree";
    HelpDu => "help_du", "show the total size of a directory";
    HelpProcessList => "help_process_list", "list running processes, optionally filtered by name";
    HelpKill => "help_kill", "terminate a process";
    HelpRun => "help_run", "run a script";
    HelpLang => "help_lang", "switch the interface language";
    HelpTheme => "help_theme", "load a color theme";
    HelpThemeReset => "help_theme_reset", "reset the theme to defaults";
    HelpSystemInfo => "help_system_info", "show system information";
    HelpCalc => "help_calc", "open the calculator";
    HelpClear => "help_clear", "clear the screen";
    HelpHelp => "help_help", "show this help";
    HelpExit => "help_exit", "leave the shell";
    CommandNotFound => "command_not_found", "Command not found: {name}";
    InvalidInput => "invalid_input", "Input error: {detail}";
    NotFound => "not_found", "Not found: {subject}";
    NotADirectory => "not_a_directory", "'{subject}' is not a directory.";
    PermissionDenied => "permission_denied", "Permission denied: {subject}";
    OsError => "os_error", "OS error: {detail}";
    Unsupported => "unsupported", "{feature} is not supported on this platform.";
    ExternalFailed => "external_failed", "Command '{name}' failed: {detail}";
    ExitStatus => "exit_status", "'{name}' exited with code {code}.";
    DirChanged => "dir_changed", "Current directory changed to: {path}";
    CurrentDir => "current_dir", "Current directory: {path}";
    DiskUsage => "disk_usage", "Size of '{path}': {size} MB";
    ProcessHeader => "process_header", "PID\tName\t\t% CPU";
    KillUsage => "kill_usage", "Specify the PID of the process to terminate.";
    KillInvalidPid => "kill_invalid_pid", "Invalid PID '{pid}'. Enter a positive integer.";
    KillSuccess => "kill_success", "Process with PID {pid} terminated.";
    ScriptUsage => "script_usage", "Specify the path to a script.";
    ScriptOutput => "script_output", "Script output:";
    ScriptFailed => "script_failed", "Script '{path}' exited with code {code}.";
    ScriptErrors => "script_errors", "Script errors:";
    CurrentLanguage => "current_language", "Current language: {code}";
    LanguageChanged => "language_changed", "Language switched to {code}.";
    LanguageFallback => "language_fallback", "Could not load language '{code}' ({detail}). Using English by default.";
    ThemeApplied => "theme_applied", "Theme applied: {path}";
    ThemeReset => "theme_reset", "Theme reset to defaults.";
    CurrentTheme => "current_theme", "Current theme: {path}";
    NoTheme => "no_theme", "No theme set, using default settings.";
    ThemeLoadFailed => "theme_load_failed", "Could not load theme file '{path}' ({detail}). Using default settings.";
    ConfigLoadFailed => "config_load_failed", "Could not read configuration file '{path}' ({detail}). Using default settings.";
    ConfigSaveFailed => "config_save_failed", "Could not write configuration file: {detail}";
    CalcBanner => "calc_banner", "Calculator mode. Type 'exit' to return.";
    CalcError => "calc_error", "Evaluation error: {detail}";
    CalcDivisionByZero => "calc_division_by_zero", "Error: division by zero.";
    CalcEmpty => "calc_empty", "empty expression";
    CalcUnexpectedChar => "calc_unexpected_char", "unexpected character '{ch}' at position {pos}";
    CalcUnknownIdentifier => "calc_unknown_identifier", "unknown identifier '{name}'";
    CalcUnsupportedLiteral => "calc_unsupported_literal", "unsupported literal '{literal}'";
    CalcUnexpectedToken => "calc_unexpected_token", "unexpected token '{token}'";
    CalcUnexpectedEnd => "calc_unexpected_end", "unexpected end of expression";
    CalcTooLong => "calc_too_long", "expression is longer than {limit} tokens";
    CalcOverflow => "calc_overflow", "result is out of range";
    SystemInfoHeader => "system_info_header", "=== System information ===";
    SysHost => "sys_host", "Host name: {value}";
    SysOs => "sys_os", "Operating system: {value}";
    SysCpus => "sys_cpus", "CPUs: {value}";
    SysLoad => "sys_load", "Load average: {value}";
    SysMemTotal => "sys_mem_total", "Memory: {value} GB";
    SysMemAvailable => "sys_mem_available", "Free memory: {value} GB";
    Unknown => "unknown", "unknown";
}

#[derive(Debug, Error)]
pub enum LangError {
    #[error("invalid language code '{0}'")]
    InvalidCode(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed language file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("language file {path} is missing keys: {}", .keys.join(", "))]
    MissingKeys {
        path: PathBuf,
        keys: Vec<&'static str>,
    },
}

#[derive(Debug, Clone)]
pub struct LangTable {
    code: String,
    messages: HashMap<MessageKey, String>,
}

impl LangTable {
    /// The English table compiled into the binary. Always usable.
    pub fn builtin() -> Self {
        let messages = MessageKey::ALL
            .iter()
            .map(|k| (*k, k.default_text().to_string()))
            .collect();
        Self {
            code: DEFAULT_LANGUAGE.to_string(),
            messages,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or(key.default_text())
    }

    /// Renders a template, replacing each `{name}` with its value.
    pub fn fill(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        render(self.text(key), args)
    }

    pub fn parse(code: &str, content: &str, path: &Path) -> Result<Self, LangError> {
        let raw: HashMap<String, String> =
            toml::from_str(content).map_err(|source| LangError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut messages = HashMap::new();
        let mut missing = Vec::new();
        for key in MessageKey::ALL {
            match raw.get(key.key()) {
                Some(text) => {
                    messages.insert(*key, text.clone());
                }
                None => missing.push(key.key()),
            }
        }
        if !missing.is_empty() {
            return Err(LangError::MissingKeys {
                path: path.to_path_buf(),
                keys: missing,
            });
        }

        for name in raw.keys() {
            if !MessageKey::ALL.iter().any(|k| k.key() == name) {
                log::warn!("Ignoring unknown key '{}' in {}", name, path.display());
            }
        }

        Ok(Self {
            code: code.to_string(),
            messages,
        })
    }
}

/// Single pass over the template: substituted values are never scanned
/// again, and unknown placeholders are kept as written.
fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Codes become file names, so only plain identifiers are accepted.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn language_file(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{}.toml", code))
}

pub fn load_language(dir: &Path, code: &str) -> Result<LangTable, LangError> {
    if !is_valid_code(code) {
        return Err(LangError::InvalidCode(code.to_string()));
    }
    let path = language_file(dir, code);
    log::debug!("Loading language file {}", path.display());
    let content = fs::read_to_string(&path).map_err(|source| LangError::Io {
        path: path.clone(),
        source,
    })?;
    LangTable::parse(code, &content, &path)
}

/// Loads `code`, or falls back to the built-in table.
///
/// The error is handed back so the caller can tell the user about the
/// fallback. A missing file for the default language is not worth a warning.
pub fn load_or_builtin(dir: &Path, code: &str) -> (LangTable, Option<LangError>) {
    match load_language(dir, code) {
        Ok(table) => (table, None),
        Err(LangError::Io { ref source, .. })
            if code == DEFAULT_LANGUAGE && source.kind() == std::io::ErrorKind::NotFound =>
        {
            (LangTable::builtin(), None)
        }
        Err(e) => {
            log::warn!("Falling back to built-in language table: {}", e);
            (LangTable::builtin(), Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn full_table_toml() -> String {
        MessageKey::ALL
            .iter()
            .map(|k| format!("{} = {:?}\n", k.key(), format!("[x] {}", k.default_text())))
            .collect()
    }

    #[test]
    fn test_builtin_has_every_key() {
        let table = LangTable::builtin();
        assert_eq!(table.code(), DEFAULT_LANGUAGE);
        for key in MessageKey::ALL {
            assert_eq!(table.text(*key), key.default_text());
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut names: Vec<_> = MessageKey::ALL.iter().map(|k| k.key()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_fill_placeholders() {
        let table = LangTable::builtin();
        assert_eq!(
            table.fill(MessageKey::ExitStatus, &[("name", "ls"), ("code", "2")]),
            "'ls' exited with code 2."
        );
    }

    #[test]
    fn test_fill_does_not_expand_values() {
        let table = LangTable::builtin();
        assert_eq!(
            table.fill(MessageKey::ExitStatus, &[("name", "{code}"), ("code", "2")]),
            "'{code}' exited with code 2."
        );
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        assert_eq!(render("{a} {b} {", &[("a", "x")]), "x {b} {");
        assert_eq!(render("{{a}}", &[("a", "x")]), "{x}");
        assert_eq!(render("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_parse_rejects_missing_keys() {
        let res = LangTable::parse("xx", "prompt = \"$ \"\n", Path::new("xx.toml"));
        match res {
            Err(LangError::MissingKeys { keys, .. }) => {
                assert!(keys.contains(&"command_not_found"));
                assert!(!keys.contains(&"prompt"));
            }
            other => panic!("Expected MissingKeys, got {:?}", other.map(|t| t.code)),
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let res = LangTable::parse("xx", "prompt = ", Path::new("xx.toml"));
        assert!(matches!(res, Err(LangError::Malformed { .. })));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(language_file(dir.path(), "xx_XX"), full_table_toml()).unwrap();

        let table = load_language(dir.path(), "xx_XX").unwrap();
        assert_eq!(table.code(), "xx_XX");
        assert_eq!(table.text(MessageKey::Prompt), "[x] > ");
    }

    #[test]
    fn test_invalid_code_never_touches_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_language(dir.path(), "../../etc/passwd"),
            Err(LangError::InvalidCode(_))
        ));
        assert!(!is_valid_code(""));
        assert!(is_valid_code("ru_RU"));
    }

    #[test]
    fn test_fallback_reports_error() {
        let dir = tempfile::tempdir().unwrap();

        let (table, err) = load_or_builtin(dir.path(), "de_DE");
        assert_eq!(table.code(), DEFAULT_LANGUAGE);
        assert!(err.is_some());

        // The default language does not need a file on disk
        let (table, err) = load_or_builtin(dir.path(), DEFAULT_LANGUAGE);
        assert_eq!(table.code(), DEFAULT_LANGUAGE);
        assert!(err.is_none());
    }

    #[test]
    fn test_shipped_tables_are_complete() {
        let shipped = [
            ("en_US", include_str!("../languages/en_US.toml")),
            ("ru_RU", include_str!("../languages/ru_RU.toml")),
        ];
        for (code, content) in shipped {
            let table = LangTable::parse(code, content, Path::new(code)).unwrap();
            assert_eq!(table.code(), code);
        }
    }
}
