use crate::config::{ShellConfig, ShellPaths, load_config, save_config};
use crate::error::ShellError;
use crate::i18n::{DEFAULT_LANGUAGE, LangTable, MessageKey, load_or_builtin};
use crate::input::LineSource;
use crate::procinfo::ProcessTable;
use crate::shell::commands::CommandTable;
use crate::shell::commands::builtins::builtin_table;
use crate::shell::commands::system::Spawner;
use crate::theme::{ActiveTheme, Palette, load_theme};
use colored::{Color, Colorize};
use std::env;
use std::io::Write;
use std::sync::Arc;

/// Session state. Owned by the loop thread for the whole run; the working
/// directory is the process cwd and is not kept here.
pub struct ShellContext {
    pub lang: LangTable,
    pub theme: Option<ActiveTheme>,
    pub config: ShellConfig,
    pub paths: ShellPaths,
    pub registry: Arc<CommandTable>,
    pub spawner: Box<dyn Spawner>,
    pub processes: Box<dyn ProcessTable>,
    pub input: Box<dyn LineSource>,
    out: Box<dyn Write>,
}

impl ShellContext {
    pub fn new(
        paths: ShellPaths,
        spawner: Box<dyn Spawner>,
        processes: Box<dyn ProcessTable>,
        input: Box<dyn LineSource>,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            lang: LangTable::builtin(),
            theme: None,
            config: ShellConfig::default(),
            paths,
            registry: Arc::new(builtin_table()),
            spawner,
            processes,
            input,
            out,
        }
    }

    /// Restores the persisted config, language and theme. Each failure is
    /// reported and replaced by the default; none of them stops startup.
    pub fn load_session(&mut self) {
        match load_config(&self.paths.config_file) {
            Ok(config) => self.config = config,
            Err(e) => {
                let path = self.paths.config_file.display().to_string();
                let msg = self.msg(
                    MessageKey::ConfigLoadFailed,
                    &[("path", &path), ("detail", &format!("{:#}", e))],
                );
                self.fail(&msg);
            }
        }

        let code = self
            .config
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let (table, err) = load_or_builtin(&self.paths.languages_dir, &code);
        self.lang = table;
        if let Some(e) = err {
            let msg = self.msg(
                MessageKey::LanguageFallback,
                &[("code", &code), ("detail", &e.to_string())],
            );
            self.fail(&msg);
        }

        if let Some(path) = self.config.last_theme.clone() {
            match load_theme(&path) {
                Ok(theme) => {
                    log::info!("Restored theme {}", theme.path.display());
                    self.theme = Some(theme);
                }
                Err(e) => {
                    let msg = self.msg(
                        MessageKey::ThemeLoadFailed,
                        &[("path", &path.display().to_string()), ("detail", &format!("{:#}", e))],
                    );
                    self.fail(&msg);
                }
            }
        }
    }

    pub fn save_config(&mut self) {
        if let Err(e) = save_config(&self.paths.config_file, &self.config) {
            let msg = self.msg(MessageKey::ConfigSaveFailed, &[("detail", &format!("{:#}", e))]);
            self.fail(&msg);
        }
    }

    pub fn palette(&self) -> Palette {
        self.theme.as_ref().map(|t| t.palette).unwrap_or_default()
    }

    pub fn msg(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        self.lang.fill(key, args)
    }

    pub fn prompt(&self) -> String {
        let cwd = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let text = format!("{}{}", cwd, self.lang.text(MessageKey::Prompt));
        self.paint(&text, self.palette().prompt)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        let colored = text.color(color);
        match self.palette().background {
            Some(bg) => colored.on_color(bg).to_string(),
            None => colored.to_string(),
        }
    }

    /// Writes one line in the given color.
    pub fn line(&mut self, text: &str, color: Color) {
        let painted = self.paint(text, color);
        self.emit(&painted, true);
    }

    pub fn say(&mut self, text: &str) {
        self.line(text, self.palette().text);
    }

    pub fn header(&mut self, text: &str) {
        self.line(text, self.palette().header);
    }

    pub fn success(&mut self, text: &str) {
        self.line(text, self.palette().success);
    }

    pub fn fail(&mut self, text: &str) {
        self.line(text, self.palette().error);
    }

    /// Child output, passed through untouched.
    pub fn raw(&mut self, text: &str) {
        self.emit(text, !text.ends_with('\n'));
    }

    pub fn raw_error(&mut self, text: &str) {
        let painted = self.paint(text.trim_end_matches('\n'), self.palette().error);
        self.emit(&painted, true);
    }

    pub fn report(&mut self, err: &ShellError) {
        log::debug!("Reporting error: {:?}", err);
        let msg = match err {
            ShellError::Input(detail) => self.msg(MessageKey::InvalidInput, &[("detail", detail)]),
            ShellError::NotFound(subject) => self.msg(MessageKey::NotFound, &[("subject", subject)]),
            ShellError::NotADirectory(subject) => {
                self.msg(MessageKey::NotADirectory, &[("subject", subject)])
            }
            ShellError::PermissionDenied(subject) => {
                self.msg(MessageKey::PermissionDenied, &[("subject", subject)])
            }
            ShellError::CommandNotFound(name) => {
                self.msg(MessageKey::CommandNotFound, &[("name", name)])
            }
            ShellError::ExternalProcess { program, reason } => self.msg(
                MessageKey::ExternalFailed,
                &[("name", program), ("detail", reason)],
            ),
            ShellError::Unsupported(feature) => {
                self.msg(MessageKey::Unsupported, &[("feature", feature)])
            }
            ShellError::Os { subject, source } => self.msg(
                MessageKey::OsError,
                &[("detail", &format!("{}: {}", subject, source))],
            ),
        };
        self.fail(&msg);
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            log::debug!("Flush failed: {}", e);
        }
    }

    fn emit(&mut self, text: &str, newline: bool) {
        let result = if newline {
            writeln!(self.out, "{}", text)
        } else {
            write!(self.out, "{}", text)
        };
        if let Err(e) = result {
            log::debug!("Write to output failed: {}", e);
        }
    }
}
