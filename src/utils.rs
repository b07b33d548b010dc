use std::env;
use std::path::Path;

/// The user's shell: `$SHELL`, else the platform default.
pub fn detect_shell() -> String {
    env::var("SHELL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| if cfg!(windows) { "cmd".to_string() } else { "sh".to_string() })
}

/// Picks the program that runs `script`: the configured interpreter, else
/// one chosen by extension, else the user's shell. Returns the program and
/// the arguments that go before the script path.
pub fn script_interpreter(
    configured: Option<&str>,
    script: &Path,
) -> Result<(String, Vec<String>), shell_words::ParseError> {
    if let Some(configured) = configured.filter(|s| !s.trim().is_empty()) {
        // Stored as a command line so it can carry flags, e.g. "python3 -u"
        let mut words = shell_words::split(configured)?.into_iter();
        if let Some(program) = words.next() {
            return Ok((program, words.collect()));
        }
    }

    let ext = script
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let program = match ext.as_deref() {
        Some("py") if cfg!(windows) => "python".to_string(),
        Some("py") => "python3".to_string(),
        Some("sh") => "sh".to_string(),
        Some("ps1") => "powershell".to_string(),
        _ => detect_shell(),
    };

    // cmd needs /C to run a file and exit
    let flags = if is_cmd(&program) { vec!["/C".to_string()] } else { Vec::new() };
    Ok((program, flags))
}

fn is_cmd(program: &str) -> bool {
    let name = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(program);
    name.eq_ignore_ascii_case("cmd")
}

/// Bytes as megabytes with two decimals.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / (1024.0 * 1024.0))
}

/// Kilobytes as gigabytes with two decimals.
pub fn format_gb_from_kb(kb: u64) -> String {
    format!("{:.2}", kb as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_interpreter_wins() {
        let (program, flags) = script_interpreter(Some("python3 -u"), Path::new("job.sh")).unwrap();
        assert_eq!(program, "python3");
        assert_eq!(flags, vec!["-u"]);
    }

    #[test]
    fn test_interpreter_by_extension() {
        let (program, flags) = script_interpreter(None, Path::new("deploy.sh")).unwrap();
        assert_eq!(program, "sh");
        assert!(flags.is_empty());

        let (program, _) = script_interpreter(None, Path::new("tool.PY")).unwrap();
        assert_eq!(program, if cfg!(windows) { "python" } else { "python3" });

        let (program, _) = script_interpreter(Some("  "), Path::new("setup.ps1")).unwrap();
        assert_eq!(program, "powershell");
    }

    #[test]
    fn test_bad_configured_interpreter() {
        assert!(script_interpreter(Some("python3 'unterminated"), Path::new("a.py")).is_err());
    }

    #[test]
    fn test_cmd_detection() {
        assert!(is_cmd("cmd"));
        assert!(is_cmd("/mnt/c/Windows/System32/CMD.exe"));
        assert!(!is_cmd("/bin/bash"));
    }

    #[test]
    fn test_format_sizes() {
        assert_eq!(format_mb(0), "0.00");
        assert_eq!(format_mb(1024 * 1024 * 3 / 2), "1.50");
        assert_eq!(format_gb_from_kb(16 * 1024 * 1024), "16.00");
    }
}
