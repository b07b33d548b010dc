use anyhow::{Context, Result};
use colored::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Theme file contents. Each slot is a color name such as "cyan" or
/// "bright magenta"; unknown names keep the default for that slot.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeFile {
    pub prompt_color: Option<String>,
    pub text_color: Option<String>,
    pub error_color: Option<String>,
    pub header_color: Option<String>,
    pub success_color: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub prompt: Color,
    pub text: Color,
    pub error: Color,
    pub header: Color,
    pub success: Color,
    pub background: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            prompt: Color::Blue,
            text: Color::White,
            error: Color::Red,
            header: Color::Yellow,
            success: Color::Green,
            background: None,
        }
    }
}

impl Palette {
    pub fn from_theme(theme: &ThemeFile) -> Self {
        let base = Palette::default();
        Self {
            prompt: color_or(theme.prompt_color.as_deref(), base.prompt),
            text: color_or(theme.text_color.as_deref(), base.text),
            error: color_or(theme.error_color.as_deref(), base.error),
            header: color_or(theme.header_color.as_deref(), base.header),
            success: color_or(theme.success_color.as_deref(), base.success),
            background: background(theme.background_color.as_deref()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActiveTheme {
    pub path: PathBuf,
    pub palette: Palette,
}

fn color_or(name: Option<&str>, fallback: Color) -> Color {
    match name {
        Some(n) => n.trim().replace('_', " ").parse::<Color>().unwrap_or_else(|_| {
            log::warn!("Unknown color '{}', keeping default", n);
            fallback
        }),
        None => fallback,
    }
}

fn background(name: Option<&str>) -> Option<Color> {
    let name = name?.trim();
    if name.eq_ignore_ascii_case("reset") || name.eq_ignore_ascii_case("none") {
        return None;
    }
    name.replace('_', " ").parse::<Color>().ok()
}

pub fn load_theme(path: &Path) -> Result<ActiveTheme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    let file: ThemeFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse theme {}", path.display()))?;

    // Stored absolute so a later `cd` does not break reloading it on startup
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    Ok(ActiveTheme {
        path,
        palette: Palette::from_theme(&file),
    })
}
