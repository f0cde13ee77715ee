use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{}", yaml);
        Ok(())
    }

    /// Editor resolution order: `--editor`, `$EDITOR`, `$VISUAL`, platform default.
    pub fn resolve_editor(requested: Option<&str>) -> String {
        requested
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(Self::platform_editor)
    }

    fn platform_editor() -> String {
        if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    }

    /// Open `path` in the resolved editor, falling back to the platform
    /// default when the requested one cannot be run.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let first = Self::resolve_editor(editor);
        if matches!(Command::new(&first).arg(path).status(), Ok(s) if s.success()) {
            return Ok(first);
        }

        let fallback = Self::platform_editor();
        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            Ok(s) => Err(AppError::Config(format!("editor '{fallback}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("editor '{first}' unavailable: {e}"))),
        }
    }
}
