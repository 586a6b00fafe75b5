//! Locating the badge template

use mail_merge::TEMPLATE_FILE_NAME;
use std::path::{Path, PathBuf};
use store::BadgeSettings;

/// Where the template was looked for and whether it is there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStatus {
    pub path: PathBuf,
    pub exists: bool,
}

impl TemplateStatus {
    pub fn check(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let exists = path.is_file();
        Self { path, exists }
    }

    /// One-line summary for the form
    pub fn status_line(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        let state = if self.exists { "found" } else { "missing" };
        format!("Template file: {} ({})", name, state)
    }
}

/// Resolve the template path from the usual places
///
/// Precedence: explicit path, configured path, next to the executable,
/// current directory.
pub fn resolve_template(explicit: Option<&Path>, settings: &BadgeSettings) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_template_in(explicit, settings, exe_dir.as_deref(), &cwd)
}

/// [`resolve_template`] with the executable and working directories given
pub fn resolve_template_in(
    explicit: Option<&Path>,
    settings: &BadgeSettings,
    exe_dir: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = settings.template_path.as_ref() {
        return path.clone();
    }
    if let Some(dir) = exe_dir {
        let candidate = dir.join(TEMPLATE_FILE_NAME);
        if candidate.is_file() {
            return candidate;
        }
    }
    cwd.join(TEMPLATE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_wins() {
        let settings = BadgeSettings {
            template_path: Some(PathBuf::from("configured.docx")),
            ..Default::default()
        };
        let path = resolve_template_in(
            Some(Path::new("given.docx")),
            &settings,
            None,
            Path::new("/work"),
        );
        assert_eq!(path, PathBuf::from("given.docx"));

        let path = resolve_template_in(None, &settings, None, Path::new("/work"));
        assert_eq!(path, PathBuf::from("configured.docx"));
    }

    #[test]
    fn test_exe_dir_then_cwd() {
        let exe = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let settings = BadgeSettings::default();

        let path = resolve_template_in(None, &settings, Some(exe.path()), cwd.path());
        assert_eq!(path, cwd.path().join(TEMPLATE_FILE_NAME));

        std::fs::write(exe.path().join(TEMPLATE_FILE_NAME), b"").unwrap();
        let path = resolve_template_in(None, &settings, Some(exe.path()), cwd.path());
        assert_eq!(path, exe.path().join(TEMPLATE_FILE_NAME));
    }

    #[test]
    fn test_status_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TEMPLATE_FILE_NAME);

        let status = TemplateStatus::check(&path);
        assert!(!status.exists);
        assert_eq!(status.status_line(), "Template file: template.docx (missing)");

        std::fs::write(&path, b"").unwrap();
        let status = TemplateStatus::check(&path);
        assert!(status.exists);
        assert_eq!(status.status_line(), "Template file: template.docx (found)");
    }
}
