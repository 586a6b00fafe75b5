//! Generation commands shared by the form and the one-shot CLI

use crate::dialogs::Dialogs;
use crate::opener::Launcher;
use crate::state::FormState;
use mail_merge::{BadgeRequest, MergeEngine, MergeOptions, MergeResult};
use std::path::{Path, PathBuf};

// =============================================================================
// Context
// =============================================================================

/// Where a generation reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

impl GenerationContext {
    pub fn new(template: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output_dir: output_dir.into(),
        }
    }

    fn engine(&self) -> MergeEngine {
        MergeEngine::new(
            &self.template,
            MergeOptions::default().with_output_directory(&self.output_dir),
        )
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Generate one badge and report the outcome
///
/// Load and save failures are shown as error dialogs and returned. On
/// success the file is optionally opened; a failing launcher is ignored.
pub fn generate_badge(
    ctx: &GenerationContext,
    request: &BadgeRequest,
    auto_open: bool,
    dialogs: &mut dyn Dialogs,
    launcher: &dyn Launcher,
) -> mail_merge::Result<MergeResult> {
    let result = match ctx.engine().execute(request) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Badge generation failed: {}", e);
            dialogs.error("Error", &e.to_string());
            return Err(e);
        }
    };

    if auto_open {
        open_quietly(launcher, &result.output_path);
    }

    dialogs.info(
        "Done",
        &format!("Badge saved to:\n{}", result.output_path.display()),
    );
    Ok(result)
}

/// Validate the form and generate from it
///
/// Returns the output path, or `None` when validation or generation failed
/// (the user has already been told why).
pub fn submit_form(
    state: &FormState,
    ctx: &GenerationContext,
    dialogs: &mut dyn Dialogs,
    launcher: &dyn Launcher,
) -> Option<PathBuf> {
    let request = match state.validate() {
        Ok(request) => request,
        Err(e) => {
            dialogs.warning("Notice", &e.to_string());
            return None;
        }
    };

    generate_badge(ctx, &request, state.auto_open, dialogs, launcher)
        .ok()
        .map(|result| result.output_path)
}

fn open_quietly(launcher: &dyn Launcher, path: &Path) {
    if let Err(e) = launcher.open(path) {
        tracing::debug!("Could not open {}: {}", path.display(), e);
    }
}
