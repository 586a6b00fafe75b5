//! Opening generated files with the desktop's default application

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Hands a file to whatever the OS associates with it
pub trait Launcher {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Desktop families with different "open with default app" commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    /// Whether a non-zero exit status means the open failed
    ///
    /// Explorer exits with 1 even after handing the file off.
    fn exit_status_is_meaningful(self) -> bool {
        self != Platform::Windows
    }
}

/// Launcher backed by the platform's open command
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// The command that opens `path` on `platform`
    ///
    /// The path is always a single argument to a program that does not
    /// re-parse it, so `&`, `^` or `%` in a name cannot split the command.
    pub fn command(platform: Platform, path: &Path) -> Command {
        let program = match platform {
            Platform::Windows => "explorer",
            Platform::MacOs => "open",
            Platform::Unix => "xdg-open",
        };
        let mut command = Command::new(program);
        command.arg(path);
        command
    }
}

impl Launcher for SystemLauncher {
    /// Run the open command and wait for it to hand the file off
    fn open(&self, path: &Path) -> io::Result<()> {
        let platform = Platform::current();
        let status = Self::command(platform, path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if platform.exit_status_is_meaningful() && !status.success() {
            return Err(io::Error::other(format!("open command exited with {}", status)));
        }
        Ok(())
    }
}

/// Records open requests, optionally failing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub opened: std::cell::RefCell<Vec<std::path::PathBuf>>,
    pub fail: bool,
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn open(&self, path: &Path) -> io::Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
        } else {
            Ok(())
        }
    }
}
