use std::io;
use std::process::Command;

/// Side effects reachable from directive handlers.
///
/// The engine never touches the environment, clipboard, shell, or
/// filesystem directly; everything goes through this trait so expansion can
/// be exercised without real side effects.
pub trait Host {
    /// Looks up an environment variable.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Reads text from the system clipboard.
    ///
    /// Returns `None` when the clipboard is unavailable or holds no text.
    fn read_clipboard(&mut self) -> Option<String>;

    /// Runs a shell command synchronously and captures its standard output.
    fn run_command(&mut self, command: &str) -> io::Result<String>;

    /// Reads a file's full contents.
    fn read_file(&mut self, path: &str) -> io::Result<String>;
}

/// Production host backed by the operating system.
///
/// Commands run through the platform shell with no timeout: a hanging
/// command blocks the expansion until it exits.
pub struct SystemHost;

impl Host for SystemHost {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn read_clipboard(&mut self) -> Option<String> {
        crate::clipboard::read_text()
    }

    fn run_command(&mut self, command: &str) -> io::Result<String> {
        let (shell, flag) = get_shell_command();
        let output = Command::new(shell).arg(flag).arg(command).output()?;
        if !output.status.success() {
            log::debug!("command '{command}' exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn read_file(&mut self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Returns the appropriate shell command and flag for the current platform.
const fn get_shell_command() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
