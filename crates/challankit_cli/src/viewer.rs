//! Platform default-viewer launcher for saved challans.

use std::path::Path;
use std::process::{Child, Command};

/// Open `path` in the platform's default viewer. Failures are logged and
/// otherwise ignored; the challan is already saved at this point.
pub fn open_in_viewer(path: &Path) {
    if let Err(err) = spawn_viewer(path) {
        log::warn!("Failed to open {} in viewer: {err}", path.display());
    }
}

#[cfg(target_os = "windows")]
fn spawn_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("explorer").arg(path).spawn()
}

#[cfg(target_os = "macos")]
fn spawn_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("open").arg(path).spawn()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn spawn_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("xdg-open").arg(path).spawn()
}
