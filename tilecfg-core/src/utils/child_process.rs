//! Runs the autostart script once per process.
use crate::errors::{Result, TileError};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use xdg::BaseDirectories;

/// File name of the autostart script inside the config directory.
pub const AUTOSTART_SCRIPT: &str = "autostart.sh";

/// Why the runtime (re)evaluated the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupKind {
    /// The runtime process just started.
    Initial,
    /// The configuration was reloaded inside a running process.
    Reload,
}

/// Owns the startup hook. The runtime keeps a single `Nanny` for its whole lifetime.
#[derive(Debug)]
pub struct Nanny {
    script: PathBuf,
    fired: AtomicBool,
    child: Mutex<Option<Child>>,
}

impl Nanny {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            fired: AtomicBool::new(false),
            child: Mutex::new(None),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Whether the startup hook already ran.
    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Startup hook. Spawns the script on the first initial startup only.
    ///
    /// The child is never blocked on: it is reaped by later calls once it exits,
    /// and a failing spawn is only logged. Returns whether a spawn was attempted.
    pub fn on_startup(&self, kind: StartupKind) -> bool {
        self.remove_finished_child();
        if kind == StartupKind::Reload {
            log::debug!("Config reloaded, not running {}", self.script.display());
            return false;
        }
        if self.fired.swap(true, Ordering::SeqCst) {
            log::debug!("Autostart already ran");
            return false;
        }
        match run_script(&self.script) {
            Ok(child) => {
                log::info!(
                    "Started autostart script {} (pid {})",
                    self.script.display(),
                    child.id()
                );
                if let Ok(mut slot) = self.child.lock() {
                    *slot = Some(child);
                }
            }
            Err(err) => log::warn!(
                "Unable to run autostart script {}: {}",
                self.script.display(),
                err
            ),
        }
        true
    }

    /// Reap the autostart child if it has exited.
    /// Returns whether a child is still running.
    pub fn remove_finished_child(&self) -> bool {
        let mut slot = match self.child.lock() {
            Ok(slot) => slot,
            Err(_) => return false,
        };
        let finished = match slot.as_mut().map(Child::try_wait) {
            None => return false,
            Some(Ok(Some(status))) => {
                log::debug!("Autostart script exited with {}", status);
                true
            }
            Some(Ok(None)) => false,
            Some(Err(err)) => {
                log::warn!("Unable to query autostart script: {}", err);
                true
            }
        };
        if finished {
            *slot = None;
        }
        !finished
    }
}

/// Default location of the autostart script: `autostart.sh` in the config directory.
///
/// # Errors
///
/// Will error if neither xdg nor the platform report a config directory.
pub fn autostart_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(AUTOSTART_SCRIPT))
}

/// Retrieve the path to the config directory. Tries to create it if it does not exist.
///
/// # Errors
///
/// Will error if unable to open or create the config directory and the platform does not
/// report one either.
pub fn get_config_dir() -> Result<PathBuf> {
    match BaseDirectories::with_prefix("tilecfg")
        .map_err(TileError::from)
        .and_then(|dirs| dirs.create_config_directory("").map_err(Into::into))
    {
        Ok(path) => Ok(path),
        Err(err) => {
            log::debug!("xdg config directory unavailable: {}", err);
            dirs_next::config_dir()
                .map(|dir| dir.join("tilecfg"))
                .ok_or(TileError::NoConfigDir)
        }
    }
}

fn run_script(path: &Path) -> Result<Child> {
    Command::new(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::thread;
    use std::time::{Duration, Instant};

    fn write_script(dir: &Path, marker: &Path) -> PathBuf {
        let script = dir.join(AUTOSTART_SCRIPT);
        fs::write(
            &script,
            format!("#!/bin/sh\necho ran >> '{}'\n", marker.display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn wait_until_reaped(nanny: &Nanny) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while nanny.remove_finished_child() {
            assert!(Instant::now() < deadline, "autostart script never exited");
            thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn script_runs_once_and_is_reaped() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");
        let nanny = Nanny::new(write_script(dir.path(), &marker));

        assert!(nanny.on_startup(StartupKind::Initial));
        wait_until_reaped(&nanny);
        assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\n");

        assert!(!nanny.on_startup(StartupKind::Initial));
        assert!(!nanny.on_startup(StartupKind::Reload));
        assert!(!nanny.remove_finished_child());
        thread::sleep(Duration::from_millis(200));
        assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\n");
    }

    #[test]
    fn reload_first_does_not_run_script() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");
        let nanny = Nanny::new(write_script(dir.path(), &marker));

        assert!(!nanny.on_startup(StartupKind::Reload));
        thread::sleep(Duration::from_millis(200));
        assert!(!marker.exists());
    }

    #[test]
    fn autostart_path_ends_in_script_name() {
        if let Ok(path) = autostart_path() {
            assert!(path.ends_with(Path::new("tilecfg").join(AUTOSTART_SCRIPT)));
        }
    }

    #[test]
    fn reload_never_spawns() {
        let nanny = Nanny::new("/bin/true");
        assert!(!nanny.on_startup(StartupKind::Reload));
        assert!(!nanny.fired());
        assert!(nanny.on_startup(StartupKind::Initial));
        assert!(!nanny.on_startup(StartupKind::Reload));
    }

    #[test]
    fn fires_at_most_once() {
        let nanny = Nanny::new("/bin/true");
        assert!(nanny.on_startup(StartupKind::Initial));
        assert!(nanny.fired());
        assert!(!nanny.on_startup(StartupKind::Initial));
    }

    #[test]
    fn missing_script_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let nanny = Nanny::new(dir.path().join(AUTOSTART_SCRIPT));
        assert!(nanny.on_startup(StartupKind::Initial));
        assert!(!nanny.on_startup(StartupKind::Initial));
    }

    #[test]
    fn script_name_is_autostart() {
        let nanny = Nanny::new("/home/user/.config/tilecfg/autostart.sh");
        assert_eq!(
            nanny.script().file_name().and_then(|name| name.to_str()),
            Some(AUTOSTART_SCRIPT)
        );
    }
}
