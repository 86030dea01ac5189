use crate::error::{LaunchError, LaunchResult};
use crate::types::{installed_file_name, ComponentState};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const PROBE_TEXT: &str = "Hello world";

/// Check whether a deployed launcher is present and behaves like a shell
#[derive(Debug)]
pub struct ComponentProbe {
    path: PathBuf,
}

impl ComponentProbe {
    /// Probe the launcher installed under its versioned name in `dir`
    pub fn in_directory(dir: impl AsRef<Path>) -> Self {
        ComponentProbe {
            path: dir.as_ref().join(installed_file_name()),
        }
    }

    /// Probe an executable at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ComponentProbe { path: path.into() }
    }

    /// The path being probed
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Determine the state of the launcher.
    ///
    /// A missing or non-executable file is `NotInstalled`. Otherwise the file is run with
    /// `echo "Hello world"` on stdin and is `Installed` only if it exits successfully having
    /// printed exactly that text. A file the OS refuses to run is `Error`.
    pub fn state(&self) -> LaunchResult<ComponentState> {
        if !is_executable(&self.path) {
            return Ok(ComponentState::NotInstalled);
        }

        let mut child = match Command::new(&self.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            // Removed between the permission check and the spawn
            Err(e) if !self.path.exists() => {
                tracing::debug!(path = ?self.path, error = %e, "probe target disappeared");
                return Ok(ComponentState::NotInstalled);
            }
            Err(e) => {
                tracing::debug!(path = ?self.path, error = %e, "probe target cannot be run");
                return Ok(ComponentState::Error);
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            // The child may exit without reading, which only shows up in its output
            if let Err(e) = writeln!(stdin, "echo \"{}\"", PROBE_TEXT) {
                tracing::debug!(path = ?self.path, error = %e, "probe input not accepted");
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| self.probe_failed(source))?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        if output.status.success() && stdout.trim_end_matches(['\r', '\n']) == PROBE_TEXT {
            Ok(ComponentState::Installed)
        } else {
            tracing::debug!(path = ?self.path, status = %output.status, %stdout, "probe mismatch");
            Ok(ComponentState::Error)
        }
    }

    /// Copy `local_asset` to the probed path, mark it executable and report the resulting state.
    ///
    /// A missing asset is `Error` and leaves the install path untouched.
    pub fn install(&self, local_asset: impl AsRef<Path>) -> LaunchResult<ComponentState> {
        let local_asset = local_asset.as_ref();
        if !local_asset.is_file() {
            tracing::debug!(asset = ?local_asset, "launcher asset missing");
            return Ok(ComponentState::Error);
        }

        std::fs::copy(local_asset, &self.path).map_err(|source| self.install_failed(source))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o755))
                .map_err(|source| self.install_failed(source))?;
        }

        self.state()
    }

    fn install_failed(&self, source: std::io::Error) -> LaunchError {
        LaunchError::InstallFailed {
            path: self.path.clone(),
            source,
        }
    }

    fn probe_failed(&self, source: std::io::Error) -> LaunchError {
        LaunchError::ProbeFailed {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
