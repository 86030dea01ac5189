use crate::converter::{ConverterCache, PlatformConverterCache};
use crate::error::LaunchError;
use crate::types::TARGET_PATH;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Refresh the converter cache, then replace the current process with the target shell
#[derive(Debug)]
pub struct Launcher<C = PlatformConverterCache> {
    target: PathBuf,
    converter: C,
}

impl Launcher {
    /// Create a launcher for `/QOpenSys/usr/bin/qsh` using the platform converter cache
    pub fn new() -> Self {
        Launcher {
            target: PathBuf::from(TARGET_PATH),
            converter: PlatformConverterCache::default(),
        }
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ConverterCache> Launcher<C> {
    /// Hand control to `target` instead of the default shell
    pub fn target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    /// Use `converter` for the fix-up step
    pub fn converter<D: ConverterCache>(self, converter: D) -> Launcher<D> {
        Launcher {
            target: self.target,
            converter,
        }
    }

    /// The executable control is handed to
    pub fn target_path(&self) -> &Path {
        &self.target
    }

    /// The argument vector the target will receive.
    ///
    /// Argument zero is replaced with the target path, everything after it is kept as is.
    pub fn forwarded_args<I, S>(&self, args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        std::iter::once(self.target.clone().into_os_string())
            .chain(args.into_iter().skip(1).map(Into::into))
            .collect()
    }

    /// Refresh the converter cache and exec the target with `args`.
    ///
    /// Only returns if the target could not be started. On unix the target takes over this
    /// process, keeping its PID, open descriptors and environment. Elsewhere the target runs as
    /// a child with inherited standard streams and this process exits with the child's status,
    /// so the PID is not preserved.
    pub fn launch<I, S>(&self, args: I) -> LaunchError
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.refresh_converters();

        let argv = self.forwarded_args(args);
        tracing::trace!(?argv, target = ?self.target, "replacing process");

        self.replace(argv)
    }

    fn refresh_converters(&self) {
        let encoding = self.converter.current_default_encoding();
        if let Err(e) = self.converter.reinitialize(encoding) {
            tracing::debug!(%encoding, error = %e, "ignoring converter cache failure");
        }
    }

    #[cfg(unix)]
    fn replace(&self, argv: Vec<OsString>) -> LaunchError {
        use std::os::unix::process::CommandExt;

        let mut argv = argv.into_iter();
        let mut cmd = Command::new(&self.target);
        if let Some(arg0) = argv.next() {
            cmd.arg0(arg0);
        }
        cmd.args(argv);

        LaunchError::ReplacementFailed {
            target: self.target.clone(),
            source: cmd.exec(),
        }
    }

    #[cfg(not(unix))]
    fn replace(&self, argv: Vec<OsString>) -> LaunchError {
        match Command::new(&self.target).args(argv.into_iter().skip(1)).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(source) => LaunchError::ReplacementFailed {
                target: self.target.clone(),
                source,
            },
        }
    }
}
