use std::fmt;

/// Absolute path of the shell the launcher hands control to
pub const TARGET_PATH: &str = "/QOpenSys/usr/bin/qsh";

/// Name the launcher is deployed under by host tooling
pub const COMPONENT_NAME: &str = "cqsh";

/// Deployment version, bumped whenever the installed binary must be replaced
pub const COMPONENT_VERSION: u32 = 1;

/// The file name the launcher is installed as, e.g. `cqsh_1`
pub fn installed_file_name() -> String {
    format!("{}_{}", COMPONENT_NAME, COMPONENT_VERSION)
}

/// A platform character-encoding identifier (CCSID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingId(pub i32);

impl EncodingId {
    /// Placeholder used where the platform has no notion of a default CCSID
    pub const UNSPECIFIED: EncodingId = EncodingId(0);
    /// UTF-8
    pub const UTF8: EncodingId = EncodingId(1208);
}

impl fmt::Display for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of probing an installed launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentState {
    /// No executable file at the expected path
    NotInstalled,
    /// The file runs and behaves like a shell
    Installed,
    /// The file exists but did not pass the probe
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installed_name_carries_version() {
        assert_eq!("cqsh_1", installed_file_name());
    }
}
