//! Host platform identification.

use std::fmt;

/// Host operating system.
///
/// Names follow the conventional `win32` / `darwin` / `linux` identifiers
/// used by terminal tooling; [`Platform::from_name`] also accepts Rust
/// `target_os` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Android,
    Aix,
    SunOs,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "freebsd") {
            Platform::FreeBsd
        } else if cfg!(target_os = "openbsd") {
            Platform::OpenBsd
        } else if cfg!(target_os = "netbsd") {
            Platform::NetBsd
        } else if cfg!(target_os = "aix") {
            Platform::Aix
        } else if cfg!(any(target_os = "solaris", target_os = "illumos")) {
            Platform::SunOs
        } else {
            Platform::Other
        }
    }

    /// Look up a platform by name. Unknown names map to [`Platform::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "win32" | "windows" => Platform::Windows,
            "darwin" | "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "freebsd" => Platform::FreeBsd,
            "openbsd" => Platform::OpenBsd,
            "netbsd" => Platform::NetBsd,
            "android" => Platform::Android,
            "aix" => Platform::Aix,
            "sunos" | "solaris" | "illumos" => Platform::SunOs,
            _ => Platform::Other,
        }
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::MacOs => "darwin",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
            Platform::OpenBsd => "openbsd",
            Platform::NetBsd => "netbsd",
            Platform::Android => "android",
            Platform::Aix => "aix",
            Platform::SunOs => "sunos",
            Platform::Other => "other",
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Platform::from_name("win32"), Platform::Windows);
        assert_eq!(Platform::from_name("Windows"), Platform::Windows);
        assert_eq!(Platform::from_name("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_name("illumos"), Platform::SunOs);
        assert_eq!(Platform::from_name("plan9"), Platform::Other);
        assert_eq!(Platform::from_name(""), Platform::Other);
    }

    #[test]
    fn test_name_lookup_is_stable() {
        for platform in [
            Platform::Windows,
            Platform::MacOs,
            Platform::Linux,
            Platform::FreeBsd,
            Platform::OpenBsd,
            Platform::NetBsd,
            Platform::Android,
            Platform::Aix,
            Platform::SunOs,
            Platform::Other,
        ] {
            assert_eq!(Platform::from_name(platform.as_str()), platform);
        }
    }

    #[test]
    fn test_current_matches_target() {
        assert_eq!(Platform::current().is_windows(), cfg!(windows));
    }
}
