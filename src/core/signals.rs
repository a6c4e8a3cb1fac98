//! Environment signals consumed by the mouse-support detector.
//!
//! The detector never reads the process environment directly. Everything it
//! looks at is captured here first, either from the live process
//! ([`EnvironmentSignals::from_process`]) or built by hand for tests and
//! embedding applications.

use std::env;

use super::platform::Platform;

/// Terminal type, e.g. `xterm-256color`
pub const TERM: &str = "TERM";
/// Hosting program, e.g. `vscode`
pub const TERM_PROGRAM: &str = "TERM_PROGRAM";
/// Set by Windows Terminal
pub const WT_SESSION: &str = "WT_SESSION";
/// Set by ConEmu and Cmder
pub const CONEMU_PID: &str = "ConEmuPID";

/// Every variable the detector looks at
pub const SIGNAL_VARS: [&str; 4] = [TERM, TERM_PROGRAM, WT_SESSION, CONEMU_PID];

/// Snapshot of everything that influences mouse support.
///
/// Empty variable values are stored as "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSignals {
    platform: Platform,
    is_tty: Option<bool>,
    term: Option<String>,
    term_program: Option<String>,
    wt_session: Option<String>,
    conemu_pid: Option<String>,
}

impl EnvironmentSignals {
    /// Signals for `platform` with unknown TTY status and no variables set
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            is_tty: None,
            term: None,
            term_program: None,
            wt_session: None,
            conemu_pid: None,
        }
    }

    /// Build from an arbitrary set of `(name, value)` pairs.
    ///
    /// Names outside [`SIGNAL_VARS`] are ignored.
    pub fn from_vars<I, K, V>(platform: Platform, is_tty: Option<bool>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut signals = Self::new(platform);
        signals.is_tty = is_tty;
        for (name, value) in vars {
            signals.set_var(name.as_ref(), value.into());
        }
        signals
    }

    /// Capture the live process environment.
    ///
    /// Interactivity is taken from stdout. Values that are not valid
    /// unicode are treated as unset.
    pub fn from_process() -> Self {
        use crossterm::tty::IsTty;

        let is_tty = std::io::stdout().is_tty();
        let vars = SIGNAL_VARS
            .iter()
            .filter_map(|name| env::var(name).ok().map(|value| (*name, value)));
        let signals = Self::from_vars(Platform::current(), Some(is_tty), vars);

        tracing::trace!(?signals, "captured environment signals");
        signals
    }

    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = Some(is_tty);
        self
    }

    pub fn with_var(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_var(name, value.into());
        self
    }

    fn set_var(&mut self, name: &str, value: String) {
        let slot = match name {
            TERM => &mut self.term,
            TERM_PROGRAM => &mut self.term_program,
            WT_SESSION => &mut self.wt_session,
            CONEMU_PID => &mut self.conemu_pid,
            _ => return,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Raw TTY flag; `None` when it was never determined
    pub fn is_tty(&self) -> Option<bool> {
        self.is_tty
    }

    /// Whether output goes to an interactive terminal. Unknown counts as no.
    pub fn is_interactive(&self) -> bool {
        self.is_tty.unwrap_or(false)
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn term_program(&self) -> Option<&str> {
        self.term_program.as_deref()
    }

    pub fn wt_session(&self) -> Option<&str> {
        self.wt_session.as_deref()
    }

    pub fn conemu_pid(&self) -> Option<&str> {
        self.conemu_pid.as_deref()
    }
}
