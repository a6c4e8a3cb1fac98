//! Mouse-support detector.
//!
//! Rules are evaluated in order and the first one that matches decides:
//!
//! 1. Output is not an interactive terminal: unsupported.
//! 2. `TERM_PROGRAM=vscode`: xterm, on every platform.
//! 3. Windows host:
//!    - `WT_SESSION` set (Windows Terminal): xterm
//!    - `ConEmuPID` set (ConEmu / Cmder): disabled unless the policy enables it
//!    - anything else (plain console): unsupported
//! 4. `TERM` names a whitelisted terminal family: xterm.
//! 5. Otherwise unsupported.
//!
//! New terminals are added as further branches in [`classify`]; an unknown
//! terminal is never assumed to handle the mouse.

use std::fmt;

use super::protocol::{MouseProtocol, MouseSupport};
use super::signals::EnvironmentSignals;

/// `TERM` families (text before the first `-` or `.`) known to implement
/// xterm mouse reporting. Any value containing `xterm` also qualifies.
const MOUSE_TERM_FAMILIES: &[&str] = &[
    "rxvt",
    "screen",
    "tmux",
    "alacritty",
    "kitty",
    "wezterm",
    "foot",
    "ghostty",
];

/// Tunable branches of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionPolicy {
    /// Enable the mouse under ConEmu / Cmder. These terminals can report
    /// mouse events but it has been unreliable, so this is off by default.
    pub conemu_mouse: bool,
}

/// The branch that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionRule {
    NotInteractive,
    VsCode,
    WindowsTerminal,
    ConEmuDisabled,
    ConEmuEnabled,
    WindowsConsole,
    TermWhitelisted,
    Unrecognized,
    /// Mouse forced on by configuration
    ForcedOn,
    /// Mouse forced off by configuration
    ForcedOff,
}

impl DetectionRule {
    /// Short identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionRule::NotInteractive => "not-interactive",
            DetectionRule::VsCode => "vscode",
            DetectionRule::WindowsTerminal => "windows-terminal",
            DetectionRule::ConEmuDisabled => "conemu-disabled",
            DetectionRule::ConEmuEnabled => "conemu-enabled",
            DetectionRule::WindowsConsole => "windows-console",
            DetectionRule::TermWhitelisted => "term-whitelisted",
            DetectionRule::Unrecognized => "unrecognized",
            DetectionRule::ForcedOn => "forced-on",
            DetectionRule::ForcedOff => "forced-off",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DetectionRule::NotInteractive => "output is not an interactive terminal",
            DetectionRule::VsCode => "VS Code integrated terminal",
            DetectionRule::WindowsTerminal => "Windows Terminal (WT_SESSION)",
            DetectionRule::ConEmuDisabled => "ConEmu/Cmder (ConEmuPID), mouse disabled by policy",
            DetectionRule::ConEmuEnabled => "ConEmu/Cmder (ConEmuPID), mouse enabled by policy",
            DetectionRule::WindowsConsole => "Windows console without a recognized terminal",
            DetectionRule::TermWhitelisted => "TERM names a mouse-capable terminal",
            DetectionRule::Unrecognized => "TERM is unset or not a known mouse-capable terminal",
            DetectionRule::ForcedOn => "mouse forced on by configuration",
            DetectionRule::ForcedOff => "mouse forced off by configuration",
        }
    }
}

impl fmt::Display for DetectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A result together with the rule that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub support: MouseSupport,
    pub rule: DetectionRule,
}

impl Detection {
    fn new(rule: DetectionRule, protocol: Option<MouseProtocol>) -> Self {
        let support = match protocol {
            Some(protocol) => MouseSupport::supported(protocol),
            None => MouseSupport::unsupported(),
        };
        Self { support, rule }
    }

    pub(crate) fn forced(on: bool) -> Self {
        if on {
            Self::new(DetectionRule::ForcedOn, Some(MouseProtocol::Xterm))
        } else {
            Self::new(DetectionRule::ForcedOff, None)
        }
    }
}

/// Mouse support for the current process
pub fn get_mouse_support() -> MouseSupport {
    detect_mouse_support(&EnvironmentSignals::from_process())
}

/// Mouse support for `signals` under the default policy
pub fn detect_mouse_support(signals: &EnvironmentSignals) -> MouseSupport {
    detect_mouse_support_with(signals, &DetectionPolicy::default())
}

pub fn detect_mouse_support_with(
    signals: &EnvironmentSignals,
    policy: &DetectionPolicy,
) -> MouseSupport {
    classify(signals, policy).support
}

/// Run the decision and report which rule matched.
pub fn classify(signals: &EnvironmentSignals, policy: &DetectionPolicy) -> Detection {
    let detection = decide(signals, policy);
    tracing::debug!(
        platform = %signals.platform(),
        rule = %detection.rule,
        support = %detection.support,
        "mouse support classified"
    );
    detection
}

fn decide(signals: &EnvironmentSignals, policy: &DetectionPolicy) -> Detection {
    use DetectionRule::*;

    if !signals.is_interactive() {
        return Detection::new(NotInteractive, None);
    }

    if signals.term_program() == Some("vscode") {
        return Detection::new(VsCode, Some(MouseProtocol::Xterm));
    }

    if signals.platform().is_windows() {
        if signals.wt_session().is_some() {
            return Detection::new(WindowsTerminal, Some(MouseProtocol::Xterm));
        }
        if signals.conemu_pid().is_some() {
            // Capable, but kept off unless the policy opts in.
            return if policy.conemu_mouse {
                Detection::new(ConEmuEnabled, Some(MouseProtocol::Xterm))
            } else {
                Detection::new(ConEmuDisabled, None)
            };
        }
        return Detection::new(WindowsConsole, None);
    }

    match signals.term() {
        Some(term) if is_mouse_capable_term(term) => {
            Detection::new(TermWhitelisted, Some(MouseProtocol::Xterm))
        }
        _ => Detection::new(Unrecognized, None),
    }
}

/// Whether a `TERM` value names a whitelisted terminal family
pub fn is_mouse_capable_term(term: &str) -> bool {
    let term = term.trim().to_ascii_lowercase();
    if term.contains("xterm") {
        return true;
    }
    let family = term.split(['-', '.']).next().unwrap_or_default();
    MOUSE_TERM_FAMILIES.contains(&family)
}
