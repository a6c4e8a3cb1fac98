//! Mouse-reporting protocols and the detector's output value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Escape-sequence convention a terminal uses to report pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseProtocol {
    /// xterm mouse reporting
    Xterm,
}

impl MouseProtocol {
    /// Every known protocol
    pub const ALL: [MouseProtocol; 1] = [MouseProtocol::Xterm];

    pub fn as_str(&self) -> &'static str {
        match self {
            MouseProtocol::Xterm => "xterm",
        }
    }
}

impl fmt::Display for MouseProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mouse protocol: {0}")]
pub struct UnknownProtocol(pub String);

impl FromStr for MouseProtocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProtocol(s.to_string()))
    }
}

/// Whether to enable mouse reporting, and with which protocol.
///
/// A protocol is present exactly when mouse reporting is supported; the
/// type only stores the protocol so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseSupport {
    protocol: Option<MouseProtocol>,
}

impl MouseSupport {
    pub const fn supported(protocol: MouseProtocol) -> Self {
        Self {
            protocol: Some(protocol),
        }
    }

    pub const fn unsupported() -> Self {
        Self { protocol: None }
    }

    /// Whether mouse reporting should be enabled
    pub fn mouse(&self) -> bool {
        self.protocol.is_some()
    }

    /// Protocol to enable; `None` when unsupported
    pub fn mouse_protocol(&self) -> Option<MouseProtocol> {
        self.protocol
    }
}

impl fmt::Display for MouseSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.protocol {
            Some(protocol) => write!(f, "yes ({})", protocol),
            None => f.write_str("no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_lookup() {
        assert_eq!("xterm".parse::<MouseProtocol>(), Ok(MouseProtocol::Xterm));
        assert_eq!(" XTERM ".parse::<MouseProtocol>(), Ok(MouseProtocol::Xterm));
        assert_eq!(
            "sgr".parse::<MouseProtocol>(),
            Err(UnknownProtocol("sgr".to_string()))
        );
        assert_eq!(MouseProtocol::Xterm.to_string(), "xterm");
    }

    #[test]
    fn test_support_invariant() {
        let on = MouseSupport::supported(MouseProtocol::Xterm);
        assert!(on.mouse());
        assert_eq!(on.mouse_protocol(), Some(MouseProtocol::Xterm));

        let off = MouseSupport::unsupported();
        assert!(!off.mouse());
        assert_eq!(off.mouse_protocol(), None);
        assert_eq!(MouseSupport::default(), off);
    }

    #[test]
    fn test_support_display() {
        assert_eq!(
            MouseSupport::supported(MouseProtocol::Xterm).to_string(),
            "yes (xterm)"
        );
        assert_eq!(MouseSupport::unsupported().to_string(), "no");
    }
}
