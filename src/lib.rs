//! mousecap - decide whether the attached terminal handles the mouse
//!
//! Looks at the host platform, whether stdout is a terminal, and a handful of
//! environment variables (`TERM`, `TERM_PROGRAM`, `WT_SESSION`, `ConEmuPID`),
//! and answers whether a terminal UI should turn on mouse reporting and with
//! which protocol. Emitting the escape sequences and parsing the resulting
//! events is left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! let support = mousecap::get_mouse_support();
//! if let Some(protocol) = support.mouse_protocol() {
//!     println!("enable {} mouse reporting", protocol);
//! }
//! ```
//!
//! Decisions can be made against a synthetic environment:
//!
//! ```
//! use mousecap::{detect_mouse_support, EnvironmentSignals, MouseProtocol, Platform};
//!
//! let signals = EnvironmentSignals::new(Platform::Windows)
//!     .with_tty(true)
//!     .with_var("WT_SESSION", "3f2a");
//! assert_eq!(detect_mouse_support(&signals).mouse_protocol(), Some(MouseProtocol::Xterm));
//! ```

pub mod config;
pub mod core;

pub use crate::config::{Config, ConfigError, MouseMode, PolicyConfig};
pub use crate::core::*;
