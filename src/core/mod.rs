//! Core mouse-support classification.
//!
//! - **platform**: host operating system identifier
//! - **signals**: snapshot of the environment the decision depends on
//! - **protocol**: mouse-reporting protocols and the `MouseSupport` result
//! - **detector**: the decision itself
//!
//! # Data Flow
//!
//! ```text
//! process env ──► EnvironmentSignals ──► classify() ──► Detection
//!                  ├── Platform                          ├── MouseSupport
//!                  ├── is_tty                            │   └── MouseProtocol
//!                  └── TERM, TERM_PROGRAM,               └── DetectionRule
//!                      WT_SESSION, ConEmuPID
//! ```

pub mod platform;
pub mod signals;
pub mod protocol;
pub mod detector;

pub use platform::Platform;
pub use signals::EnvironmentSignals;
pub use protocol::{MouseProtocol, MouseSupport, UnknownProtocol};
pub use detector::{
    classify, detect_mouse_support, detect_mouse_support_with, get_mouse_support,
    is_mouse_capable_term, Detection, DetectionPolicy, DetectionRule,
};
