//! Tinge - Rule-driven SGR styling for terminal output.
//!
//! Tinge colors text by running an ordered list of regex rules over it and
//! wrapping what they match in CSI SGR escape sequences. Rules live in
//! named, immutable sets; a rule either applies a style directly or
//! delegates its matched span to another set, so structured output (help
//! text, log lines) composes out of small rule sets.
//!
//! # Quick Start
//!
//! ```rust
//! use tinge::{RuleRegistry, StyleMode, Styler};
//!
//! let styler = Styler::new(RuleRegistry::with_builtins(), StyleMode::Ansi);
//!
//! // The built-in "log" set colors bracketed status prefixes.
//! let line = styler.apply("[+] Local :4444 => 10.0.0.5:22", "log");
//! assert!(line.starts_with("\x1b[0;0;33m[+]\x1b[0m"));
//!
//! // The built-in "doc" set highlights help text.
//! let help = styler.apply("Usage:", "doc");
//! assert_eq!(help, "\x1b[0;1;33mUsage:\x1b[0m");
//! ```
//!
//! # Custom rule sets
//!
//! Sets can be registered from code or YAML before the [`Styler`] is
//! built; they are immutable afterwards:
//!
//! ```rust
//! use tinge::{RuleRegistry, StyleMode, Styler};
//!
//! let mut registry = RuleRegistry::with_builtins();
//! registry.register_yaml(r#"
//! name: ports
//! rules:
//!   - pattern: ":(\\d+)"
//!     style: {fore: cyan, mode: bold}
//! "#).unwrap();
//!
//! let styler = Styler::new(registry, StyleMode::Ansi);
//! assert_eq!(styler.apply("host:22", "ports"), "host:\x1b[0;1;36m22\x1b[0m");
//! ```
//!
//! # Tolerance policy
//!
//! Applying rules never fails. Unknown style identifiers resolve to the
//! reset code, unknown set names pass the input through unchanged, and
//! [`StyleMode::Plain`] turns the whole engine into the identity function.
//! Errors exist only at definition time ([`RuleError`]).

mod codec;
mod engine;
mod error;
mod registry;
mod rule;

// Re-export public API
pub use codec::{encode, StyleMode, StyleSpec, RESET};
pub use engine::{normalize, Styler, MAX_DELEGATION_DEPTH};
pub use error::{Result, RuleError};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleAction, RuleSet};
