//! The styling engine: applies named rule sets to text.
//!
//! A [`Styler`] bundles a [`RuleRegistry`] with a [`StyleMode`] and is the
//! handle callers pass around. Both are fixed at construction, so a
//! `Styler` can be shared across threads without any run-time toggle to
//! race on.
//!
//! # Application order
//!
//! Rules run sequentially over the whole string: rule *n+1* sees the
//! output of rule *n*, escape sequences included. This is deliberate and
//! must not be collapsed into one combined pattern; the sequential fold
//! is what gives overlapping rules their defined semantics. Cost is
//! O(rules × text length) per call, every rule evaluated unconditionally.
//!
//! Rule authors are responsible for patterns that cannot match the escape
//! character, otherwise a later rule may tear sequences inserted by an
//! earlier one. Input text is normalized first (see [`normalize`]) so
//! only engine-inserted sequences are ever present during application.
//!
//! # Example
//!
//! ```rust
//! use tinge::{RuleRegistry, StyleMode, Styler};
//!
//! let styler = Styler::new(RuleRegistry::with_builtins(), StyleMode::Ansi);
//! let line = styler.apply("[!] connection refused", "log");
//! assert!(line.starts_with("\x1b[0;0;31m[!]\x1b[0m"));
//!
//! // Unknown set names pass text through untouched.
//! assert_eq!(styler.apply("hello", "no-such-set"), "hello");
//! ```

use regex::Captures;

use crate::codec::{encode, StyleMode, StyleSpec};
use crate::registry::RuleRegistry;
use crate::rule::{RuleAction, RuleSet};

/// Upper bound on rule-set delegation depth.
///
/// Delegation is resolved at call time, so self-referential or mutually
/// referential sets are legal to register; past this depth the matched
/// span is returned unstyled instead of recursing further.
pub const MAX_DELEGATION_DEPTH: usize = 8;

/// Replaces every literal ESC (0x1B) byte with the printable text `\x1b`.
///
/// Run over input before any rule is applied, so a pattern can never
/// reinterpret an escape sequence smuggled in by the caller. Idempotent
/// on text without ESC bytes.
pub fn normalize(text: &str) -> String {
    text.replace('\x1b', "\\x1b")
}

/// Applies named rule sets to text, producing SGR-styled output.
#[derive(Debug, Clone)]
pub struct Styler {
    registry: RuleRegistry,
    mode: StyleMode,
}

impl Styler {
    /// Creates a styler over `registry` with the given mode.
    pub fn new(registry: RuleRegistry, mode: StyleMode) -> Self {
        Self { registry, mode }
    }

    /// The styler's mode.
    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    /// The registry this styler resolves set names against.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Styles a whole string directly with `spec`, bypassing the rules.
    pub fn paint(&self, text: &str, spec: &StyleSpec) -> String {
        encode(text, spec, self.mode)
    }

    /// Applies the rule set named `set_name` to `text`.
    ///
    /// An unregistered name is a no-op, not an error: the input comes
    /// back unchanged. In [`StyleMode::Plain`] the input also comes back
    /// unchanged, whatever the rules would have matched.
    pub fn apply(&self, text: &str, set_name: &str) -> String {
        if self.mode == StyleMode::Plain {
            return text.to_string();
        }
        match self.registry.get(set_name) {
            Some(set) => self.apply_set(&normalize(text), set, 0),
            None => text.to_string(),
        }
    }

    fn apply_set(&self, text: &str, set: &RuleSet, depth: usize) -> String {
        let mut current = text.to_string();
        for rule in set.rules() {
            let next = rule
                .pattern()
                .replace_all(&current, |caps: &Captures| {
                    self.recolor(caps, rule.action(), depth)
                })
                .into_owned();
            current = next;
        }
        current
    }

    /// Produces the replacement for one match.
    fn recolor(&self, caps: &Captures, action: &RuleAction, depth: usize) -> String {
        let matched = &caps[0];
        match action {
            RuleAction::Delegate(set_name) => {
                if depth >= MAX_DELEGATION_DEPTH {
                    return matched.to_string();
                }
                match self.registry.get(set_name) {
                    Some(set) => self.apply_set(matched, set, depth + 1),
                    None => matched.to_string(),
                }
            }
            RuleAction::Style(spec) => {
                if caps.len() > 1 {
                    // Capture-scoped recoloring: every occurrence of each
                    // captured text inside the match, the rest untouched.
                    let mut result = matched.to_string();
                    for group in caps.iter().skip(1).flatten() {
                        if group.as_str().is_empty() {
                            continue;
                        }
                        result = result
                            .replace(group.as_str(), &encode(group.as_str(), spec, self.mode));
                    }
                    result
                } else {
                    encode(matched, spec, self.mode)
                }
            }
        }
    }
}

impl Default for Styler {
    /// Built-in `doc` and `log` sets, ANSI output.
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins(), StyleMode::Ansi)
    }
}
