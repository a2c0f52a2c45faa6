//! Named rule-set registry and the built-in `doc` and `log` sets.
//!
//! A [`RuleRegistry`] is assembled once at startup and then handed to a
//! [`Styler`](crate::Styler); it is not mutated afterwards. Lookup of an
//! unregistered name returns `None`, which the engine treats as "leave
//! the text alone" rather than as an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::codec::StyleSpec;
use crate::error::Result;
use crate::rule::{Rule, RuleSet};

/// Rules for documentation and help text:
///
/// - lines starting with `>` (after indentation) are command lines → blue
/// - lines ending with `:` (ASCII or full-width) are headings → bold yellow
/// - `-word` tokens are command-line options → cyan
/// - `#` to end of line is a comment → dim green
static DOC: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new(
        "doc",
        vec![
            rule(r"^[ \t]*>.*$", StyleSpec::new().fore("blue")),
            rule(r"^.*?[:：][ \t]*$", StyleSpec::new().mode("bold").fore("yellow")),
            rule(r"(?:^|\s+)-[\w\-]+?(?:$|\s+)", StyleSpec::new().fore("cyan")),
            rule(r"#.*$", StyleSpec::new().mode("dim").fore("green")),
        ],
    )
});

/// Rules for log lines: `[*]` info → blue, `[-]`/`[+]` notice → yellow,
/// `[!]` error → red.
static LOG: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new(
        "log",
        vec![
            rule(r"^\[\*\]", StyleSpec::new().fore("blue")),
            rule(r"^\[(?:-|\+)\]", StyleSpec::new().fore("yellow")),
            rule(r"^\[!\]", StyleSpec::new().fore("red")),
        ],
    )
});

fn rule(pattern: &str, spec: StyleSpec) -> Rule {
    // Built-in patterns are literals; a failure here is a bug in this file.
    Rule::style(pattern, spec).expect("built-in rule pattern")
}

/// Holds named rule sets; immutable once the engine is built from it.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    sets: HashMap<String, RuleSet>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the built-in `doc` and `log` sets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(DOC.clone());
        registry.register(LOG.clone());
        registry
    }

    /// Registers a rule set under its own name.
    ///
    /// Registering a second set with the same name replaces the first,
    /// so callers can override a built-in.
    pub fn register(&mut self, set: RuleSet) {
        self.sets.insert(set.name().to_string(), set);
    }

    /// Parses a YAML rule-set definition and registers it.
    pub fn register_yaml(&mut self, source: &str) -> Result<()> {
        self.register(RuleSet::from_yaml(source)?);
        Ok(())
    }

    /// Looks up a rule set by name.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.sets.get(name)
    }

    /// Registered set names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}
