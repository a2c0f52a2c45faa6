//! Pattern-to-action rules and named rule sets.
//!
//! A [`Rule`] pairs a regular expression with an action: apply a
//! [`StyleSpec`] to what the pattern matched, or delegate the matched span
//! to another named rule set. A [`RuleSet`] is an ordered list of rules;
//! order is load-bearing, because each rule runs over the output of the
//! previous one (see [`Styler::apply`](crate::Styler::apply)).
//!
//! Rule sets can be built in code or loaded from YAML:
//!
//! ```rust
//! use tinge::RuleSet;
//!
//! let set = RuleSet::from_yaml(r#"
//! name: alerts
//! rules:
//!   - pattern: "^WARN\\b"
//!     style: {fore: yellow, mode: bold}
//!   - pattern: "\"([^\"]+)\""
//!     delegate: doc
//! "#).unwrap();
//! assert_eq!(set.name(), "alerts");
//! assert_eq!(set.rules().len(), 2);
//! ```

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::codec::StyleSpec;
use crate::error::{Result, RuleError};

/// What to do with the text a rule's pattern matched.
#[derive(Debug, Clone)]
pub enum RuleAction {
    /// Style the matched span (or its capture groups) directly.
    Style(StyleSpec),
    /// Re-apply another named rule set to the matched span.
    Delegate(String),
}

/// A single pattern-to-action rule.
///
/// Patterns are compiled in multi-line mode, so `^` and `$` anchor at
/// line boundaries. Patterns with capture groups recolor only the
/// captured substrings; patterns without recolor the whole match.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    action: RuleAction,
}

impl Rule {
    /// Creates a rule that styles its matches with `spec`.
    pub fn style(pattern: &str, spec: StyleSpec) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            action: RuleAction::Style(spec),
        })
    }

    /// Creates a rule that hands its matches to the rule set named `set`.
    pub fn delegate(pattern: &str, set: &str) -> Result<Self> {
        Ok(Self {
            pattern: compile(pattern)?,
            action: RuleAction::Delegate(set.to_string()),
        })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The rule's action.
    pub fn action(&self) -> &RuleAction {
        &self.action
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).multi_line(true).build()?)
}

/// A named, ordered list of rules.
///
/// The order given at construction is the order of application and is
/// never reordered.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from an already-built rule list.
    pub fn new(name: &str, rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            rules,
        }
    }

    /// Parses a rule set from a YAML definition.
    ///
    /// Expected shape:
    ///
    /// ```yaml
    /// name: log
    /// rules:
    ///   - pattern: "^\\[!\\]"
    ///     style: {fore: red}
    ///   - pattern: "`[^`]+`"
    ///     delegate: doc
    /// ```
    ///
    /// Each rule must carry exactly one of `style` or `delegate`.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let raw: RawRuleSet = serde_yaml::from_str(source)?;
        let mut rules = Vec::with_capacity(raw.rules.len());
        for (index, rule) in raw.rules.into_iter().enumerate() {
            let action = match (rule.style, rule.delegate) {
                (Some(spec), None) => RuleAction::Style(spec),
                (None, Some(set)) => RuleAction::Delegate(set),
                _ => {
                    return Err(RuleError::InvalidAction {
                        set: raw.name,
                        index,
                    })
                }
            };
            rules.push(Rule {
                pattern: compile(&rule.pattern)?,
                action,
            });
        }
        Ok(Self {
            name: raw.name,
            rules,
        })
    }

    /// The set's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[derive(Debug, Deserialize)]
struct RawRuleSet {
    name: String,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    pattern: String,
    #[serde(default)]
    style: Option<StyleSpec>,
    #[serde(default)]
    delegate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_style_rule_compiles() {
        let rule = Rule::style(r"^\[\*\]", StyleSpec::new().fore("blue")).unwrap();
        assert!(matches!(rule.action(), RuleAction::Style(_)));
        assert!(rule.pattern().is_match("[*] hello"));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = Rule::style(r"[unclosed", StyleSpec::new()).unwrap_err();
        assert!(matches!(err, RuleError::Pattern(_)));
    }

    #[test]
    fn test_patterns_are_multi_line() {
        let rule = Rule::style(r"^\[!\]", StyleSpec::new().fore("red")).unwrap();
        // Anchors match at every line start, not only at the string start.
        assert!(rule.pattern().is_match("ok\n[!] boom"));
    }

    // =========================================================================
    // YAML loading
    // =========================================================================

    #[test]
    fn test_from_yaml_styles_and_delegates() {
        let set = RuleSet::from_yaml(
            r##"
name: mixed
rules:
  - pattern: "^> .*$"
    style: {fore: blue}
  - pattern: "#.*$"
    delegate: comments
"##,
        )
        .unwrap();
        assert_eq!(set.name(), "mixed");
        assert!(matches!(set.rules()[0].action(), RuleAction::Style(_)));
        match set.rules()[1].action() {
            RuleAction::Delegate(name) => assert_eq!(name, "comments"),
            other => panic!("expected delegate, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_rejects_ambiguous_action() {
        let err = RuleSet::from_yaml(
            r#"
name: broken
rules:
  - pattern: "x"
    style: {fore: red}
    delegate: doc
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidAction { ref set, index: 0 } if set == "broken"
        ));
    }

    #[test]
    fn test_from_yaml_rejects_missing_action() {
        let err = RuleSet::from_yaml(
            r#"
name: broken
rules:
  - pattern: "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::InvalidAction { index: 0, .. }));
    }

    #[test]
    fn test_from_yaml_bad_pattern() {
        let err = RuleSet::from_yaml(
            r#"
name: broken
rules:
  - pattern: "[oops"
    style: {fore: red}
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::Pattern(_)));
    }

    #[test]
    fn test_from_yaml_empty_rules() {
        let set = RuleSet::from_yaml("name: empty").unwrap();
        assert!(set.rules().is_empty());
    }
}
